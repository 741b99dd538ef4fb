use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-800 bg-slate-900/50">
            <div class="max-w-6xl mx-auto px-6 py-10 text-center">
                <p class="text-xl font-bold mb-2">"Member Portal"</p>
                <p class="text-xs text-slate-600">"© 2026 Member Portal. All rights reserved."</p>
            </div>
        </footer>
    }
}
