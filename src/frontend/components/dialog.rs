use leptos::prelude::*;

/// Overlay dialog. Clicking the backdrop or the close button fires
/// `on_close`; the caller owns the open/closed state.
#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div
                    class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                    on:click=move |_| on_close.run(())
                ></div>
                <div class="relative w-full max-w-md rounded-2xl border border-slate-800 bg-slate-900 p-6 shadow-xl">
                    <button
                        type="button"
                        class="absolute top-4 right-4 text-slate-500 hover:text-slate-300"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
