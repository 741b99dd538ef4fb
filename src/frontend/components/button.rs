use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

#[component]
pub fn Button(
    children: ChildrenFn,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center px-6 py-3 font-semibold rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-950 disabled:opacity-50 disabled:cursor-not-allowed";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-orange-500 to-amber-500 text-white hover:from-orange-600 hover:to-amber-600 focus:ring-orange-500",
        ButtonVariant::Ghost => "border border-slate-700 text-slate-300 hover:border-slate-500 hover:text-white hover:bg-slate-800/50 focus:ring-slate-500",
    };

    let loading_text = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button
            type=button_type
            class=format!(
                "{} {}{}",
                base_classes,
                variant_classes,
                if full_width { " w-full" } else { "" },
            )
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <Show when=move || loading.get() fallback=move || children()>
                <span class="flex items-center justify-center gap-2">
                    <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                    {loading_text.clone()}
                </span>
            </Show>
        </button>
    }
}
