//! Forgot-password dialog.

use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonVariant, Dialog, EmailInput};

/// Password-reset dialog: collects an email address and closes. The
/// reset flow itself belongs to the membership backend.
#[component]
pub fn ForgotPassword(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_email.set(String::new());
        on_close.run(());
    };

    view! {
        <Dialog open=open on_close=on_close>
            <h2 class="text-xl font-semibold text-white">"Reset password"</h2>
            <p class="mt-2 text-sm text-slate-400">
                "Enter your account's email address, and we'll send you a link to reset your password."
            </p>
            <form on:submit=on_submit class="mt-4 space-y-4">
                <EmailInput label="Email" value=email set_value=set_email />
                <div class="flex justify-end gap-3">
                    <Button
                        variant=ButtonVariant::Ghost
                        button_type="button"
                        on_click=Callback::new(move |_| on_close.run(()))
                    >
                        "Cancel"
                    </Button>
                    <Button variant=ButtonVariant::Primary>"Continue"</Button>
                </div>
            </form>
        </Dialog>
    }
}
