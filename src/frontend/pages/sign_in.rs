//! Sign-in page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::frontend::components::{
    Button, ButtonVariant, ErrorAlert, Footer, PasswordInput, TextInput,
};
use crate::frontend::pages::ForgotPassword;
use crate::services::validation::validate_sign_in;
use crate::types::LoginOutcome;

/// Sign-in card: signal-bound inputs, synchronous validation on submit,
/// and an error banner driven by the login call's status code.
#[component]
pub fn SignInPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let login_failed = RwSignal::new(None::<String>);
    let dialog_open = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // One request at a time; a submit while one is in flight is dropped.
        if submitting.get_untracked() {
            return;
        }

        let credentials =
            match validate_sign_in(&username.get_untracked(), &password.get_untracked()) {
                Ok(credentials) => {
                    username_error.set(None);
                    password_error.set(None);
                    credentials
                }
                Err(errors) => {
                    username_error.set(errors.username.map(str::to_string));
                    password_error.set(errors.password.map(str::to_string));
                    return;
                }
            };

        submitting.set(true);
        spawn_local(async move {
            match api::login(&credentials.username, &credentials.password).await {
                Ok(status) => {
                    if let Some(message) = LoginOutcome::from_status(status).banner_message() {
                        login_failed.set(Some(message.to_string()));
                    }
                }
                Err(err) => {
                    // Nothing actionable to show; the banner keeps its
                    // previous state.
                    log::error!("login request failed: {err}");
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="flex-1 flex items-center justify-center px-6 py-12">
                <div class="w-full max-w-md">
                    <div class="bg-slate-900/80 backdrop-blur-sm border border-slate-800 rounded-2xl p-8 shadow-xl">
                        <h1 class="text-3xl font-bold text-white mb-6">"Sign in"</h1>

                        {move || {
                            login_failed.get().map(|message| view! { <ErrorAlert message=message /> })
                        }}

                        <form on:submit=on_submit novalidate=true class="space-y-5">
                            <TextInput
                                label="Username"
                                name="username"
                                placeholder="username"
                                input_type="text"
                                required=true
                                autocomplete="username"
                                error=username_error
                                value=username
                                set_value=set_username
                            />
                            <PasswordInput
                                label="Password"
                                error=password_error
                                value=password
                                set_value=set_password
                            />
                            <div class="flex items-center justify-between">
                                <label class="flex items-center gap-2 text-sm text-slate-300">
                                    <input
                                        type="checkbox"
                                        name="remember"
                                        value="remember"
                                        class="w-4 h-4 rounded border-slate-700 bg-slate-800"
                                    />
                                    "Remember me"
                                </label>
                                <button
                                    type="button"
                                    class="text-sm text-orange-400 hover:text-orange-300"
                                    on:click=move |_| dialog_open.set(true)
                                >
                                    "Forgot your password?"
                                </button>
                            </div>
                            <Button
                                variant=ButtonVariant::Primary
                                full_width=true
                                loading=submitting
                                loading_text="Signing in..."
                            >
                                "Sign in"
                            </Button>
                        </form>

                        <p class="text-center text-slate-400 mt-6 text-sm">
                            "Don't have an account? "
                            <a href="/register" class="text-orange-400 hover:text-orange-300 font-medium">
                                "Sign up"
                            </a>
                        </p>
                    </div>
                </div>
            </div>

            <ForgotPassword open=dialog_open on_close=Callback::new(move |_| dialog_open.set(false)) />

            <Footer />
        </div>
    }
}
