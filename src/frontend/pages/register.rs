//! Registration page.

use leptos::prelude::*;

use crate::frontend::components::Footer;

/// Static shell for the sign-up route; the registration flow is owned by
/// the membership backend.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="flex-1 flex items-center justify-center px-6 py-12">
                <div class="w-full max-w-md">
                    <div class="bg-slate-900/80 backdrop-blur-sm border border-slate-800 rounded-2xl p-8 shadow-xl">
                        <h1 class="text-3xl font-bold text-white">"Create account"</h1>
                        <p class="text-slate-400 mt-2 mb-6">"Join the member portal"</p>
                        <form class="space-y-5">
                            <div>
                                <label for="username" class="block text-sm font-medium text-slate-300 mb-2">
                                    "Username"
                                </label>
                                <input
                                    type="text"
                                    id="username"
                                    name="username"
                                    placeholder="username"
                                    required
                                    class="w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700 text-white placeholder-slate-500"
                                />
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-medium text-slate-300 mb-2">
                                    "Email"
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    placeholder="you@example.com"
                                    required
                                    class="w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700 text-white placeholder-slate-500"
                                />
                            </div>
                            <div>
                                <label for="password" class="block text-sm font-medium text-slate-300 mb-2">
                                    "Password"
                                </label>
                                <input
                                    type="password"
                                    id="password"
                                    name="password"
                                    placeholder="••••••"
                                    required
                                    class="w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700 text-white placeholder-slate-500"
                                />
                            </div>
                            <button
                                type="submit"
                                class="w-full px-6 py-3 font-semibold rounded-lg bg-gradient-to-r from-orange-500 to-amber-500 text-white hover:from-orange-600 hover:to-amber-600"
                            >
                                "Sign up"
                            </button>
                        </form>
                        <p class="text-center text-slate-400 mt-6 text-sm">
                            "Already have an account? "
                            <a href="/login" class="text-orange-400 hover:text-orange-300 font-medium">
                                "Sign in"
                            </a>
                        </p>
                    </div>
                </div>
            </div>
            <Footer />
        </div>
    }
}
