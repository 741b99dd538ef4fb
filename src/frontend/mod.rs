pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use pages::{NotFound, RegisterPage, SignInPage};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Member Portal" />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=SignInPage />
                    <Route path=path!("/login") view=SignInPage />
                    <Route path=path!("/register") view=RegisterPage />
                </Routes>
            </main>
        </Router>
    }
}
