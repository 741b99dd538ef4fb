use actix_web::{get, web, Responder};

use crate::web::helpers::render;
use crate::web::templates::ShellTemplate;

// Every frontend route serves the same shell; the client router picks
// the page.

#[get("/")]
pub async fn index() -> impl Responder {
    render(ShellTemplate {
        title: "Sign in - Member Portal",
    })
}

#[get("/login")]
pub async fn login_page() -> impl Responder {
    render(ShellTemplate {
        title: "Sign in - Member Portal",
    })
}

#[get("/register")]
pub async fn register_page() -> impl Responder {
    render(ShellTemplate {
        title: "Create account - Member Portal",
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(login_page).service(register_page);
}
