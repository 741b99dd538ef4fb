use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

use member_portal::services::password;
use member_portal::types::LoginRequest;

use crate::web::state::AppState;

/// Development login endpoint. Answers with a bare status code: 204 on
/// success, 403 on bad credentials, 404 when no account is configured,
/// 429 when rate limited. The frontend only reads the code.
#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Json<LoginRequest>,
) -> impl Responder {
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if !state.rate_limiter.allow(&format!("login:{client_ip}")) {
        return HttpResponse::TooManyRequests().finish();
    }

    let Some(account) = state.demo_account.as_deref() else {
        // No auth backend wired up.
        return HttpResponse::NotFound().finish();
    };

    let username_matches = payload.username.trim() == account.username;

    // Verify against the dummy hash on a username miss so both paths cost
    // the same.
    let stored_hash = if username_matches {
        account.password_hash.as_str()
    } else {
        account.dummy_hash.as_str()
    };

    let password_valid = password::verify(&payload.password, stored_hash).unwrap_or_else(|e| {
        log::error!("password verification error: {e}");
        false
    });

    if username_matches && password_valid {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::Forbidden().finish()
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login);
}
