//! Client-side calls to the authentication API.

use gloo_net::http::Request;

use crate::common::errors::ApiError;
use crate::types::LoginRequest;

/// Submit credentials to the login endpoint and surface the raw HTTP
/// status code. Interpreting the code is the caller's concern; the
/// response body is ignored.
pub async fn login(username: &str, password: &str) -> Result<u16, ApiError> {
    let payload = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = Request::post("/api/auth/login")
        .json(&payload)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(response.status())
}
