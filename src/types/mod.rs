use serde::{Deserialize, Serialize};

/// Credentials captured from the sign-in form at submit time. Built once
/// per attempt, handed to the login call, then dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login request payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Banner message shown when the login endpoint rejects the credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Username or password is incorrect.";

/// Banner message for failures the user cannot act on.
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Interpretation of the HTTP status code returned by the login call.
///
/// Only two codes get special handling; everything else (success codes
/// included) passes through without touching the error banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    InvalidCredentials,
    ServerError,
    Other(u16),
}

impl LoginOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => Self::InvalidCredentials,
            404 => Self::ServerError,
            other => Self::Other(other),
        }
    }

    /// Message for the error banner. `None` means the banner keeps
    /// whatever state it had before the attempt.
    pub fn banner_message(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCredentials => Some(INVALID_CREDENTIALS_MESSAGE),
            Self::ServerError => Some(SERVER_ERROR_MESSAGE),
            Self::Other(_) => None,
        }
    }
}
