//! Client-side credential validation.
//!
//! Validation and submission are a single atomic step: the submit handler
//! calls [`validate_sign_in`] on the current input values and either gets
//! credentials to send or the field errors that block the attempt. There
//! is no window in which stale error flags can leak into the decision.

use crate::types::Credentials;

pub const PASSWORD_MIN_LEN: usize = 6;

pub const USERNAME_REQUIRED_MESSAGE: &str = "Please enter your username.";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters long.";

/// Per-field errors from a failed validation pass. A `None` field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Username must be non-empty (surrounding whitespace does not count).
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        Err(USERNAME_REQUIRED_MESSAGE)
    } else {
        Ok(())
    }
}

/// Password must be at least [`PASSWORD_MIN_LEN`] characters.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        Err(PASSWORD_TOO_SHORT_MESSAGE)
    } else {
        Ok(())
    }
}

/// Validate both fields and produce the credentials for this attempt.
///
/// `Err` carries the error state for every field, so callers can update
/// all field indicators in one pass; an `Err` also means no network call
/// is made.
pub fn validate_sign_in(username: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let errors = FieldErrors {
        username: validate_username(username).err(),
        password: validate_password(password).err(),
    };

    if !errors.is_clear() {
        return Err(errors);
    }

    Ok(Credentials {
        username: username.trim().to_string(),
        password: password.to_string(),
    })
}
