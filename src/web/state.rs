use std::sync::Arc;
use std::time::Duration;

use member_portal::services::{password, RateLimiter};

/// Login attempt budget per client IP.
pub const LOGIN_MAX_ATTEMPTS: usize = 5;
pub const LOGIN_WINDOW: Duration = Duration::from_secs(300);

/// The development account the login endpoint verifies against.
pub struct DemoAccount {
    pub username: String,
    pub password_hash: String,
    /// Hash verified when the username does not match, so response timing
    /// does not reveal which usernames exist.
    pub dummy_hash: String,
}

#[derive(Clone)]
pub struct AppState {
    pub demo_account: Option<Arc<DemoAccount>>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Build state from `PORTAL_DEMO_USER` / `PORTAL_DEMO_PASSWORD`. With
    /// no account configured the login endpoint answers 404, which the
    /// frontend reports as a generic failure.
    pub fn from_env() -> Self {
        let demo_account = match (
            std::env::var("PORTAL_DEMO_USER"),
            std::env::var("PORTAL_DEMO_PASSWORD"),
        ) {
            (Ok(username), Ok(pw)) if !username.trim().is_empty() => {
                match DemoAccount::new(username.trim().to_string(), &pw) {
                    Ok(account) => Some(Arc::new(account)),
                    Err(e) => {
                        log::error!("failed to prepare demo account: {e}");
                        None
                    }
                }
            }
            _ => None,
        };

        if demo_account.is_none() {
            log::warn!(
                "no demo account configured (PORTAL_DEMO_USER/PORTAL_DEMO_PASSWORD); \
                 /api/auth/login will answer 404"
            );
        }

        Self {
            demo_account,
            rate_limiter: Arc::new(RateLimiter::new(LOGIN_MAX_ATTEMPTS, LOGIN_WINDOW)),
        }
    }
}

impl DemoAccount {
    fn new(username: String, pw: &str) -> Result<Self, argon2::password_hash::Error> {
        Ok(Self {
            username,
            password_hash: password::hash(pw)?,
            dummy_hash: password::hash("dummy-password-for-timing")?,
        })
    }
}
