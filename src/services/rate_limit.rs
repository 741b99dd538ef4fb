//! Per-client throttling for the login endpoint.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sliding-window attempt limiter keyed by client identity.
pub struct RateLimiter {
    max_attempts: usize,
    window: Duration,
    attempts: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Record an attempt for `key`. Returns false once the budget for the
    /// current window is spent.
    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut attempts = self
            .attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = attempts.entry(key.to_string()).or_default();
        entry.retain(|&at| now.duration_since(at) < self.window);

        if entry.len() >= self.max_attempts {
            return false;
        }

        entry.push(now);

        // Drop exhausted keys so the map cannot grow without bound.
        attempts.retain(|_, times| !times.is_empty());

        true
    }
}
