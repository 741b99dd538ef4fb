mod common;

#[cfg(test)]
pub mod auth_tests {
    use std::time::Duration;

    use super::common::*;

    use member_portal::services::password;
    use member_portal::services::RateLimiter;

    #[test]
    fn test_password_hash_verify_round_trip() {
        let hash = password::hash(DEMO_PASSWORD).unwrap();
        assert!(password::verify(DEMO_PASSWORD, &hash).unwrap());
        assert!(!password::verify("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_password_verify_rejects_malformed_hash() {
        assert!(password::verify(DEMO_PASSWORD, "not-a-phc-hash").is_err());
    }

    #[test]
    fn test_rate_limiter_enforces_budget() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        assert!(limiter.allow("login:10.0.0.1"));
        assert!(limiter.allow("login:10.0.0.1"));
        assert!(limiter.allow("login:10.0.0.1"));
        assert!(!limiter.allow("login:10.0.0.1"));
    }

    #[test]
    fn test_rate_limiter_tracks_keys_independently() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.allow("login:10.0.0.1"));
        assert!(!limiter.allow("login:10.0.0.1"));
        assert!(limiter.allow("login:10.0.0.2"));
    }

    #[test]
    fn test_rate_limiter_window_expires() {
        let limiter = RateLimiter::new(1, Duration::from_millis(20));
        assert!(limiter.allow("login:10.0.0.1"));
        assert!(!limiter.allow("login:10.0.0.1"));
        std::thread::sleep(Duration::from_millis(30));
        assert!(limiter.allow("login:10.0.0.1"));
    }
}
