mod common;

#[cfg(test)]
pub mod validation_tests {
    use super::common::*;

    use member_portal::services::validation::*;
    use member_portal::types::Credentials;

    #[test]
    fn test_validate_password_rejects_short_passwords() {
        for pw in short_passwords() {
            let err = validate_password(pw).unwrap_err();
            assert_eq!(err, PASSWORD_TOO_SHORT_MESSAGE, "password {pw:?}");
            assert!(!err.is_empty());
        }
    }

    #[test]
    fn test_validate_password_accepts_six_or_more_characters() {
        for pw in valid_passwords() {
            assert!(validate_password(pw).is_ok(), "password {pw:?}");
        }
    }

    #[test]
    fn test_validate_password_counts_characters_not_bytes() {
        // 5 characters, 10 bytes
        assert!(validate_password("ößüäé").is_err());
        // 6 characters, 12 bytes
        assert!(validate_password("ßßßßßß").is_ok());
    }

    #[test]
    fn test_validate_username_requires_nonempty() {
        assert_eq!(
            validate_username("").unwrap_err(),
            USERNAME_REQUIRED_MESSAGE
        );
        assert_eq!(
            validate_username("   ").unwrap_err(),
            USERNAME_REQUIRED_MESSAGE
        );
        assert!(validate_username(DEMO_USERNAME).is_ok());
    }

    #[test]
    fn test_validate_sign_in_blocks_submission_on_short_password() {
        // An `Err` carries no credentials, so no login call can be made.
        let errors = validate_sign_in(DEMO_USERNAME, "12345").unwrap_err();
        assert_eq!(errors.username, None);
        assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT_MESSAGE));
    }

    #[test]
    fn test_validate_sign_in_reports_both_fields() {
        let errors = validate_sign_in("", "").unwrap_err();
        assert_eq!(errors.username, Some(USERNAME_REQUIRED_MESSAGE));
        assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT_MESSAGE));
        assert!(!errors.is_clear());
    }

    #[test]
    fn test_validate_sign_in_builds_credentials() {
        let credentials = validate_sign_in("  gourmet ", DEMO_PASSWORD).unwrap();
        assert_eq!(
            credentials,
            Credentials {
                username: "gourmet".to_string(),
                password: DEMO_PASSWORD.to_string(),
            }
        );
    }
}
