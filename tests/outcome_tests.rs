#[cfg(test)]
pub mod outcome_tests {
    use member_portal::types::*;

    #[test]
    fn test_status_403_maps_to_invalid_credentials() {
        let outcome = LoginOutcome::from_status(403);
        assert_eq!(outcome, LoginOutcome::InvalidCredentials);
        assert_eq!(
            outcome.banner_message(),
            Some("Username or password is incorrect.")
        );
    }

    #[test]
    fn test_status_404_maps_to_server_error() {
        let outcome = LoginOutcome::from_status(404);
        assert_eq!(outcome, LoginOutcome::ServerError);
        assert_eq!(
            outcome.banner_message(),
            Some("Something went wrong. Please try again later.")
        );
    }

    #[test]
    fn test_unhandled_statuses_carry_no_banner_message() {
        for status in [200u16, 201, 204, 400, 401, 429, 500, 503] {
            let outcome = LoginOutcome::from_status(status);
            assert_eq!(outcome, LoginOutcome::Other(status));
            assert_eq!(outcome.banner_message(), None, "status {status}");
        }
    }

    #[test]
    fn test_banner_keeps_previous_state_on_success() {
        // The banner only changes when an outcome carries a message.
        let mut banner: Option<String> = Some(INVALID_CREDENTIALS_MESSAGE.to_string());

        if let Some(message) = LoginOutcome::from_status(204).banner_message() {
            banner = Some(message.to_string());
        }
        assert_eq!(banner.as_deref(), Some(INVALID_CREDENTIALS_MESSAGE));

        if let Some(message) = LoginOutcome::from_status(404).banner_message() {
            banner = Some(message.to_string());
        }
        assert_eq!(banner.as_deref(), Some(SERVER_ERROR_MESSAGE));
    }
}
