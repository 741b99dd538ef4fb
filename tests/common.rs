//! Shared fixtures for integration tests.

pub const DEMO_USERNAME: &str = "gourmet";
pub const DEMO_PASSWORD: &str = "tasting-menu";

pub fn short_passwords() -> Vec<&'static str> {
    vec!["", "a", "12345", "fünf!"]
}

pub fn valid_passwords() -> Vec<&'static str> {
    vec!["123456", "correct-horse-battery", "ßßßßßß"]
}
