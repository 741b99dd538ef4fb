//! Page components for the member portal frontend

mod forgot_password;
mod not_found;
mod register;
mod sign_in;

pub use forgot_password::ForgotPassword;
pub use not_found::NotFound;
pub use register::RegisterPage;
pub use sign_in::SignInPage;
