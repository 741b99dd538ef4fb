pub mod validation;

#[cfg(not(target_arch = "wasm32"))]
pub mod password;
#[cfg(not(target_arch = "wasm32"))]
pub mod rate_limit;

#[cfg(not(target_arch = "wasm32"))]
pub use rate_limit::RateLimiter;
