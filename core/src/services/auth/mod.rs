//! Authentication service module
//!
//! Email/password registration, login and the is-authenticated lookup.
//! The one-time code flows live in `services::otp`.

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
pub use types::RegistrationOutcome;
