//! OTP lifecycle module
//!
//! Email verification and password reset codes: generation, delivery,
//! constant-time verification and invalidation.

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use types::OtpDispatch;
