//! Mail Service Module
//!
//! Outbound mail providers for one-time codes:
//!
//! - **Mail Service Trait**: Common interface for all providers
//! - **Mock Implementation**: Console output for development
//! - **HTTP Relay**: Transactional mail relay over HTTPS
//! - **Adapter**: Bridges a provider to the core `MailerTrait`

pub mod http_relay;
pub mod mail_service;
pub mod mock_mail;
pub mod trait_adapter;

pub use http_relay::HttpRelayMailService;
pub use mail_service::MailService;
pub use mock_mail::MockMailService;
pub use trait_adapter::MailServiceAdapter;

use scribe_shared::config::{Environment, MailConfig, MailProvider};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create a mail service based on configuration
///
/// Outside production a relay that cannot be initialised falls back to the
/// console mock. In production the error is returned, and a configured mock
/// stays silent on stdout.
pub fn create_mail_service(
    config: &MailConfig,
    environment: Environment,
) -> Result<Box<dyn MailService>, InfrastructureError> {
    let console_output = !environment.is_production();

    match config.provider {
        MailProvider::Mock => {
            if environment.is_production() {
                tracing::warn!("Mock mail provider in production, codes will not be delivered");
            }
            Ok(Box::new(MockMailService::with_options(console_output, false)))
        }
        MailProvider::Relay => match HttpRelayMailService::new(config.clone()) {
            Ok(service) => Ok(Box::new(service)),
            Err(e) if environment.is_production() => {
                tracing::error!(error = %e, "Failed to initialize relay mail service");
                Err(e)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize relay mail service");
                tracing::warn!("Falling back to mock mail service");
                Ok(Box::new(MockMailService::new()))
            }
        },
    }
}
