//! Mail Service Interface
//!
//! Defines the trait implemented by every outbound mail provider.

use async_trait::async_trait;
use scribe_core::services::mail::MailMessage;

use crate::InfrastructureError;

/// Mail service trait for delivering plain-text messages
///
/// Implementations include:
/// - HTTP transactional mail relay
/// - Mock implementation for development
#[async_trait]
pub trait MailService: Send + Sync {
    /// Deliver a message
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the accepted message
    /// * `Err(InfrastructureError)` - If delivery fails
    async fn send_mail(&self, message: &MailMessage) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    async fn is_available(&self) -> bool {
        true
    }
}
