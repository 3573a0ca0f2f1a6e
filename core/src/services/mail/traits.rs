//! Trait for outbound mail integration

use async_trait::async_trait;

use super::message::MailMessage;

/// Trait for mail delivery integration
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Deliver a message, returning the provider's message id
    async fn send(&self, message: &MailMessage) -> Result<String, String>;
}
