//! Mail Service Trait Adapter
//!
//! Implements the core `MailerTrait` for any infrastructure `MailService`,
//! bridging provider errors into the plain strings the core expects.

use async_trait::async_trait;
use std::sync::Arc;

use scribe_core::services::mail::{MailMessage, MailerTrait};

use super::mail_service::MailService;

/// Adapter that implements the core MailerTrait for a mail provider
#[derive(Clone)]
pub struct MailServiceAdapter {
    inner: Arc<dyn MailService>,
}

impl MailServiceAdapter {
    /// Wrap a concrete provider
    pub fn new(service: impl MailService + 'static) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }

    /// Wrap a provider built by `create_mail_service`
    pub fn from_boxed(service: Box<dyn MailService>) -> Self {
        Self {
            inner: Arc::from(service),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl MailerTrait for MailServiceAdapter {
    async fn send(&self, message: &MailMessage) -> Result<String, String> {
        self.inner
            .send_mail(message)
            .await
            .map_err(|e| e.to_string())
    }
}
