//! HTTP Mail Relay Implementation
//!
//! Delivers messages through a transactional mail relay that accepts a JSON
//! payload and authenticates with an `api-key` header. The request shape
//! follows the Brevo `smtp/email` endpoint. Each message is attempted once.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use scribe_core::services::mail::MailMessage;
use scribe_shared::config::MailConfig;
use scribe_shared::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct RelayContact<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

/// JSON body accepted by the relay
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RelayRequest<'a> {
    pub sender: RelayContact<'a>,
    pub to: Vec<RelayContact<'a>>,
    pub subject: &'a str,
    pub text_content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelayResponse {
    message_id: Option<String>,
}

/// Mail service backed by an HTTP relay
pub struct HttpRelayMailService {
    client: Client,
    config: MailConfig,
}

impl HttpRelayMailService {
    /// Create a relay client
    ///
    /// Fails with `InfrastructureError::Config` when no API key is set.
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_KEY is required for the relay mail provider".to_string(),
            ));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub(crate) fn build_request<'a>(&'a self, message: &'a MailMessage) -> RelayRequest<'a> {
        RelayRequest {
            sender: RelayContact {
                email: &self.config.from_address,
                name: Some(&self.config.from_name),
            },
            to: vec![RelayContact {
                email: &message.to,
                name: None,
            }],
            subject: &message.subject,
            text_content: &message.text_body,
        }
    }
}

#[async_trait]
impl MailService for HttpRelayMailService {
    async fn send_mail(&self, message: &MailMessage) -> Result<String, InfrastructureError> {
        let masked_to = mask_email(&message.to);

        let response = self
            .client
            .post(&self.config.relay_url)
            .header("api-key", &self.config.api_key)
            .json(&self.build_request(message))
            .send()
            .await
            .map_err(|e| {
                error!(provider = "relay", to = %masked_to, error = %e, "Mail relay request failed");
                InfrastructureError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                provider = "relay",
                to = %masked_to,
                status = status.as_u16(),
                body = %body,
                "Mail relay rejected message"
            );
            return Err(InfrastructureError::Mail(format!(
                "Relay returned status {}",
                status
            )));
        }

        let message_id = response
            .json::<RelayResponse>()
            .await
            .ok()
            .and_then(|r| r.message_id)
            .unwrap_or_default();

        info!(
            target: "mail_service",
            provider = "relay",
            to = %masked_to,
            message_id = %message_id,
            "Mail sent successfully"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Relay"
    }
}
