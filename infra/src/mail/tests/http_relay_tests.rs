//! Unit tests for the HTTP relay mail service

use scribe_core::services::mail::MailMessage;
use scribe_shared::config::{MailConfig, MailProvider};

use crate::mail::{HttpRelayMailService, MailService};
use crate::InfrastructureError;

fn relay_config(api_key: &str) -> MailConfig {
    MailConfig {
        provider: MailProvider::Relay,
        api_key: api_key.to_string(),
        from_address: "no-reply@scribe.test".to_string(),
        from_name: "Scribe".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_missing_api_key_is_config_error() {
    let result = HttpRelayMailService::new(relay_config("  "));
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_request_body_shape() {
    let service = HttpRelayMailService::new(relay_config("key")).unwrap();
    let message = MailMessage::new("alice@example.com", "Verify your email", "Code 123456");

    let body = serde_json::to_value(service.build_request(&message)).unwrap();

    assert_eq!(body["sender"]["email"], "no-reply@scribe.test");
    assert_eq!(body["sender"]["name"], "Scribe");
    assert_eq!(body["to"][0]["email"], "alice@example.com");
    assert!(body["to"][0].get("name").is_none());
    assert_eq!(body["subject"], "Verify your email");
    assert_eq!(body["textContent"], "Code 123456");
}

#[tokio::test]
async fn test_unreachable_relay_fails() {
    let mut config = relay_config("key");
    config.relay_url = "http://127.0.0.1:9/v3/smtp/email".to_string();
    config.request_timeout_secs = 2;
    let service = HttpRelayMailService::new(config).unwrap();

    let result = service
        .send_mail(&MailMessage::new("alice@example.com", "s", "b"))
        .await;

    assert!(matches!(result, Err(InfrastructureError::Http(_))));
    assert_eq!(service.provider_name(), "Relay");
}
