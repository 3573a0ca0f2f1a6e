//! Mock Mail Service Implementation
//!
//! Logs messages instead of sending them. Used for local development and
//! by the API tests, which read delivered codes back from the outbox.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use scribe_core::services::mail::MailMessage;
use scribe_shared::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Messages kept in the outbox; older ones are dropped
pub const OUTBOX_CAPACITY: usize = 64;

/// Mock mail service for development and testing
///
/// Clones share the counter and the outbox.
#[derive(Clone)]
pub struct MockMailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// The most recent `OUTBOX_CAPACITY` messages
    outbox: Arc<Mutex<VecDeque<MailMessage>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to the console
    console_output: bool,
}

impl MockMailService {
    /// Create a new mock mail service
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            outbox: Arc::new(Mutex::new(VecDeque::with_capacity(OUTBOX_CAPACITY))),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Recent messages, oldest first
    pub fn sent_messages(&self) -> Vec<MailMessage> {
        self.outbox
            .lock()
            .map(|outbox| outbox.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// The most recent message sent to `to`
    pub fn last_message_to(&self, to: &str) -> Option<MailMessage> {
        self.sent_messages().into_iter().rev().find(|m| m.to == to)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_mail(&self, message: &MailMessage) -> Result<String, InfrastructureError> {
        let masked_to = mask_email(&message.to);

        if self.simulate_failure {
            warn!(provider = "mock", to = %masked_to, "Mock mail service simulating failure");
            return Err(InfrastructureError::Mail(
                "Simulated mail delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if let Ok(mut outbox) = self.outbox.lock() {
            if outbox.len() == OUTBOX_CAPACITY {
                outbox.pop_front();
            }
            outbox.push_back(message.clone());
        }

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", message.to);
            println!("Subject: {}", message.subject);
            println!("{}", message.text_body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mail_service",
            provider = "mock",
            to = %masked_to,
            message_id = %message_id,
            subject = %message.subject,
            "Mail sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}
