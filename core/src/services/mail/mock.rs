//! Recording mailer for service tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::message::MailMessage;
use super::traits::MailerTrait;

/// Captures every message; can be switched into a failing mode
#[derive(Clone, Default)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<MailMessage>>>,
    pub should_fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_message(&self) -> Option<MailMessage> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send(&self, message: &MailMessage) -> Result<String, String> {
        if self.should_fail {
            return Err("relay unavailable".to_string());
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(format!("mock-{}", sent.len()))
    }
}
