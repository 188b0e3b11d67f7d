//! Contact delivery that records messages in the service log.
//!
//! The shop has no mail integration yet. Each message is announced in the
//! structured log and then dropped; nothing is retained in memory.

use async_trait::async_trait;

use crate::domain::contact::ContactMessage;
use crate::ports::{ContactDelivery, ContactDeliveryError};

/// Logs each contact message without keeping it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingContactDelivery;

impl LoggingContactDelivery {
    pub fn new() -> Self {
        Self
    }
}

/// Domain part of an address, so the log never carries the full mailbox.
fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map_or("", |(_, domain)| domain)
}

#[async_trait]
impl ContactDelivery for LoggingContactDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactDeliveryError> {
        tracing::info!(
            email_domain = email_domain(message.email()),
            length = message.message().chars().count(),
            "Contact message received"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivery_always_succeeds() {
        let delivery = LoggingContactDelivery::new();
        let message = ContactMessage::new("Layla", "layla@example.ae", "Hello").unwrap();

        assert!(delivery.deliver(&message).await.is_ok());
        assert!(delivery.deliver(&message).await.is_ok());
    }

    #[test]
    fn test_email_domain_strips_mailbox() {
        assert_eq!(email_domain("layla@example.ae"), "example.ae");
        assert_eq!(email_domain("no-at-sign"), "");
    }
}
