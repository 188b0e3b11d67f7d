//! Contact delivery that keeps every message, for assertions in tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::contact::ContactMessage;
use crate::ports::{ContactDelivery, ContactDeliveryError};

#[derive(Debug, Clone, Default)]
pub struct RecordingContactDelivery {
    delivered: Arc<RwLock<Vec<ContactMessage>>>,
}

impl RecordingContactDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, oldest first.
    pub async fn delivered(&self) -> Vec<ContactMessage> {
        self.delivered.read().await.clone()
    }
}

#[async_trait]
impl ContactDelivery for RecordingContactDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactDeliveryError> {
        self.delivered.write().await.push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_messages_in_order() {
        let delivery = RecordingContactDelivery::new();
        let first = ContactMessage::new("Layla", "layla@example.ae", "Hello").unwrap();
        let second = ContactMessage::new("Omar", "omar@example.ae", "Hi again").unwrap();

        delivery.deliver(&first).await.unwrap();
        delivery.deliver(&second).await.unwrap();

        let delivered = delivery.delivered().await;
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].name(), "Layla");
        assert_eq!(delivered[1].name(), "Omar");
    }
}
