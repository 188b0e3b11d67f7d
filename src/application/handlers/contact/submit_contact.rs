//! SubmitContactHandler - Command handler for the contact form.

use std::sync::Arc;

use crate::domain::contact::{ContactError, ContactMessage};
use crate::domain::foundation::Timestamp;
use crate::ports::{ContactDelivery, ContactDeliveryError};

/// Raw contact form fields.
#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgement returned once the message has been handed off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub received_at: Timestamp,
}

pub struct SubmitContactHandler {
    delivery: Arc<dyn ContactDelivery>,
}

impl SubmitContactHandler {
    pub fn new(delivery: Arc<dyn ContactDelivery>) -> Self {
        Self { delivery }
    }

    pub async fn handle(&self, cmd: SubmitContactCommand) -> Result<ContactReceipt, ContactError> {
        let message = ContactMessage::new(cmd.name, cmd.email, cmd.message).map_err(|e| {
            tracing::warn!(field = e.field(), "Contact form rejected");
            e
        })?;

        self.delivery
            .deliver(&message)
            .await
            .map_err(|e| match e {
                ContactDeliveryError::Unavailable(reason) => {
                    ContactError::DeliveryUnavailable(reason)
                }
                ContactDeliveryError::Failed(reason) => ContactError::DeliveryFailed(reason),
            })?;

        Ok(ContactReceipt {
            received_at: *message.received_at(),
        })
    }
}
