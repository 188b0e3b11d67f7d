//! Contact Delivery Port - Interface for forwarding contact form messages.
//!
//! The storefront only validates and acknowledges messages; where they end
//! up (mailbox, CRM, log) is the adapter's business.

use async_trait::async_trait;

use crate::domain::contact::ContactMessage;

/// Errors that can occur while delivering a contact message
#[derive(Debug, thiserror::Error)]
pub enum ContactDeliveryError {
    #[error("Delivery channel unavailable: {0}")]
    Unavailable(String),

    #[error("Delivery failed: {0}")]
    Failed(String),
}

/// Port for delivering contact form messages
#[async_trait]
pub trait ContactDelivery: Send + Sync {
    /// Deliver a validated message
    ///
    /// # Errors
    /// Returns `ContactDeliveryError` if the message could not be handed off
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactDeliveryError>;
}
