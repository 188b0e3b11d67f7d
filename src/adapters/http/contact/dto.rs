//! HTTP DTOs for contact endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::contact::ContactReceipt;

/// Contact form body. Missing fields are treated as blank so they are
/// reported as validation errors on the named field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub received: bool,
    pub received_at: String,
    pub message: String,
}

impl From<ContactReceipt> for ContactResponse {
    fn from(receipt: ContactReceipt) -> Self {
        Self {
            received: true,
            received_at: receipt.received_at.to_rfc3339(),
            message: "Thank you for your message. We'll get back to you soon.".to_string(),
        }
    }
}
