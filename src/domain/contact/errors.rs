//! Contact form error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Message delivery unavailable: {0}")]
    DeliveryUnavailable(String),

    #[error("Message delivery failed: {0}")]
    DeliveryFailed(String),
}

impl ContactError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ContactError::Invalid(_) => ErrorCode::ValidationFailed,
            ContactError::DeliveryUnavailable(_) | ContactError::DeliveryFailed(_) => {
                ErrorCode::DeliveryFailed
            }
        }
    }
}
