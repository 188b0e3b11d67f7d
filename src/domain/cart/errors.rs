//! Cart-specific error types.

use thiserror::Error;

use crate::domain::catalogue::CatalogueError;
use crate::domain::foundation::{CartId, DomainError, ErrorCode};

/// Cart-specific errors.
///
/// Operations on products that are not in the cart are not errors; they
/// leave the cart unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Cart not found: {0}")]
    NotFound(CartId),

    /// Product to add does not exist in the catalogue.
    #[error("Product not found: {0}")]
    UnknownProduct(String),

    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The checkout collaborator cannot take orders.
    #[error("Checkout is unavailable: {0}")]
    CheckoutUnavailable(String),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// No room for another cart until idle ones expire.
    #[error("Too many active carts (limit {0})")]
    CapacityReached(usize),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl CartError {
    pub fn not_found(id: CartId) -> Self {
        CartError::NotFound(id)
    }
    pub fn unknown_product(id: impl Into<String>) -> Self {
        CartError::UnknownProduct(id.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CartError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CartError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            CartError::NotFound(_) => ErrorCode::CartNotFound,
            CartError::UnknownProduct(_) => ErrorCode::ProductNotFound,
            CartError::EmptyCart => ErrorCode::ValidationFailed,
            CartError::CheckoutUnavailable(_) => ErrorCode::CheckoutUnavailable,
            CartError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CartError::CapacityReached(_) => ErrorCode::CapacityReached,
            CartError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for CartError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ProductNotFound => CartError::UnknownProduct(err.message),
            ErrorCode::CheckoutUnavailable => CartError::CheckoutUnavailable(err.message),
            ErrorCode::ValidationFailed => CartError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => CartError::Infrastructure(err.to_string()),
        }
    }
}

impl From<CatalogueError> for CartError {
    fn from(err: CatalogueError) -> Self {
        match err {
            CatalogueError::ProductNotFound(id) => CartError::UnknownProduct(id),
            other => CartError::Infrastructure(other.to_string()),
        }
    }
}
