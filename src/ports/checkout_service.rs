//! Checkout Service Port - Interface for turning a cart into an order.
//!
//! Payment and order management live outside the storefront. This port
//! only fixes the shape of the hand-off: the cart goes in, an order
//! confirmation comes out.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::cart::Cart;
use crate::domain::foundation::Timestamp;

/// Errors that can occur during checkout
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Checkout unavailable: {0}")]
    Unavailable(String),

    #[error("Order rejected: {0}")]
    Rejected(String),
}

/// Confirmation returned by a successful checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub order_reference: String,
    pub total_items: u64,
    pub total_price: u64,
    pub placed_at: Timestamp,
}

/// Port for placing orders from a cart
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Place an order for the cart contents
    ///
    /// # Errors
    /// - `Unavailable` if orders cannot be taken at all
    /// - `Rejected` if this particular order was refused
    async fn place_order(&self, cart: &Cart) -> Result<OrderConfirmation, CheckoutError>;
}
