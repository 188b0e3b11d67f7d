//! Checkout adapter used while online ordering is switched off.
//!
//! Every order attempt is refused with `CheckoutError::Unavailable`; the
//! cart is left untouched so the customer can order by phone instead.

use async_trait::async_trait;

use crate::domain::cart::Cart;
use crate::ports::{CheckoutError, CheckoutService, OrderConfirmation};

/// Refuses every order.
#[derive(Debug, Clone)]
pub struct UnavailableCheckout {
    reason: String,
}

impl UnavailableCheckout {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableCheckout {
    fn default() -> Self {
        Self::new("online ordering is not available yet")
    }
}

#[async_trait]
impl CheckoutService for UnavailableCheckout {
    async fn place_order(&self, cart: &Cart) -> Result<OrderConfirmation, CheckoutError> {
        tracing::warn!(
            cart_id = %cart.id(),
            total_items = cart.total_items(),
            "Checkout attempted while ordering is unavailable"
        );
        Err(CheckoutError::Unavailable(self.reason.clone()))
    }
}
