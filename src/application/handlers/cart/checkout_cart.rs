//! CheckoutCartHandler - Command handler for handing a cart to checkout.
//!
//! The storefront does not process orders itself. The cart is passed to the
//! configured `CheckoutService`; on success the ordered lines are taken out
//! of the cart. Units added while the order was being placed stay behind.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::CartId;
use crate::ports::{CartRepository, CheckoutError, CheckoutService, OrderConfirmation};

/// Command to check out a cart.
#[derive(Debug, Clone)]
pub struct CheckoutCartCommand {
    pub cart_id: CartId,
}

pub struct CheckoutCartHandler {
    repository: Arc<dyn CartRepository>,
    checkout: Arc<dyn CheckoutService>,
}

impl CheckoutCartHandler {
    pub fn new(repository: Arc<dyn CartRepository>, checkout: Arc<dyn CheckoutService>) -> Self {
        Self {
            repository,
            checkout,
        }
    }

    pub async fn handle(&self, cmd: CheckoutCartCommand) -> Result<OrderConfirmation, CartError> {
        let cart = self
            .repository
            .find_by_id(&cmd.cart_id)
            .await?
            .ok_or_else(|| CartError::not_found(cmd.cart_id))?;

        if cart.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let confirmation = self
            .checkout
            .place_order(&cart)
            .await
            .map_err(|e| match e {
                CheckoutError::Unavailable(reason) => CartError::CheckoutUnavailable(reason),
                CheckoutError::Rejected(reason) => CartError::validation("cart", reason),
            })?;

        let ordered = cart.items();
        self.repository
            .modify(
                &cmd.cart_id,
                Box::new(|current: &mut Cart| {
                    current.deduct_ordered(ordered);
                    current.set_open(false);
                }),
            )
            .await?;

        tracing::info!(
            cart_id = %cmd.cart_id,
            order_reference = %confirmation.order_reference,
            total_price = confirmation.total_price,
            "Order placed"
        );

        Ok(confirmation)
    }
}
