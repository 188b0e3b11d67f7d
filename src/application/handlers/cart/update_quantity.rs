//! UpdateQuantityHandler - Command handler for changing a line's quantity.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError, LineChange};
use crate::domain::foundation::{CartId, ProductId};
use crate::ports::CartRepository;

use super::CartCommandResult;

/// Command to set the quantity of a cart line.
///
/// A quantity of zero or below removes the line. Products that are not in
/// the cart are ignored.
#[derive(Debug, Clone)]
pub struct UpdateQuantityCommand {
    pub cart_id: CartId,
    pub product_id: String,
    pub quantity: i64,
}

/// Handler for quantity changes.
pub struct UpdateQuantityHandler {
    repository: Arc<dyn CartRepository>,
}

impl UpdateQuantityHandler {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateQuantityCommand) -> Result<CartCommandResult, CartError> {
        let product_id = ProductId::new(cmd.product_id)
            .map_err(|e| CartError::validation("product_id", e.to_string()))?;
        if cmd.quantity > i64::from(u32::MAX) {
            return Err(CartError::validation(
                "quantity",
                format!("must be at most {}", u32::MAX),
            ));
        }

        let mut change = LineChange::Unchanged;
        let cart = self
            .repository
            .modify(
                &cmd.cart_id,
                Box::new(|cart: &mut Cart| {
                    change = cart.update_quantity(&product_id, cmd.quantity)
                }),
            )
            .await?
            .ok_or_else(|| CartError::not_found(cmd.cart_id))?;

        match change {
            LineChange::Unchanged => tracing::debug!(
                cart_id = %cmd.cart_id,
                product_id = %product_id,
                "Quantity update ignored, product not in cart"
            ),
            _ => tracing::info!(
                cart_id = %cmd.cart_id,
                product_id = %product_id,
                quantity = cmd.quantity,
                ?change,
                "Cart quantity updated"
            ),
        }

        Ok(CartCommandResult { cart, change })
    }
}
