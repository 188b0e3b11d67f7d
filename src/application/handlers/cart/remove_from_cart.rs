//! RemoveFromCartHandler - Command handler for dropping a line from the cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError, LineChange};
use crate::domain::foundation::{CartId, ProductId};
use crate::ports::CartRepository;

use super::CartCommandResult;

/// Command to remove a product line from a cart.
#[derive(Debug, Clone)]
pub struct RemoveFromCartCommand {
    pub cart_id: CartId,
    pub product_id: String,
}

/// Handler for removing cart lines.
pub struct RemoveFromCartHandler {
    repository: Arc<dyn CartRepository>,
}

impl RemoveFromCartHandler {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RemoveFromCartCommand) -> Result<CartCommandResult, CartError> {
        let product_id = ProductId::new(cmd.product_id)
            .map_err(|e| CartError::validation("product_id", e.to_string()))?;

        let mut change = LineChange::Unchanged;
        let cart = self
            .repository
            .modify(
                &cmd.cart_id,
                Box::new(|cart: &mut Cart| change = cart.remove(&product_id)),
            )
            .await?
            .ok_or_else(|| CartError::not_found(cmd.cart_id))?;

        if change == LineChange::Removed {
            tracing::info!(cart_id = %cmd.cart_id, product_id = %product_id, "Product removed from cart");
        }

        Ok(CartCommandResult { cart, change })
    }
}
