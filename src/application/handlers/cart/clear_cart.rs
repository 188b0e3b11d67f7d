//! ClearCartHandler - Command handler for emptying a cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::CartId;
use crate::ports::CartRepository;

/// Command to remove every line from a cart.
#[derive(Debug, Clone)]
pub struct ClearCartCommand {
    pub cart_id: CartId,
}

pub struct ClearCartHandler {
    repository: Arc<dyn CartRepository>,
}

impl ClearCartHandler {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ClearCartCommand) -> Result<Cart, CartError> {
        let mut removed = 0;
        let cart = self
            .repository
            .modify(
                &cmd.cart_id,
                Box::new(|cart: &mut Cart| removed = cart.clear()),
            )
            .await?
            .ok_or_else(|| CartError::not_found(cmd.cart_id))?;

        tracing::info!(cart_id = %cmd.cart_id, removed_lines = removed, "Cart cleared");
        Ok(cart)
    }
}
