//! SetDrawerHandler - Command handler for the cart drawer's visibility.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::CartId;
use crate::ports::CartRepository;

/// Command to open or close the cart drawer.
#[derive(Debug, Clone)]
pub struct SetDrawerCommand {
    pub cart_id: CartId,
    pub open: bool,
}

pub struct SetDrawerHandler {
    repository: Arc<dyn CartRepository>,
}

impl SetDrawerHandler {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SetDrawerCommand) -> Result<Cart, CartError> {
        let open = cmd.open;
        let cart = self
            .repository
            .modify(&cmd.cart_id, Box::new(move |cart: &mut Cart| cart.set_open(open)))
            .await?
            .ok_or_else(|| CartError::not_found(cmd.cart_id))?;

        tracing::debug!(cart_id = %cmd.cart_id, open, "Cart drawer toggled");
        Ok(cart)
    }
}
