//! CreateCartHandler - Command handler for opening a new cart.
//!
//! Idle carts are purged before each new one is stored, and the store holds
//! at most `max_carts` carts at a time.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::{CartId, Timestamp};
use crate::ports::CartRepository;

/// Handler for creating empty carts.
pub struct CreateCartHandler {
    repository: Arc<dyn CartRepository>,
    idle_ttl: Duration,
    max_carts: usize,
}

impl CreateCartHandler {
    pub fn new(repository: Arc<dyn CartRepository>, idle_ttl: Duration, max_carts: usize) -> Self {
        Self {
            repository,
            idle_ttl,
            max_carts,
        }
    }

    pub async fn handle(&self) -> Result<Cart, CartError> {
        let purged = self
            .repository
            .purge_idle(&Timestamp::ago(self.idle_ttl))
            .await?;
        if purged > 0 {
            tracing::info!(purged, "Idle carts purged");
        }

        if self.repository.count().await? >= self.max_carts {
            return Err(CartError::CapacityReached(self.max_carts));
        }

        let cart = Cart::new(CartId::new());
        self.repository.save(&cart).await?;

        tracing::info!(cart_id = %cart.id(), "Cart created");
        Ok(cart)
    }
}
