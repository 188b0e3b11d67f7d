//! In-Memory Cart Repository Adapter
//!
//! Stores carts in memory. Carts are lost on restart, matching the
//! storefront's session-only cart, and idle ones are dropped by `purge_idle`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::cart::Cart;
use crate::domain::foundation::{CartId, DomainError, Timestamp};
use crate::ports::{CartMutation, CartRepository};

/// In-memory storage for carts
#[derive(Debug, Clone)]
pub struct InMemoryCartRepository {
    carts: Arc<RwLock<HashMap<CartId, Cart>>>,
}

impl InMemoryCartRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self {
            carts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored carts (useful for tests)
    pub async fn clear(&self) {
        self.carts.write().await.clear();
    }
}

impl Default for InMemoryCartRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn save(&self, cart: &Cart) -> Result<(), DomainError> {
        let mut carts = self.carts.write().await;
        carts.insert(*cart.id(), cart.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &CartId) -> Result<Option<Cart>, DomainError> {
        let carts = self.carts.read().await;
        Ok(carts.get(id).cloned())
    }

    async fn modify(
        &self,
        id: &CartId,
        mutation: CartMutation<'_>,
    ) -> Result<Option<Cart>, DomainError> {
        let mut carts = self.carts.write().await;
        Ok(carts.get_mut(id).map(|cart| {
            mutation(cart);
            cart.clone()
        }))
    }

    async fn purge_idle(&self, idle_since: &Timestamp) -> Result<usize, DomainError> {
        let mut carts = self.carts.write().await;
        let before = carts.len();
        carts.retain(|_, cart| !cart.updated_at().is_before(idle_since));
        Ok(before - carts.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.carts.read().await.len())
    }
}
