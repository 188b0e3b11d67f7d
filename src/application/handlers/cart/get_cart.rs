//! GetCartHandler - Query handler for reading a cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::CartId;
use crate::ports::CartRepository;

/// Query for a single cart.
#[derive(Debug, Clone)]
pub struct GetCartQuery {
    pub cart_id: CartId,
}

/// Handler for reading carts.
pub struct GetCartHandler {
    repository: Arc<dyn CartRepository>,
}

impl GetCartHandler {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetCartQuery) -> Result<Cart, CartError> {
        self.repository
            .find_by_id(&query.cart_id)
            .await?
            .ok_or_else(|| CartError::not_found(query.cart_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCartRepository;

    #[tokio::test]
    async fn returns_stored_cart() {
        let repo = Arc::new(InMemoryCartRepository::new());
        let cart = Cart::new(CartId::new());
        repo.save(&cart).await.unwrap();

        let handler = GetCartHandler::new(repo);
        let loaded = handler
            .handle(GetCartQuery { cart_id: *cart.id() })
            .await
            .unwrap();

        assert_eq!(loaded, cart);
    }

    #[tokio::test]
    async fn unknown_cart_is_not_found() {
        let handler = GetCartHandler::new(Arc::new(InMemoryCartRepository::new()));
        let id = CartId::new();

        let err = handler.handle(GetCartQuery { cart_id: id }).await.unwrap_err();

        assert_eq!(err, CartError::NotFound(id));
    }
}
