//! AddToCartHandler - Command handler for putting a product in the cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError, LineChange};
use crate::domain::catalogue::Catalogue;
use crate::domain::foundation::CartId;
use crate::ports::CartRepository;

use super::CartCommandResult;

/// Command to add a product to a cart.
#[derive(Debug, Clone)]
pub struct AddToCartCommand {
    pub cart_id: CartId,
    pub product_id: String,
    /// Defaults to 1 when absent.
    pub quantity: Option<u32>,
}

/// Handler for adding products to carts.
pub struct AddToCartHandler {
    catalogue: Arc<Catalogue>,
    repository: Arc<dyn CartRepository>,
}

impl AddToCartHandler {
    pub fn new(catalogue: Arc<Catalogue>, repository: Arc<dyn CartRepository>) -> Self {
        Self {
            catalogue,
            repository,
        }
    }

    pub async fn handle(&self, cmd: AddToCartCommand) -> Result<CartCommandResult, CartError> {
        let quantity = cmd.quantity.unwrap_or(1);
        if quantity == 0 {
            return Err(CartError::validation("quantity", "must be at least 1"));
        }

        let product = self.catalogue.product(&cmd.product_id)?;

        let mut outcome = Ok(LineChange::Unchanged);
        let cart = self
            .repository
            .modify(
                &cmd.cart_id,
                Box::new(|cart: &mut Cart| {
                    outcome = match cart.quantity_after_add(&product.id, quantity) {
                        Some(_) => Ok(cart.add(product, quantity)),
                        None => Err(CartError::validation(
                            "quantity",
                            "line quantity would overflow",
                        )),
                    }
                }),
            )
            .await?
            .ok_or_else(|| CartError::not_found(cmd.cart_id))?;
        let change = outcome?;

        tracing::info!(
            cart_id = %cmd.cart_id,
            product_id = %product.id,
            quantity,
            total_items = cart.total_items(),
            "Product added to cart"
        );

        Ok(CartCommandResult { cart, change })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalogue::builtin_catalogue;
    use crate::adapters::storage::InMemoryCartRepository;

    async fn setup() -> (AddToCartHandler, CartId) {
        let repo = Arc::new(InMemoryCartRepository::new());
        let cart = Cart::new(CartId::new());
        repo.save(&cart).await.unwrap();
        let handler = AddToCartHandler::new(Arc::new(builtin_catalogue().unwrap()), repo);
        (handler, *cart.id())
    }

    fn add(cart_id: CartId, product_id: &str, quantity: Option<u32>) -> AddToCartCommand {
        AddToCartCommand {
            cart_id,
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn adds_one_by_default() {
        let (handler, cart_id) = setup().await;

        let result = handler
            .handle(add(cart_id, "pink-rose-bouquet", None))
            .await
            .unwrap();

        assert_eq!(result.change, LineChange::Added { quantity: 1 });
        assert_eq!(result.cart.total_items(), 1);
        assert_eq!(result.cart.total_price(), 350);
    }

    #[tokio::test]
    async fn repeated_adds_accumulate_on_one_line() {
        let (handler, cart_id) = setup().await;

        handler
            .handle(add(cart_id, "pink-rose-bouquet", Some(2)))
            .await
            .unwrap();
        let result = handler
            .handle(add(cart_id, "pink-rose-bouquet", Some(3)))
            .await
            .unwrap();

        assert_eq!(result.change, LineChange::Updated { quantity: 5 });
        assert_eq!(result.cart.items().len(), 1);
        assert_eq!(result.cart.total_price(), 5 * 350);
    }

    #[tokio::test]
    async fn unknown_product_is_rejected() {
        let (handler, cart_id) = setup().await;

        let err = handler
            .handle(add(cart_id, "plastic-ferns", None))
            .await
            .unwrap_err();

        assert_eq!(err, CartError::UnknownProduct("plastic-ferns".to_string()));
    }

    #[tokio::test]
    async fn unknown_cart_is_not_found() {
        let (handler, _) = setup().await;
        let missing = CartId::new();

        let err = handler
            .handle(add(missing, "peony-blush", None))
            .await
            .unwrap_err();

        assert_eq!(err, CartError::NotFound(missing));
    }

    #[tokio::test]
    async fn quantities_beyond_ninety_nine_accumulate() {
        let (handler, cart_id) = setup().await;

        handler
            .handle(add(cart_id, "pink-rose-bouquet", Some(60)))
            .await
            .unwrap();
        let result = handler
            .handle(add(cart_id, "pink-rose-bouquet", Some(60)))
            .await
            .unwrap();

        assert_eq!(result.change, LineChange::Updated { quantity: 120 });
        assert_eq!(result.cart.total_price(), 120 * 350);
    }

    #[tokio::test]
    async fn overflowing_add_is_rejected_and_cart_untouched() {
        let (handler, cart_id) = setup().await;
        handler
            .handle(add(cart_id, "pink-rose-bouquet", Some(u32::MAX)))
            .await
            .unwrap();

        let err = handler
            .handle(add(cart_id, "pink-rose-bouquet", Some(1)))
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::ValidationFailed { ref field, .. } if field == "quantity"));
        let cart = handler.repository.find_by_id(&cart_id).await.unwrap().unwrap();
        assert_eq!(cart.total_items(), u64::from(u32::MAX));
    }

    #[tokio::test]
    async fn zero_quantity_is_a_validation_error() {
        let (handler, cart_id) = setup().await;

        let err = handler
            .handle(add(cart_id, "peony-blush", Some(0)))
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::ValidationFailed { .. }));
    }
}
