//! Shared state for the storefront router.

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::cart::{
    AddToCartHandler, CheckoutCartHandler, ClearCartHandler, CreateCartHandler, GetCartHandler,
    RemoveFromCartHandler, SetDrawerHandler, UpdateQuantityHandler,
};
use crate::application::handlers::catalogue::{
    BrowseShopHandler, GetCategoryPageHandler, GetHomeHandler, GetProductDetailHandler,
    ListCategoriesHandler, ListProductsHandler,
};
use crate::application::handlers::contact::{GetStoreInfoHandler, SubmitContactHandler};
use crate::config::AppConfig;
use crate::domain::catalogue::Catalogue;
use crate::ports::{CartRepository, CheckoutService, ContactDelivery};

/// Storefront settings the handlers need at request time.
#[derive(Debug, Clone)]
pub struct StorefrontSettings {
    pub currency: String,
    pub featured_count: usize,
    pub cart_idle_ttl: Duration,
    pub max_carts: usize,
}

impl From<&AppConfig> for StorefrontSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            currency: config.catalogue.currency.clone(),
            featured_count: config.catalogue.featured_count,
            cart_idle_ttl: config.cart.idle_ttl(),
            max_carts: config.cart.max_carts,
        }
    }
}

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct StorefrontAppState {
    pub catalogue: Arc<Catalogue>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub contact_delivery: Arc<dyn ContactDelivery>,
    pub checkout_service: Arc<dyn CheckoutService>,
    pub settings: Arc<StorefrontSettings>,
}

impl StorefrontAppState {
    pub fn new(
        catalogue: Catalogue,
        cart_repository: Arc<dyn CartRepository>,
        contact_delivery: Arc<dyn ContactDelivery>,
        checkout_service: Arc<dyn CheckoutService>,
        settings: StorefrontSettings,
    ) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            cart_repository,
            contact_delivery,
            checkout_service,
            settings: Arc::new(settings),
        }
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency
    }

    // Catalogue

    pub fn home_handler(&self) -> GetHomeHandler {
        GetHomeHandler::new(self.catalogue.clone(), self.settings.featured_count)
    }

    pub fn browse_shop_handler(&self) -> BrowseShopHandler {
        BrowseShopHandler::new(self.catalogue.clone())
    }

    pub fn category_page_handler(&self) -> GetCategoryPageHandler {
        GetCategoryPageHandler::new(self.catalogue.clone())
    }

    pub fn product_detail_handler(&self) -> GetProductDetailHandler {
        GetProductDetailHandler::new(self.catalogue.clone())
    }

    pub fn list_categories_handler(&self) -> ListCategoriesHandler {
        ListCategoriesHandler::new(self.catalogue.clone())
    }

    pub fn list_products_handler(&self) -> ListProductsHandler {
        ListProductsHandler::new(self.catalogue.clone())
    }

    // Cart

    pub fn create_cart_handler(&self) -> CreateCartHandler {
        CreateCartHandler::new(
            self.cart_repository.clone(),
            self.settings.cart_idle_ttl,
            self.settings.max_carts,
        )
    }

    pub fn get_cart_handler(&self) -> GetCartHandler {
        GetCartHandler::new(self.cart_repository.clone())
    }

    pub fn add_to_cart_handler(&self) -> AddToCartHandler {
        AddToCartHandler::new(self.catalogue.clone(), self.cart_repository.clone())
    }

    pub fn update_quantity_handler(&self) -> UpdateQuantityHandler {
        UpdateQuantityHandler::new(self.cart_repository.clone())
    }

    pub fn remove_from_cart_handler(&self) -> RemoveFromCartHandler {
        RemoveFromCartHandler::new(self.cart_repository.clone())
    }

    pub fn clear_cart_handler(&self) -> ClearCartHandler {
        ClearCartHandler::new(self.cart_repository.clone())
    }

    pub fn set_drawer_handler(&self) -> SetDrawerHandler {
        SetDrawerHandler::new(self.cart_repository.clone())
    }

    pub fn checkout_handler(&self) -> CheckoutCartHandler {
        CheckoutCartHandler::new(self.cart_repository.clone(), self.checkout_service.clone())
    }

    // Contact

    pub fn store_info_handler(&self) -> GetStoreInfoHandler {
        GetStoreInfoHandler::new(self.settings.currency.clone())
    }

    pub fn submit_contact_handler(&self) -> SubmitContactHandler {
        SubmitContactHandler::new(self.contact_delivery.clone())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::catalogue::builtin_catalogue;
    use crate::adapters::checkout::UnavailableCheckout;
    use crate::adapters::contact::LoggingContactDelivery;
    use crate::adapters::storage::InMemoryCartRepository;

    /// State wired with the built-in catalogue and in-memory adapters.
    pub fn test_state() -> StorefrontAppState {
        StorefrontAppState::new(
            builtin_catalogue().unwrap(),
            Arc::new(InMemoryCartRepository::new()),
            Arc::new(LoggingContactDelivery::new()),
            Arc::new(UnavailableCheckout::default()),
            StorefrontSettings::from(&AppConfig::default()),
        )
    }
}
