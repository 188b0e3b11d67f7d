//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogueSource` - Loads the read-only catalogue at startup
//! - `CartRepository` - Stores carts between requests
//! - `ContactDelivery` - Forwards contact form messages
//! - `CheckoutService` - Turns a cart into an order

mod cart_repository;
mod catalogue_source;
mod checkout_service;
mod contact_delivery;

pub use cart_repository::{CartMutation, CartRepository};
pub use catalogue_source::CatalogueSource;
pub use checkout_service::{CheckoutError, CheckoutService, OrderConfirmation};
pub use contact_delivery::{ContactDelivery, ContactDeliveryError};
