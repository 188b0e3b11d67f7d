//! Cart command and query handlers.

mod add_to_cart;
mod checkout_cart;
mod clear_cart;
mod create_cart;
mod get_cart;
mod remove_from_cart;
mod set_drawer;
mod update_quantity;

pub use add_to_cart::{AddToCartCommand, AddToCartHandler};
pub use checkout_cart::{CheckoutCartCommand, CheckoutCartHandler};
pub use clear_cart::{ClearCartCommand, ClearCartHandler};
pub use create_cart::CreateCartHandler;
pub use get_cart::{GetCartHandler, GetCartQuery};
pub use remove_from_cart::{RemoveFromCartCommand, RemoveFromCartHandler};
pub use set_drawer::{SetDrawerCommand, SetDrawerHandler};
pub use update_quantity::{UpdateQuantityCommand, UpdateQuantityHandler};

use crate::domain::cart::{Cart, LineChange};

/// Result of a command that touches a single cart line.
#[derive(Debug, Clone)]
pub struct CartCommandResult {
    pub cart: Cart,
    pub change: LineChange,
}
