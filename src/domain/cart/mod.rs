//! Cart domain module.
//!
//! The shopping cart of one browsing session: line items unique by product,
//! derived totals, and the cart drawer visibility flag.

mod aggregate;
mod errors;

pub use aggregate::{Cart, CartLineItem, LineChange};
pub use errors::CartError;
