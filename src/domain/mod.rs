//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, prices, timestamps, errors)
//! - `catalogue` - Read-only categories and products, shop filter and sort
//! - `cart` - Shopping cart aggregate and its invariants
//! - `contact` - Contact form message value object

pub mod cart;
pub mod catalogue;
pub mod contact;
pub mod foundation;
