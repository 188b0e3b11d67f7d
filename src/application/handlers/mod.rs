//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cart;
pub mod catalogue;
pub mod contact;
