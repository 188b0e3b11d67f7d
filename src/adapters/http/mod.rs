//! HTTP adapters - REST API implementations.
//!
//! Each storefront module has its own HTTP adapter; `router` assembles them
//! under `/api` behind the shared middleware stack.

pub mod cart;
pub mod catalogue;
pub mod contact;
pub mod error;
pub mod router;
pub mod state;

pub use error::ErrorResponse;
pub use router::{api_routes, app_router};
pub use state::{StorefrontAppState, StorefrontSettings};
