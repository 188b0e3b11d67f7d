//! HTTP adapter for cart endpoints.
//!
//! Carts are addressed by the UUID returned from `POST /api/carts`; the
//! client keeps it for the lifetime of its session.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::cart_routes;
