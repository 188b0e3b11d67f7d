//! HTTP adapter for catalogue endpoints.
//!
//! - `GET /api/home`
//! - `GET /api/shop?category=&min_price=&max_price=&sort=`
//! - `GET /api/categories`, `GET /api/categories/:slug`
//! - `GET /api/products`, `GET /api/products/:id?quantity=`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::catalogue_routes;
