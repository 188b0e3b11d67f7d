//! HTTP adapter for the about and contact pages.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::contact_routes;
