//! Axum router configuration for about and contact endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::StorefrontAppState;

use super::handlers::{get_store_info, submit_contact};

/// # Routes
/// - `GET /about` - Store information
/// - `GET /contact` - Store information
/// - `POST /contact` - Contact form
pub fn contact_routes() -> Router<StorefrontAppState> {
    Router::new()
        .route("/about", get(get_store_info))
        .route("/contact", get(get_store_info).post(submit_contact))
}
