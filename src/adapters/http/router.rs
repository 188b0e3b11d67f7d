//! Top-level router: API modules, health check and middleware stack.

use std::time::Duration;

use axum::{extract::State, routing::get, Json, Router};
use http::HeaderValue;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

use super::cart::cart_routes;
use super::catalogue::catalogue_routes;
use super::contact::contact_routes;
use super::error::not_found_fallback;
use super::state::StorefrontAppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub products: usize,
}

/// GET /health - Liveness probe
pub async fn health(State(state): State<StorefrontAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        products: state.catalogue.products().len(),
    })
}

/// All `/api` routes, without middleware.
pub fn api_routes() -> Router<StorefrontAppState> {
    Router::new()
        .merge(catalogue_routes())
        .merge(contact_routes())
        .nest("/carts", cart_routes())
}

/// Build the complete application router.
pub fn app_router(state: StorefrontAppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .fallback(not_found_fallback)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    server.request_timeout_secs,
                )))
                .layer(CompressionLayer::new()),
        );

    match cors_layer(server) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// CORS is only enabled when origins are configured.
fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
