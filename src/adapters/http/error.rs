//! JSON error bodies shared by every endpoint.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::{StatusCode, Uri};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn checkout_unavailable(message: impl Into<String>) -> Self {
        Self::new("CHECKOUT_UNAVAILABLE", message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new("SERVICE_UNAVAILABLE", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Fallback for unmatched routes.
pub async fn not_found_fallback(uri: Uri) -> Response {
    tracing::warn!(path = %uri.path(), "No route matched");
    ErrorResponse::not_found("Route", uri.path()).into_response_with(StatusCode::NOT_FOUND)
}

/// Maps a body or query extractor rejection to a JSON 400.
pub fn rejection_response(rejection: impl std::fmt::Display) -> Response {
    tracing::warn!(error = %rejection, "Malformed request rejected");
    ErrorResponse::bad_request(rejection.to_string()).into_response_with(StatusCode::BAD_REQUEST)
}
