//! HTTP handlers for about and contact endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{rejection_response, ErrorResponse};
use crate::adapters::http::state::StorefrontAppState;
use crate::application::handlers::contact::SubmitContactCommand;
use crate::domain::contact::ContactError;

use super::dto::{ContactRequest, ContactResponse};

/// GET /api/about - Store story and values
/// GET /api/contact - Store contact channels
pub async fn get_store_info(State(state): State<StorefrontAppState>) -> Response {
    Json(state.store_info_handler().handle()).into_response()
}

/// POST /api/contact - Submit the contact form
pub async fn submit_contact(
    State(state): State<StorefrontAppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    let cmd = SubmitContactCommand {
        name: req.name,
        email: req.email,
        message: req.message,
    };

    match state.submit_contact_handler().handle(cmd).await {
        Ok(receipt) => (StatusCode::ACCEPTED, Json(ContactResponse::from(receipt))).into_response(),
        Err(e) => handle_contact_error(e),
    }
}

pub(crate) fn handle_contact_error(error: ContactError) -> Response {
    match error {
        ContactError::Invalid(e) => ErrorResponse::bad_request(e.to_string())
            .with_details(serde_json::json!({ "field": e.field() }))
            .into_response_with(StatusCode::BAD_REQUEST),
        ContactError::DeliveryUnavailable(reason) => {
            tracing::warn!(reason = %reason, "Contact delivery unavailable");
            ErrorResponse::service_unavailable(reason)
                .into_response_with(StatusCode::SERVICE_UNAVAILABLE)
        }
        ContactError::DeliveryFailed(reason) => {
            tracing::error!(reason = %reason, "Contact delivery failed");
            ErrorResponse::internal(reason).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
