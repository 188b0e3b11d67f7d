//! HTTP handlers for cart endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{rejection_response, ErrorResponse};
use crate::adapters::http::state::StorefrontAppState;
use crate::application::handlers::cart::{
    AddToCartCommand, CheckoutCartCommand, ClearCartCommand, GetCartQuery, RemoveFromCartCommand,
    SetDrawerCommand, UpdateQuantityCommand,
};
use crate::domain::cart::CartError;
use crate::domain::foundation::CartId;

use super::dto::{
    AddItemRequest, CartCommandResponse, CartResponse, CheckoutResponse, DrawerRequest,
    UpdateQuantityRequest,
};

fn parse_cart_id(raw: &str) -> Result<CartId, Response> {
    raw.parse::<CartId>().map_err(|_| {
        tracing::warn!(cart_id = raw, "Malformed cart id");
        ErrorResponse::bad_request("Invalid cart ID").into_response_with(StatusCode::BAD_REQUEST)
    })
}

/// POST /api/carts - Open a new empty cart
pub async fn create_cart(State(state): State<StorefrontAppState>) -> Response {
    match state.create_cart_handler().handle().await {
        Ok(cart) => (StatusCode::CREATED, Json(CartResponse::from(&cart))).into_response(),
        Err(e) => handle_cart_error(e),
    }
}

/// GET /api/carts/:cart_id - Cart with derived totals
pub async fn get_cart(
    State(state): State<StorefrontAppState>,
    Path(cart_id): Path<String>,
) -> Response {
    let cart_id = match parse_cart_id(&cart_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_cart_handler().handle(GetCartQuery { cart_id }).await {
        Ok(cart) => Json(CartResponse::from(&cart)).into_response(),
        Err(e) => handle_cart_error(e),
    }
}

/// POST /api/carts/:cart_id/items - Add a product
pub async fn add_item(
    State(state): State<StorefrontAppState>,
    Path(cart_id): Path<String>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> Response {
    let cart_id = match parse_cart_id(&cart_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    let cmd = AddToCartCommand {
        cart_id,
        product_id: req.product_id,
        quantity: req.quantity,
    };

    match state.add_to_cart_handler().handle(cmd).await {
        Ok(result) => Json(CartCommandResponse::from(result)).into_response(),
        Err(e) => handle_cart_error(e),
    }
}

/// PATCH /api/carts/:cart_id/items/:product_id - Set a line's quantity
pub async fn update_item(
    State(state): State<StorefrontAppState>,
    Path((cart_id, product_id)): Path<(String, String)>,
    payload: Result<Json<UpdateQuantityRequest>, JsonRejection>,
) -> Response {
    let cart_id = match parse_cart_id(&cart_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    let cmd = UpdateQuantityCommand {
        cart_id,
        product_id,
        quantity: req.quantity,
    };

    match state.update_quantity_handler().handle(cmd).await {
        Ok(result) => Json(CartCommandResponse::from(result)).into_response(),
        Err(e) => handle_cart_error(e),
    }
}

/// DELETE /api/carts/:cart_id/items/:product_id - Remove a line
pub async fn remove_item(
    State(state): State<StorefrontAppState>,
    Path((cart_id, product_id)): Path<(String, String)>,
) -> Response {
    let cart_id = match parse_cart_id(&cart_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RemoveFromCartCommand {
        cart_id,
        product_id,
    };

    match state.remove_from_cart_handler().handle(cmd).await {
        Ok(result) => Json(CartCommandResponse::from(result)).into_response(),
        Err(e) => handle_cart_error(e),
    }
}

/// DELETE /api/carts/:cart_id/items - Empty the cart
pub async fn clear_cart(
    State(state): State<StorefrontAppState>,
    Path(cart_id): Path<String>,
) -> Response {
    let cart_id = match parse_cart_id(&cart_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .clear_cart_handler()
        .handle(ClearCartCommand { cart_id })
        .await
    {
        Ok(cart) => Json(CartResponse::from(&cart)).into_response(),
        Err(e) => handle_cart_error(e),
    }
}

/// PUT /api/carts/:cart_id/drawer - Open or close the drawer
pub async fn set_drawer(
    State(state): State<StorefrontAppState>,
    Path(cart_id): Path<String>,
    payload: Result<Json<DrawerRequest>, JsonRejection>,
) -> Response {
    let cart_id = match parse_cart_id(&cart_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    let cmd = SetDrawerCommand {
        cart_id,
        open: req.open,
    };

    match state.set_drawer_handler().handle(cmd).await {
        Ok(cart) => Json(CartResponse::from(&cart)).into_response(),
        Err(e) => handle_cart_error(e),
    }
}

/// POST /api/carts/:cart_id/checkout - Hand the cart to checkout
pub async fn checkout(
    State(state): State<StorefrontAppState>,
    Path(cart_id): Path<String>,
) -> Response {
    let cart_id = match parse_cart_id(&cart_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .checkout_handler()
        .handle(CheckoutCartCommand { cart_id })
        .await
    {
        Ok(confirmation) => {
            (StatusCode::CREATED, Json(CheckoutResponse::from(confirmation))).into_response()
        }
        Err(e) => handle_cart_error(e),
    }
}

pub(crate) fn handle_cart_error(error: CartError) -> Response {
    match error {
        CartError::NotFound(id) => {
            tracing::warn!(cart_id = %id, "Cart not found");
            ErrorResponse::not_found("Cart", &id.to_string())
                .into_response_with(StatusCode::NOT_FOUND)
        }
        CartError::UnknownProduct(id) => {
            tracing::warn!(product_id = %id, "Product not found");
            ErrorResponse::not_found("Product", &id).into_response_with(StatusCode::NOT_FOUND)
        }
        CartError::EmptyCart => ErrorResponse::bad_request("Cannot check out an empty cart")
            .into_response_with(StatusCode::BAD_REQUEST),
        CartError::CheckoutUnavailable(reason) => {
            ErrorResponse::checkout_unavailable(format!("Checkout is unavailable: {}", reason))
                .into_response_with(StatusCode::NOT_IMPLEMENTED)
        }
        CartError::ValidationFailed { field, message } => {
            tracing::warn!(field = %field, message = %message, "Cart request rejected");
            ErrorResponse::bad_request(format!("Validation failed for {}: {}", field, message))
                .with_details(serde_json::json!({ "field": field }))
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        CartError::CapacityReached(limit) => {
            tracing::warn!(limit, "Cart capacity reached");
            ErrorResponse::service_unavailable("Too many active carts, try again later")
                .into_response_with(StatusCode::SERVICE_UNAVAILABLE)
        }
        CartError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Cart storage failure");
            ErrorResponse::internal(msg).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
