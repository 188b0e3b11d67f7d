//! Axum router configuration for cart endpoints.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::adapters::http::state::StorefrontAppState;

use super::handlers::{
    add_item, checkout, clear_cart, create_cart, get_cart, remove_item, set_drawer, update_item,
};

/// Create the cart API router, mounted at `/api/carts`.
///
/// # Routes
/// - `POST /` - New cart
/// - `GET /:cart_id` - Read cart
/// - `POST /:cart_id/items` - Add product
/// - `DELETE /:cart_id/items` - Clear
/// - `PATCH /:cart_id/items/:product_id` - Set quantity
/// - `DELETE /:cart_id/items/:product_id` - Remove line
/// - `PUT /:cart_id/drawer` - Drawer visibility
/// - `POST /:cart_id/checkout` - Checkout
pub fn cart_routes() -> Router<StorefrontAppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/:cart_id", get(get_cart))
        .route("/:cart_id/items", post(add_item).delete(clear_cart))
        .route(
            "/:cart_id/items/:product_id",
            patch(update_item).delete(remove_item),
        )
        .route("/:cart_id/drawer", put(set_drawer))
        .route("/:cart_id/checkout", post(checkout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::test_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn new_cart(app: &Router) -> String {
        let (status, body) = send(app, Method::POST, "/", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    fn app() -> Router {
        cart_routes().with_state(test_state())
    }

    #[tokio::test]
    async fn add_then_update_then_remove() {
        let app = app();
        let id = new_cart(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/{}/items", id),
            Some(json!({"product_id": "pink-rose-bouquet", "quantity": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["change"]["kind"], "added");
        assert_eq!(body["cart"]["total_price"], 700);

        let (_, body) = send(
            &app,
            Method::PATCH,
            &format!("/{}/items/pink-rose-bouquet", id),
            Some(json!({"quantity": 5})),
        )
        .await;
        assert_eq!(body["cart"]["total_items"], 5);

        let (_, body) = send(
            &app,
            Method::DELETE,
            &format!("/{}/items/pink-rose-bouquet", id),
            None,
        )
        .await;
        assert_eq!(body["change"]["kind"], "removed");
        assert_eq!(body["cart"]["items"], json!([]));
    }

    #[tokio::test]
    async fn quantity_defaults_to_one() {
        let app = app();
        let id = new_cart(&app).await;

        let (_, body) = send(
            &app,
            Method::POST,
            &format!("/{}/items", id),
            Some(json!({"product_id": "spring-tulips"})),
        )
        .await;

        assert_eq!(body["cart"]["items"][0]["quantity"], 1);
        assert_eq!(body["cart"]["items"][0]["subtotal"], 260);
    }

    #[tokio::test]
    async fn adding_unknown_product_is_404() {
        let app = app();
        let id = new_cart(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/{}/items", id),
            Some(json!({"product_id": "plastic-ferns"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let app = app();
        let id = new_cart(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/{}/items", id),
            Some(json!({"quantity": 2})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn unknown_cart_is_404_and_malformed_id_is_400() {
        let app = app();

        let (status, _) = send(
            &app,
            Method::GET,
            "/6f1c2d9e-3b4a-4c5d-8e7f-0a1b2c3d4e5f",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::GET, "/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn drawer_toggles() {
        let app = app();
        let id = new_cart(&app).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/{}/drawer", id),
            Some(json!({"open": true})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_open"], true);
    }

    #[tokio::test]
    async fn clear_empties_cart() {
        let app = app();
        let id = new_cart(&app).await;
        send(
            &app,
            Method::POST,
            &format!("/{}/items", id),
            Some(json!({"product_id": "mixed-garden", "quantity": 3})),
        )
        .await;

        let (status, body) = send(&app, Method::DELETE, &format!("/{}/items", id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_items"], 0);
        assert_eq!(body["total_price"], 0);
    }

    #[tokio::test]
    async fn checkout_is_not_implemented_yet() {
        let app = app();
        let id = new_cart(&app).await;
        send(
            &app,
            Method::POST,
            &format!("/{}/items", id),
            Some(json!({"product_id": "peony-blush"})),
        )
        .await;

        let (status, body) = send(&app, Method::POST, &format!("/{}/checkout", id), None).await;

        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body["code"], "CHECKOUT_UNAVAILABLE");
    }
}
