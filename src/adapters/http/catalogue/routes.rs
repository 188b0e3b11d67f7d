//! Axum router configuration for catalogue endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::StorefrontAppState;

use super::handlers::{
    browse_shop, get_category, get_home, get_product, list_categories, list_products,
};

/// Create the catalogue API router.
///
/// # Routes
/// - `GET /home` - Categories and featured products
/// - `GET /shop` - Filtered shop listing
/// - `GET /categories` - All categories
/// - `GET /categories/:slug` - Category page
/// - `GET /products` - All products
/// - `GET /products/:id` - Product page
pub fn catalogue_routes() -> Router<StorefrontAppState> {
    Router::new()
        .route("/home", get(get_home))
        .route("/shop", get(browse_shop))
        .route("/categories", get(list_categories))
        .route("/categories/:slug", get(get_category))
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::test_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = catalogue_routes().with_state(test_state());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn home_lists_featured_products() {
        let (status, body) = get_json("/home").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["featured"].as_array().unwrap().len(), 4);
        assert_eq!(body["categories"].as_array().unwrap().len(), 5);
        assert_eq!(body["currency"], "AED");
    }

    #[tokio::test]
    async fn shop_applies_filters() {
        let (status, body) =
            get_json("/shop?category=romance&max_price=500&sort=price-asc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);
        assert_eq!(body["has_active_filters"], true);
        assert_eq!(body["products"][0]["id"], "pink-rose-bouquet");
        assert_eq!(body["filters"]["min_price"], 0);
        assert_eq!(body["filters"]["sort"], "price-asc");
    }

    #[tokio::test]
    async fn shop_rejects_inverted_range() {
        let (status, body) = get_json("/shop?min_price=700&max_price=100").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn shop_rejects_non_numeric_price() {
        let (status, body) = get_json("/shop?min_price=cheap").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn category_page_counts_products() {
        let (status, body) = get_json("/categories/sympathy").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"]["name"], "Sympathy");
        assert_eq!(body["product_count"], 4);
    }

    #[tokio::test]
    async fn unknown_category_is_404() {
        let (status, body) = get_json("/categories/graduation").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn product_page_previews_line_total() {
        let (status, body) = get_json("/products/purple-orchid?quantity=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["product"]["price"], 550);
        assert_eq!(body["line_total"], 1100);
        assert!(body["related"].as_array().unwrap().len() <= 4);
    }

    #[tokio::test]
    async fn unknown_product_is_404() {
        let (status, _) = get_json("/products/silk-daisies").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn product_list_is_complete() {
        let (status, body) = get_json("/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 12);
    }
}
