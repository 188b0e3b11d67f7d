//! HTTP handlers for catalogue endpoints.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{rejection_response, ErrorResponse};
use crate::adapters::http::state::StorefrontAppState;
use crate::application::handlers::catalogue::{
    BrowseShopQuery, GetCategoryPageQuery, GetProductDetailQuery,
};
use crate::domain::catalogue::CatalogueError;

use super::dto::{
    CategoryListResponse, CategoryPageResponse, HomeResponse, ProductDetailParams,
    ProductDetailResponse, ProductListResponse, ShopParams, ShopResponse,
};

/// GET /api/home - Categories and featured products
pub async fn get_home(State(state): State<StorefrontAppState>) -> Response {
    let page = state.home_handler().handle();
    Json(HomeResponse::new(page, state.currency())).into_response()
}

/// GET /api/shop - Filtered, sorted product listing
pub async fn browse_shop(
    State(state): State<StorefrontAppState>,
    params: Result<Query<ShopParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejection_response(rejection),
    };

    let query = BrowseShopQuery {
        category: params.category,
        min_price: params.min_price,
        max_price: params.max_price,
        sort: params.sort,
    };

    match state.browse_shop_handler().handle(query) {
        Ok(listing) => Json(ShopResponse::new(listing, state.currency())).into_response(),
        Err(e) => handle_catalogue_error(e),
    }
}

/// GET /api/categories - All categories
pub async fn list_categories(State(state): State<StorefrontAppState>) -> Response {
    Json(CategoryListResponse::new(state.list_categories_handler().handle())).into_response()
}

/// GET /api/categories/:slug - A category and its products
pub async fn get_category(
    State(state): State<StorefrontAppState>,
    Path(slug): Path<String>,
) -> Response {
    match state
        .category_page_handler()
        .handle(GetCategoryPageQuery { slug })
    {
        Ok(page) => Json(CategoryPageResponse::from(page)).into_response(),
        Err(e) => handle_catalogue_error(e),
    }
}

/// GET /api/products - Whole catalogue in catalogue order
pub async fn list_products(State(state): State<StorefrontAppState>) -> Response {
    Json(ProductListResponse::new(state.list_products_handler().handle())).into_response()
}

/// GET /api/products/:id - Product page
pub async fn get_product(
    State(state): State<StorefrontAppState>,
    Path(product_id): Path<String>,
    params: Result<Query<ProductDetailParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejection_response(rejection),
    };

    let query = GetProductDetailQuery {
        product_id,
        quantity: params.quantity,
    };

    match state.product_detail_handler().handle(query) {
        Ok(detail) => Json(ProductDetailResponse::new(detail, state.currency())).into_response(),
        Err(e) => handle_catalogue_error(e),
    }
}

pub(crate) fn handle_catalogue_error(error: CatalogueError) -> Response {
    match error {
        CatalogueError::ProductNotFound(id) => {
            tracing::warn!(product_id = %id, "Product not found");
            ErrorResponse::not_found("Product", &id).into_response_with(StatusCode::NOT_FOUND)
        }
        CatalogueError::CategoryNotFound(slug) => {
            tracing::warn!(slug = %slug, "Category not found");
            ErrorResponse::not_found("Category", &slug).into_response_with(StatusCode::NOT_FOUND)
        }
        CatalogueError::InvalidQuery(e) => {
            tracing::warn!(field = e.field(), error = %e, "Shop query rejected");
            ErrorResponse::bad_request(e.to_string())
                .with_details(serde_json::json!({ "field": e.field() }))
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        other => {
            tracing::error!(error = %other, "Catalogue failure");
            ErrorResponse::internal(other.to_string())
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn missing_product_maps_to_404() {
        let response = handle_catalogue_error(CatalogueError::ProductNotFound("x".into()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_query_maps_to_400() {
        let response = handle_catalogue_error(CatalogueError::InvalidQuery(
            ValidationError::invalid_format("sort", "unknown"),
        ));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn broken_catalogue_maps_to_500() {
        let response = handle_catalogue_error(CatalogueError::Invalid("no products".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
