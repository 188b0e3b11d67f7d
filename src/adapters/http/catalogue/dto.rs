//! HTTP DTOs for catalogue endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::catalogue::{CategoryPage, HomePage, ProductDetail, ShopListing};
use crate::domain::catalogue::{Category, Product};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query string of `GET /api/shop`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopParams {
    pub category: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub sort: Option<String>,
}

/// Query string of `GET /api/products/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDetailParams {
    pub quantity: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub image: String,
    pub description: String,
    pub categories: Vec<String>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.amount(),
            image: product.image.clone(),
            description: product.description.clone(),
            categories: product.categories.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub image: String,
    pub description: String,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            slug: category.slug.to_string(),
            name: category.name.clone(),
            image: category.image.clone(),
            description: category.description.clone(),
        }
    }
}

fn products(list: &[Product]) -> Vec<ProductResponse> {
    list.iter().map(ProductResponse::from).collect()
}

fn categories(list: &[Category]) -> Vec<CategoryResponse> {
    list.iter().map(CategoryResponse::from).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeResponse {
    pub categories: Vec<CategoryResponse>,
    pub featured: Vec<ProductResponse>,
    pub currency: String,
}

impl HomeResponse {
    pub fn new(page: HomePage, currency: &str) -> Self {
        Self {
            categories: categories(&page.categories),
            featured: products(&page.featured),
            currency: currency.to_string(),
        }
    }
}

/// Filters as applied, after defaults.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedFilters {
    pub category: String,
    pub min_price: u32,
    pub max_price: u32,
    pub sort: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShopResponse {
    pub products: Vec<ProductResponse>,
    pub count: usize,
    pub has_active_filters: bool,
    pub filters: AppliedFilters,
    pub categories: Vec<CategoryResponse>,
    pub currency: String,
}

impl ShopResponse {
    pub fn new(listing: ShopListing, currency: &str) -> Self {
        Self {
            count: listing.count(),
            products: products(&listing.products),
            has_active_filters: listing.has_active_filters,
            filters: AppliedFilters {
                category: listing.query.category.to_string(),
                min_price: listing.query.price_range.min(),
                max_price: listing.query.price_range.max(),
                sort: listing.query.sort.to_string(),
            },
            categories: categories(&listing.categories),
            currency: currency.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPageResponse {
    pub category: CategoryResponse,
    pub products: Vec<ProductResponse>,
    pub product_count: usize,
}

impl From<CategoryPage> for CategoryPageResponse {
    fn from(page: CategoryPage) -> Self {
        Self {
            product_count: page.product_count(),
            category: CategoryResponse::from(&page.category),
            products: products(&page.products),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
    pub categories: Vec<CategoryResponse>,
    pub related: Vec<ProductResponse>,
    pub quantity: u32,
    pub line_total: u64,
    pub currency: String,
}

impl ProductDetailResponse {
    pub fn new(detail: ProductDetail, currency: &str) -> Self {
        Self {
            product: ProductResponse::from(&detail.product),
            categories: categories(&detail.categories),
            related: products(&detail.related),
            quantity: detail.quantity,
            line_total: detail.line_total,
            currency: currency.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub count: usize,
}

impl ProductListResponse {
    pub fn new(list: Vec<Product>) -> Self {
        Self {
            count: list.len(),
            products: products(&list),
        }
    }
}

impl CategoryListResponse {
    pub fn new(list: Vec<Category>) -> Self {
        Self {
            categories: categories(&list),
        }
    }
}
