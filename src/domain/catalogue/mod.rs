//! Catalogue domain module.
//!
//! The static, read-only set of categories and products, plus the pure
//! queries the shop, category and product pages are built from.

mod collection;
mod errors;
mod product;
mod query;

pub use collection::Catalogue;
pub use errors::CatalogueError;
pub use product::{Category, Product};
pub use query::{
    products_in_category, related_products, CatalogueQuery, CategoryFilter, PriceRange,
    SortOrder, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, RELATED_PRODUCTS_LIMIT,
};
