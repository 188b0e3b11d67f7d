//! The read-only catalogue of categories and products.

use std::collections::HashSet;

use super::errors::CatalogueError;
use super::product::{Category, Product};
use super::query::{products_in_category, related_products, RELATED_PRODUCTS_LIMIT};
use crate::domain::foundation::CategorySlug;

/// Immutable collection of categories and products in display order.
///
/// # Invariants
///
/// - Product ids are unique
/// - Category slugs are unique
/// - Every category a product lists exists in the catalogue
/// - Names are non-blank
#[derive(Debug, Clone)]
pub struct Catalogue {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalogue {
    /// Build a catalogue, checking the invariants above.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CatalogueError> {
        let mut slugs = HashSet::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(CatalogueError::Invalid(format!(
                    "category '{}' has no name",
                    category.slug
                )));
            }
            if !slugs.insert(category.slug.clone()) {
                return Err(CatalogueError::DuplicateCategory(category.slug.to_string()));
            }
        }

        let mut ids = HashSet::new();
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(CatalogueError::Invalid(format!(
                    "product '{}' has no name",
                    product.id
                )));
            }
            if !ids.insert(product.id.clone()) {
                return Err(CatalogueError::DuplicateProduct(product.id.to_string()));
            }
            if let Some(unknown) = product.categories.iter().find(|c| !slugs.contains(*c)) {
                return Err(CatalogueError::UnknownCategoryReference {
                    product: product.id.to_string(),
                    category: unknown.to_string(),
                });
            }
        }

        Ok(Self {
            categories,
            products,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Result<&Product, CatalogueError> {
        self.products
            .iter()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| CatalogueError::ProductNotFound(id.to_string()))
    }

    /// Look up a category by slug.
    pub fn category(&self, slug: &str) -> Result<&Category, CatalogueError> {
        self.categories
            .iter()
            .find(|c| c.slug.as_str() == slug)
            .ok_or_else(|| CatalogueError::CategoryNotFound(slug.to_string()))
    }

    /// Categories the product belongs to, in catalogue order.
    pub fn categories_of(&self, product: &Product) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| product.in_category(&c.slug))
            .collect()
    }

    /// All products listed under `slug`, in catalogue order.
    pub fn products_in(&self, slug: &CategorySlug) -> Vec<&Product> {
        products_in_category(&self.products, slug)
    }

    /// "You may also like" suggestions for a product page.
    pub fn related_to(&self, product: &Product) -> Vec<&Product> {
        related_products(&self.products, product, RELATED_PRODUCTS_LIMIT)
    }

    /// The first `count` products, shown on the home page.
    pub fn featured(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }
}
