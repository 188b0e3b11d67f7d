//! Product and category entities.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategorySlug, Price, ProductId};

/// A flower arrangement offered in the shop.
///
/// Products are loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub description: String,
    /// Slugs of every category the product is listed under.
    pub categories: Vec<CategorySlug>,
}

impl Product {
    /// Returns true if the product is listed under `slug`.
    pub fn in_category(&self, slug: &CategorySlug) -> bool {
        self.categories.iter().any(|c| c == slug)
    }

    /// Returns true if the two products share at least one category.
    pub fn shares_category_with(&self, other: &Product) -> bool {
        self.categories.iter().any(|c| other.in_category(c))
    }

    /// Price of `quantity` units, with the quantity floored at 1.
    pub fn line_total(&self, quantity: u32) -> u64 {
        self.price.times(quantity.max(1))
    }
}

/// An occasion the shop groups its arrangements by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub slug: CategorySlug,
    pub name: String,
    pub image: String,
    pub description: String,
}
