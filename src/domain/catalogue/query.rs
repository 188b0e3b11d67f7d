//! Shop listing filter and sort.
//!
//! Everything here is a pure function of the product list and the current
//! filter selections, so results can be recomputed (or cached keyed by the
//! query) at any time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::product::Product;
use crate::domain::foundation::{CategorySlug, Price, ValidationError};

/// Lower bound of the default price range.
pub const DEFAULT_MIN_PRICE: u32 = 0;

/// Upper bound of the default price range.
pub const DEFAULT_MAX_PRICE: u32 = 1000;

/// Maximum number of "you may also like" suggestions.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Sentinel accepted in place of a category slug.
const ALL_CATEGORIES: &str = "all";

/// Category selection on the shop page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategorySlug),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(slug) => product.in_category(slug),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(CategorySlug::new(s)?))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", ALL_CATEGORIES),
            CategoryFilter::Only(slug) => write!(f, "{}", slug),
        }
    }
}

/// Closed price interval `[min, max]`, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Creates a range. `min` must not exceed `max`.
    pub fn new(min: u32, max: u32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::out_of_range(
                "min_price",
                0,
                i64::from(max),
                i64::from(min),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, price: Price) -> bool {
        self.min <= price.amount() && price.amount() <= self.max
    }

    /// True if the range is narrower than the default `[0, 1000]`.
    pub fn is_narrowed(&self) -> bool {
        self.min > DEFAULT_MIN_PRICE || self.max < DEFAULT_MAX_PRICE
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalogue order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    Name,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Name => "name",
        }
    }

    /// Sorts in place. The sort is stable, so ties keep catalogue order.
    fn apply(&self, products: &mut [&Product]) {
        match self {
            SortOrder::Default => {}
            SortOrder::PriceAsc => products.sort_by_key(|p| p.price),
            SortOrder::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Name => products.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortOrder::Default),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "name" => Ok(SortOrder::Name),
            other => Err(ValidationError::invalid_format(
                "sort",
                format!(
                    "unknown sort '{}', expected one of default, price-asc, price-desc, name",
                    other
                ),
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current selections of the shop page sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CatalogueQuery {
    pub category: CategoryFilter,
    pub price_range: PriceRange,
    pub sort: SortOrder,
}

impl CatalogueQuery {
    pub fn new(category: CategoryFilter, price_range: PriceRange, sort: SortOrder) -> Self {
        Self {
            category,
            price_range,
            sort,
        }
    }

    /// Drives the "clear filters" affordance. Sort order does not count.
    pub fn has_active_filters(&self) -> bool {
        !self.category.is_all() || self.price_range.is_narrowed()
    }

    /// The query after "clear filters": all categories, default range, catalogue order.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Filter by category and price, then sort.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut visible: Vec<&Product> = products
            .iter()
            .filter(|p| self.category.matches(p) && self.price_range.contains(p.price))
            .collect();
        self.sort.apply(&mut visible);
        visible
    }
}

/// All products listed under `slug`, in catalogue order.
pub fn products_in_category<'a>(products: &'a [Product], slug: &CategorySlug) -> Vec<&'a Product> {
    products.iter().filter(|p| p.in_category(slug)).collect()
}

/// Up to `limit` other products sharing a category with `product`, in catalogue order.
pub fn related_products<'a>(
    products: &'a [Product],
    product: &Product,
    limit: usize,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.id != product.id && p.shares_category_with(product))
        .take(limit)
        .collect()
}
