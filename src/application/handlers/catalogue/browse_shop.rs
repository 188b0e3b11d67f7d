//! BrowseShopHandler - Query handler for the filtered shop listing.

use std::sync::Arc;

use crate::domain::catalogue::{
    Catalogue, CatalogueError, CatalogueQuery, CategoryFilter, Category, PriceRange, Product,
    SortOrder, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE,
};

/// Raw shop page selections. Missing values fall back to the cleared query.
#[derive(Debug, Clone, Default)]
pub struct BrowseShopQuery {
    pub category: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub sort: Option<String>,
}

impl BrowseShopQuery {
    /// Parses the raw selections into a validated catalogue query.
    ///
    /// # Errors
    /// `InvalidQuery` for a malformed slug, an unknown sort or `min > max`.
    pub fn parse(&self) -> Result<CatalogueQuery, CatalogueError> {
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(raw) => raw.parse()?,
        };
        let price_range = PriceRange::new(
            self.min_price.unwrap_or(DEFAULT_MIN_PRICE),
            self.max_price.unwrap_or(DEFAULT_MAX_PRICE),
        )?;
        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => SortOrder::Default,
            Some(raw) => raw.parse()?,
        };
        Ok(CatalogueQuery::new(category, price_range, sort))
    }
}

/// The shop page: visible products plus the sidebar state.
#[derive(Debug, Clone)]
pub struct ShopListing {
    pub products: Vec<Product>,
    pub query: CatalogueQuery,
    pub has_active_filters: bool,
    pub categories: Vec<Category>,
}

impl ShopListing {
    pub fn count(&self) -> usize {
        self.products.len()
    }
}

pub struct BrowseShopHandler {
    catalogue: Arc<Catalogue>,
}

impl BrowseShopHandler {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn handle(&self, query: BrowseShopQuery) -> Result<ShopListing, CatalogueError> {
        let query = query.parse()?;
        let products: Vec<Product> = query
            .apply(self.catalogue.products())
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            category = %query.category,
            min_price = query.price_range.min(),
            max_price = query.price_range.max(),
            sort = %query.sort,
            results = products.len(),
            "Shop listing computed"
        );

        Ok(ShopListing {
            products,
            has_active_filters: query.has_active_filters(),
            query,
            categories: self.catalogue.categories().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalogue::builtin_catalogue;

    fn handler() -> BrowseShopHandler {
        BrowseShopHandler::new(Arc::new(builtin_catalogue().unwrap()))
    }

    fn ids(listing: &ShopListing) -> Vec<&str> {
        listing.products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn empty_query_lists_everything_in_catalogue_order() {
        let listing = handler().handle(BrowseShopQuery::default()).unwrap();

        assert_eq!(listing.count(), 12);
        assert_eq!(ids(&listing)[0], "pink-rose-bouquet");
        assert!(!listing.has_active_filters);
        assert_eq!(listing.categories.len(), 5);
    }

    #[test]
    fn romance_under_500_sorted_by_price() {
        let listing = handler()
            .handle(BrowseShopQuery {
                category: Some("romance".into()),
                max_price: Some(500),
                sort: Some("price-asc".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            ids(&listing),
            vec!["pink-rose-bouquet", "red-rose-classic", "peony-blush"]
        );
        assert!(listing.has_active_filters);
    }

    #[test]
    fn all_sentinel_is_not_an_active_filter() {
        let listing = handler()
            .handle(BrowseShopQuery {
                category: Some("all".into()),
                sort: Some("name".into()),
                ..Default::default()
            })
            .unwrap();

        assert!(!listing.has_active_filters);
        assert_eq!(ids(&listing)[0], "red-rose-classic");
    }

    #[test]
    fn unknown_category_yields_no_products() {
        let listing = handler()
            .handle(BrowseShopQuery {
                category: Some("graduation".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(listing.count(), 0);
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let err = handler()
            .handle(BrowseShopQuery {
                min_price: Some(600),
                max_price: Some(200),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, CatalogueError::InvalidQuery(_)));
    }

    #[test]
    fn unknown_sort_is_rejected() {
        let err = handler()
            .handle(BrowseShopQuery {
                sort: Some("popularity".into()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, CatalogueError::InvalidQuery(_)));
    }
}
