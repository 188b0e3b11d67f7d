//! GetProductDetailHandler - Query handler for a single product page.

use std::sync::Arc;

use crate::domain::catalogue::{Catalogue, CatalogueError, Category, Product};

/// Query for a product page.
#[derive(Debug, Clone)]
pub struct GetProductDetailQuery {
    pub product_id: String,
    /// Quantity selector value used for the price preview. Floored at 1.
    pub quantity: Option<u32>,
}

/// Everything the product page shows.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product: Product,
    pub categories: Vec<Category>,
    pub related: Vec<Product>,
    pub quantity: u32,
    pub line_total: u64,
}

pub struct GetProductDetailHandler {
    catalogue: Arc<Catalogue>,
}

impl GetProductDetailHandler {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn handle(&self, query: GetProductDetailQuery) -> Result<ProductDetail, CatalogueError> {
        let product = self.catalogue.product(&query.product_id)?;
        let quantity = query.quantity.unwrap_or(1).max(1);

        Ok(ProductDetail {
            categories: self
                .catalogue
                .categories_of(product)
                .into_iter()
                .cloned()
                .collect(),
            related: self
                .catalogue
                .related_to(product)
                .into_iter()
                .cloned()
                .collect(),
            quantity,
            line_total: product.line_total(quantity),
            product: product.clone(),
        })
    }
}
