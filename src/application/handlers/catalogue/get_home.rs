//! GetHomeHandler - Query handler for the landing page.

use std::sync::Arc;

use crate::domain::catalogue::{Catalogue, Category, Product};

/// Landing page content.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub categories: Vec<Category>,
    pub featured: Vec<Product>,
}

pub struct GetHomeHandler {
    catalogue: Arc<Catalogue>,
    featured_count: usize,
}

impl GetHomeHandler {
    pub fn new(catalogue: Arc<Catalogue>, featured_count: usize) -> Self {
        Self {
            catalogue,
            featured_count,
        }
    }

    pub fn handle(&self) -> HomePage {
        HomePage {
            categories: self.catalogue.categories().to_vec(),
            featured: self.catalogue.featured(self.featured_count).to_vec(),
        }
    }
}
