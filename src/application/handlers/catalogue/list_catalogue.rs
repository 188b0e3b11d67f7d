//! Plain catalogue listings.

use std::sync::Arc;

use crate::domain::catalogue::{Catalogue, Category, Product};

pub struct ListCategoriesHandler {
    catalogue: Arc<Catalogue>,
}

impl ListCategoriesHandler {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn handle(&self) -> Vec<Category> {
        self.catalogue.categories().to_vec()
    }
}

pub struct ListProductsHandler {
    catalogue: Arc<Catalogue>,
}

impl ListProductsHandler {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn handle(&self) -> Vec<Product> {
        self.catalogue.products().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalogue::builtin_catalogue;

    #[test]
    fn lists_whole_catalogue() {
        let catalogue = Arc::new(builtin_catalogue().unwrap());

        assert_eq!(ListCategoriesHandler::new(catalogue.clone()).handle().len(), 5);
        assert_eq!(ListProductsHandler::new(catalogue).handle().len(), 12);
    }
}
