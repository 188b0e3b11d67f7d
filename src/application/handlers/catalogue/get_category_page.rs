//! GetCategoryPageHandler - Query handler for a category listing page.

use std::sync::Arc;

use crate::domain::catalogue::{Catalogue, CatalogueError, Category, Product};

#[derive(Debug, Clone)]
pub struct GetCategoryPageQuery {
    pub slug: String,
}

/// A category with every product listed under it.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub category: Category,
    pub products: Vec<Product>,
}

impl CategoryPage {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

pub struct GetCategoryPageHandler {
    catalogue: Arc<Catalogue>,
}

impl GetCategoryPageHandler {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn handle(&self, query: GetCategoryPageQuery) -> Result<CategoryPage, CatalogueError> {
        let category = self.catalogue.category(&query.slug)?;
        let products = self
            .catalogue
            .products_in(&category.slug)
            .into_iter()
            .cloned()
            .collect();

        Ok(CategoryPage {
            category: category.clone(),
            products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalogue::builtin_catalogue;

    fn handler() -> GetCategoryPageHandler {
        GetCategoryPageHandler::new(Arc::new(builtin_catalogue().unwrap()))
    }

    #[test]
    fn lists_products_of_category() {
        let page = handler()
            .handle(GetCategoryPageQuery {
                slug: "wedding".into(),
            })
            .unwrap();

        let ids: Vec<&str> = page.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["white-lily-elegance", "peony-blush", "white-rose-serenity"]
        );
        assert_eq!(page.product_count(), 3);
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let err = handler()
            .handle(GetCategoryPageQuery {
                slug: "graduation".into(),
            })
            .unwrap_err();

        assert!(matches!(err, CatalogueError::CategoryNotFound(_)));
    }
}
