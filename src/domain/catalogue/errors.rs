//! Catalogue-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while building or querying the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    #[error("Duplicate category slug: {0}")]
    DuplicateCategory(String),

    #[error("Product '{product}' references unknown category '{category}'")]
    UnknownCategoryReference { product: String, category: String },

    #[error("Invalid catalogue data: {0}")]
    Invalid(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] ValidationError),
}

impl CatalogueError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogueError::ProductNotFound(_) => ErrorCode::ProductNotFound,
            CatalogueError::CategoryNotFound(_) => ErrorCode::CategoryNotFound,
            CatalogueError::InvalidQuery(_) => ErrorCode::ValidationFailed,
            CatalogueError::DuplicateProduct(_)
            | CatalogueError::DuplicateCategory(_)
            | CatalogueError::UnknownCategoryReference { .. }
            | CatalogueError::Invalid(_) => ErrorCode::InternalError,
        }
    }
}

impl From<CatalogueError> for DomainError {
    fn from(err: CatalogueError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
