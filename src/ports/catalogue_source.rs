//! Catalogue Source Port - Interface for loading the product catalogue.
//!
//! The catalogue is loaded once at startup and shared read-only afterwards.

use async_trait::async_trait;

use crate::domain::catalogue::{Catalogue, CatalogueError};

/// Port for loading the catalogue
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Load and validate the catalogue
    ///
    /// # Errors
    /// Returns `CatalogueError` if the data cannot be read or breaks a
    /// catalogue invariant
    async fn load(&self) -> Result<Catalogue, CatalogueError>;

    /// Human-readable description of where the data comes from, for logs
    fn describe(&self) -> String;
}
