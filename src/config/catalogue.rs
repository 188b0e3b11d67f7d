//! Catalogue configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the product catalogue comes from and how it is presented
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueConfig {
    /// YAML file replacing the built-in catalogue
    pub path: Option<PathBuf>,

    /// Currency code prices are quoted in
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Number of products featured on the home page
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

impl CatalogueConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrency);
        }
        if self.featured_count == 0 || self.featured_count > 50 {
            return Err(ValidationError::InvalidFeaturedCount);
        }
        if matches!(&self.path, Some(p) if p.as_os_str().is_empty()) {
            return Err(ValidationError::EmptyCataloguePath);
        }
        Ok(())
    }
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            path: None,
            currency: default_currency(),
            featured_count: default_featured_count(),
        }
    }
}

fn default_currency() -> String {
    "AED".to_string()
}

fn default_featured_count() -> usize {
    4
}
