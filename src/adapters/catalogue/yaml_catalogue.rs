//! YAML catalogue sources.
//!
//! The shop ships with its catalogue embedded in the binary. Operators can
//! point `catalogue.path` at a YAML file of the same shape to replace it.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::catalogue::{Catalogue, CatalogueError, Category, Product};
use crate::ports::CatalogueSource;

const BUILTIN_YAML: &str = include_str!("builtin_catalogue.yaml");

static BUILTIN: Lazy<Result<Catalogue, CatalogueError>> =
    Lazy::new(|| parse_catalogue(BUILTIN_YAML));

/// On-disk shape of a catalogue document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogueDocument {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// Parse and validate a YAML catalogue document.
pub fn parse_catalogue(yaml: &str) -> Result<Catalogue, CatalogueError> {
    let document: CatalogueDocument =
        serde_yaml::from_str(yaml).map_err(|e| CatalogueError::Invalid(e.to_string()))?;
    Catalogue::new(document.categories, document.products)
}

/// The catalogue compiled into the binary.
pub fn builtin_catalogue() -> Result<Catalogue, CatalogueError> {
    BUILTIN.clone()
}

/// Catalogue source backed by the embedded document.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogue;

#[async_trait]
impl CatalogueSource for EmbeddedCatalogue {
    async fn load(&self) -> Result<Catalogue, CatalogueError> {
        builtin_catalogue()
    }

    fn describe(&self) -> String {
        "built-in catalogue".to_string()
    }
}

/// Catalogue source backed by a YAML file.
#[derive(Debug, Clone)]
pub struct YamlFileCatalogue {
    path: PathBuf,
}

impl YamlFileCatalogue {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogueSource for YamlFileCatalogue {
    async fn load(&self) -> Result<Catalogue, CatalogueError> {
        let yaml = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogueError::Invalid(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        parse_catalogue(&yaml)
    }

    fn describe(&self) -> String {
        format!("catalogue file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::{CatalogueQuery, CategoryFilter, PriceRange, SortOrder};
    use crate::domain::foundation::CategorySlug;
    use std::io::Write;

    const SMALL: &str = r#"
categories:
  - id: wedding
    slug: wedding
    name: Wedding
    image: /images/wedding.jpg
    description: Bridal flowers.
products:
  - id: peony-blush
    name: Peony Blush
    price: 480
    image: /images/products/peony-blush.jpg
    description: Soft pink peonies.
    categories: [wedding]
"#;

    #[test]
    fn builtin_catalogue_loads_all_entries() {
        let catalogue = builtin_catalogue().unwrap();
        assert_eq!(catalogue.categories().len(), 5);
        assert_eq!(catalogue.products().len(), 12);
        assert_eq!(catalogue.products()[0].id.as_str(), "pink-rose-bouquet");
    }

    #[test]
    fn builtin_romance_under_500_excludes_orchid() {
        let catalogue = builtin_catalogue().unwrap();
        let orchid = catalogue.product("purple-orchid").unwrap();
        assert_eq!(orchid.name, "Purple Orchid Luxury");
        assert!(orchid.in_category(&CategorySlug::new("romance").unwrap()));

        let query = CatalogueQuery::new(
            "romance".parse::<CategoryFilter>().unwrap(),
            PriceRange::new(0, 500).unwrap(),
            SortOrder::Default,
        );
        let visible = query.apply(catalogue.products());
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.id.as_str() != "purple-orchid"));
    }

    #[test]
    fn builtin_related_for_peony_blush() {
        let catalogue = builtin_catalogue().unwrap();
        let peony = catalogue.product("peony-blush").unwrap();
        let related = catalogue.related_to(peony);
        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|p| p.id != peony.id));
    }

    #[test]
    fn parse_rejects_malformed_yaml() {
        let result = parse_catalogue("categories: [oops");
        assert!(matches!(result, Err(CatalogueError::Invalid(_))));
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let yaml = format!("{}\nstock: 12\n", SMALL);
        assert!(parse_catalogue(&yaml).is_err());
    }

    #[test]
    fn parse_rejects_negative_price() {
        let yaml = SMALL.replace("price: 480", "price: -5");
        assert!(parse_catalogue(&yaml).is_err());
    }

    #[tokio::test]
    async fn file_source_loads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let source = YamlFileCatalogue::new(file.path());
        let catalogue = source.load().await.unwrap();

        assert_eq!(catalogue.products().len(), 1);
        assert!(source.describe().contains("catalogue file"));
    }

    #[tokio::test]
    async fn file_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = YamlFileCatalogue::new(dir.path().join("missing.yaml"));
        let err = source.load().await.unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[tokio::test]
    async fn embedded_source_matches_builtin() {
        let catalogue = EmbeddedCatalogue.load().await.unwrap();
        assert_eq!(catalogue.products().len(), 12);
    }
}
