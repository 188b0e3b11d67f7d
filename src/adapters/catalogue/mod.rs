//! Catalogue Adapters
//!
//! Implementations of the CatalogueSource port.
//!
//! ## Available Adapters
//!
//! - **EmbeddedCatalogue** - The YAML catalogue compiled into the binary
//! - **YamlFileCatalogue** - A YAML catalogue read from disk at startup

mod yaml_catalogue;

pub use yaml_catalogue::{builtin_catalogue, parse_catalogue, EmbeddedCatalogue, YamlFileCatalogue};
