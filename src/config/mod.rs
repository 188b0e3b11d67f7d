//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FLANDEUR` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use flandeur::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Serving {} prices", config.catalogue.currency);
//! ```

mod cart;
mod catalogue;
mod error;
mod server;

pub use cart::CartConfig;
pub use catalogue::CatalogueConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Catalogue source and presentation
    #[serde(default)]
    pub catalogue: CatalogueConfig,

    /// Cart retention
    #[serde(default)]
    pub cart: CartConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FLANDEUR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FLANDEUR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FLANDEUR__CATALOGUE__PATH=/etc/flandeur/catalogue.yaml` -> `catalogue.path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FLANDEUR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.catalogue.validate()?;
        self.cart.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "FLANDEUR__SERVER__PORT",
        "FLANDEUR__SERVER__ENVIRONMENT",
        "FLANDEUR__CATALOGUE__PATH",
        "FLANDEUR__CATALOGUE__FEATURED_COUNT",
        "FLANDEUR__CART__IDLE_TTL_SECS",
        "FLANDEUR__CART__MAX_CARTS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.catalogue.currency, "AED");
        assert_eq!(config.cart.idle_ttl_secs, 86_400);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FLANDEUR__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FLANDEUR__SERVER__PORT", "3000");
        env::set_var("FLANDEUR__CATALOGUE__PATH", "/srv/catalogue.yaml");
        env::set_var("FLANDEUR__CATALOGUE__FEATURED_COUNT", "6");
        env::set_var("FLANDEUR__CART__IDLE_TTL_SECS", "3600");
        env::set_var("FLANDEUR__CART__MAX_CARTS", "500");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.catalogue.path.as_deref(),
            Some(std::path::Path::new("/srv/catalogue.yaml"))
        );
        assert_eq!(config.catalogue.featured_count, 6);
        assert_eq!(config.cart.idle_ttl_secs, 3600);
        assert_eq!(config.cart.max_carts, 500);
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let mut config = AppConfig::default();
        config.cart.max_carts = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxCarts));
    }
}
