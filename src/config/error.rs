//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Currency must be a three-letter ISO code")]
    InvalidCurrency,

    #[error("Featured product count must be between 1 and 50")]
    InvalidFeaturedCount,

    #[error("Catalogue path must not be empty")]
    EmptyCataloguePath,

    #[error("Cart idle timeout must be between 60 seconds and 30 days")]
    InvalidCartTtl,

    #[error("Cart capacity must be at least 1")]
    InvalidMaxCarts,
}
