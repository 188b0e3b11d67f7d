//! Cart retention configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// How long idle carts are kept and how many may exist at once
#[derive(Debug, Clone, Deserialize)]
pub struct CartConfig {
    /// Carts untouched for this many seconds are purged
    #[serde(default = "default_idle_ttl_secs")]
    pub idle_ttl_secs: u64,

    /// Upper bound on carts held at once
    #[serde(default = "default_max_carts")]
    pub max_carts: usize,
}

impl CartConfig {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // One minute to thirty days
        if self.idle_ttl_secs < 60 || self.idle_ttl_secs > 30 * 24 * 3600 {
            return Err(ValidationError::InvalidCartTtl);
        }
        if self.max_carts == 0 {
            return Err(ValidationError::InvalidMaxCarts);
        }
        Ok(())
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: default_idle_ttl_secs(),
            max_carts: default_max_carts(),
        }
    }
}

fn default_idle_ttl_secs() -> u64 {
    24 * 3600
}

fn default_max_carts() -> usize {
    10_000
}
