//! Configuration for the catalog binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::query::DEFAULT_PAGE_SIZE;
use catalog_runtime::StoreConfig;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "product_catalog=info";

/// Catalog configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products per list page (default: 6)
    pub page_size: usize,
    /// Start from the sample products (default: true)
    pub seed: bool,
    /// Maximum nested effect feedback per dispatch (default: 16)
    pub max_feedback_depth: usize,
    /// Tracing filter directive (default: `product_catalog=info`)
    pub log_level: String,
}

/// Configuration rejected by [`CatalogConfig::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A list page must show at least one product
    #[error("CATALOG_PAGE_SIZE must be at least 1")]
    ZeroPageSize,

    /// Adding a product always feeds one list reset back into the store
    #[error("CATALOG_MAX_FEEDBACK_DEPTH must be at least 1")]
    ZeroFeedbackDepth,
}

impl CatalogConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            page_size: lookup("CATALOG_PAGE_SIZE")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.page_size),
            seed: lookup("CATALOG_SEED")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.seed),
            max_feedback_depth: lookup("CATALOG_MAX_FEEDBACK_DEPTH")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.max_feedback_depth),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Check values that parse but cannot work
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPageSize`] for a page size of 0 and
    /// [`ConfigError::ZeroFeedbackDepth`] for a feedback depth of 0.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.max_feedback_depth == 0 {
            return Err(ConfigError::ZeroFeedbackDepth);
        }
        Ok(())
    }

    /// Store settings derived from this configuration
    ///
    /// The feedback depth is at least 1 so an add and its list reset commit
    /// together.
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        let depth = if self.max_feedback_depth == 0 { 1 } else { self.max_feedback_depth };
        StoreConfig::new(depth)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            seed: true,
            max_feedback_depth: StoreConfig::default().max_feedback_depth,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
