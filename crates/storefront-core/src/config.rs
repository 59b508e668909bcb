//! Storefront configuration.
//!
//! Provides configuration file support via `storefront.toml`, environment
//! variables and runtime overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Runtime overrides (command line)
//! 2. Environment variables (`STOREFRONT_*`, sections separated by `__`,
//!    e.g. `STOREFRONT_SERVER__PORT=9000`)
//! 3. Configuration file (`storefront.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::query::{
    QueryAssembler, SortSentinels, DEFAULT_CEILING_PRICE, DEFAULT_FLOOR_PRICE,
    DEFAULT_MIDPOINT_PRICE, DEFAULT_TOP_K, DEFAULT_VECTOR_DIMENSION,
};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// HTTP server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address.
    pub host: String,
    /// Port number.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Search configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Products returned per query.
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Sort vector configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Dimension of the product vectors in the index.
    pub dimension: usize,
    /// Target price when no sort is requested.
    pub midpoint: f32,
    /// Target price for ascending sort.
    pub floor: f32,
    /// Target price for descending sort.
    pub ceiling: f32,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_VECTOR_DIMENSION,
            midpoint: DEFAULT_MIDPOINT_PRICE,
            floor: DEFAULT_FLOOR_PRICE,
            ceiling: DEFAULT_CEILING_PRICE,
        }
    }
}

impl SortConfig {
    /// Returns the configured sentinels.
    #[must_use]
    pub fn sentinels(&self) -> SortSentinels {
        SortSentinels {
            midpoint: self.midpoint,
            floor: self.floor,
            ceiling: self.ceiling,
        }
    }
}

/// Catalog facet options section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Known product colors.
    pub colors: Vec<String>,
    /// Known product sizes.
    pub sizes: Vec<String>,
    /// Lowest selectable price.
    pub min_price: f64,
    /// Highest selectable price.
    pub max_price: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            colors: ["white", "beige", "blue", "green", "purple"]
                .map(String::from)
                .to_vec(),
            sizes: ["S", "M", "L"].map(String::from).to_vec(),
            min_price: 0.0,
            max_price: 100.0,
        }
    }
}

/// Vector index connection section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Base URL of the index REST API.
    pub endpoint: String,
    /// Bearer token. Empty means no `Authorization` header.
    pub token: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080".to_string(),
            token: String::new(),
            timeout_ms: 5000,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main storefront configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Search configuration.
    pub search: SearchConfig,
    /// Sort vector configuration.
    pub sort: SortConfig,
    /// Catalog facet options.
    pub catalog: CatalogConfig,
    /// Vector index connection.
    pub index: IndexConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("storefront.toml")
    }

    /// Loads configuration from a specific file path. A missing file is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("STOREFRONT_").split("__"))
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str))
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.top_k == 0 || self.search.top_k > 1000 {
            return Err(ConfigError::InvalidValue {
                key: "search.top_k".to_string(),
                message: format!("value {} is out of range [1, 1000]", self.search.top_k),
            });
        }

        if self.sort.dimension == 0 {
            return Err(ConfigError::InvalidValue {
                key: "sort.dimension".to_string(),
                message: "value must be >= 1".to_string(),
            });
        }

        let sort = &self.sort;
        if !(sort.floor <= sort.midpoint && sort.midpoint <= sort.ceiling) {
            return Err(ConfigError::InvalidValue {
                key: "sort".to_string(),
                message: format!(
                    "expected floor <= midpoint <= ceiling, got {} / {} / {}",
                    sort.floor, sort.midpoint, sort.ceiling
                ),
            });
        }

        if self.catalog.colors.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "catalog.colors".to_string(),
                message: "at least one color is required".to_string(),
            });
        }

        if self.catalog.sizes.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "catalog.sizes".to_string(),
                message: "at least one size is required".to_string(),
            });
        }

        let catalog = &self.catalog;
        if catalog.min_price < 0.0 || catalog.min_price > catalog.max_price {
            return Err(ConfigError::InvalidValue {
                key: "catalog.min_price".to_string(),
                message: format!(
                    "expected 0 <= min_price <= max_price, got {} / {}",
                    catalog.min_price, catalog.max_price
                ),
            });
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "value '{}' is invalid, expected one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        Ok(())
    }

    /// Builds a query assembler from the sort and search sections.
    #[must_use]
    pub fn assembler(&self) -> QueryAssembler {
        QueryAssembler::new(self.sort.sentinels(), self.sort.dimension)
            .with_default_top_k(self.search.top_k)
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
