//! Error types for `storefront-core`.
//!
//! A single error enum covers filter construction, descriptor validation,
//! configuration and serialization. Error codes follow the pattern
//! `STORE-XXX`.
//!
//! An empty predicate set is not an error: it renders to the empty string
//! and produces a query without a filter.

use thiserror::Error;

/// Result type alias for storefront operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a product query.
#[derive(Error, Debug)]
pub enum Error {
    /// A facet value cannot be expressed in the filter language (STORE-001).
    #[error("[STORE-001] Invalid value for facet '{key}': {reason}")]
    InvalidFacetValue {
        /// Facet key the value was added under.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The filter descriptor failed validation (STORE-002).
    #[error("[STORE-002] Invalid filter field '{field}': {reason}")]
    InvalidFilter {
        /// Descriptor field that failed validation.
        field: String,
        /// Validation message.
        reason: String,
    },

    /// Configuration error (STORE-003).
    #[error("[STORE-003] Configuration error: {0}")]
    Config(String),

    /// Serialization error (STORE-004).
    #[error("[STORE-004] Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Returns the error code (e.g., "STORE-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidFacetValue { .. } => "STORE-001",
            Self::InvalidFilter { .. } => "STORE-002",
            Self::Config(_) => "STORE-003",
            Self::Serialization(_) => "STORE-004",
        }
    }

    pub(crate) fn invalid_value(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFacetValue {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_filter(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFilter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
