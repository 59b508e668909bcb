//! Facet filter predicates for the vector index.
//!
//! The index accepts a textual boolean filter. This module models that
//! filter as a small AST ([`Predicate`]) and serializes it in exactly one
//! place, the [`std::fmt::Display`] impl in `render.rs`.
//!
//! Facets are accumulated with a [`FilterBuilder`]: constraints sharing a key
//! form one OR-group, and groups are joined with AND in key insertion order.
//!
//! ## Usage
//!
//! ```rust
//! use storefront_core::filter::FilterBuilder;
//!
//! let filter = FilterBuilder::new()
//!     .add("color", "=", "white")?
//!     .add("color", "=", "blue")?
//!     .add("size", "=", "L")?
//!     .add_range("price", 0.0, 100.0)?;
//!
//! assert_eq!(
//!     filter.render(),
//!     "(color = 'white' OR color = 'blue') AND (size = 'L') AND (price >= 0 AND price <= 100)"
//! );
//! # Ok::<(), storefront_core::Error>(())
//! ```

mod builders;
mod render;

pub use builders::FilterBuilder;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A facet value: quoted when it is text, bare when it is a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
    /// Numeric value, rendered unquoted.
    Number(f64),
    /// String value, rendered in single quotes.
    Text(String),
}

impl FacetValue {
    /// Checks that the value can be written into the filter language.
    ///
    /// The filter language has no escape sequence for a quote inside a
    /// quoted literal, so text containing `'` is rejected. Numbers must be
    /// finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFacetValue`] naming `key` when the value
    /// cannot be rendered.
    pub fn check(&self, key: &str) -> Result<()> {
        match self {
            Self::Text(text) if text.contains('\'') => Err(Error::invalid_value(
                key,
                format!("string value {text:?} contains a single quote"),
            )),
            Self::Number(n) if !n.is_finite() => Err(Error::invalid_value(
                key,
                format!("numeric value {n} is not finite"),
            )),
            _ => Ok(()),
        }
    }
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FacetValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FacetValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for FacetValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for FacetValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for FacetValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for FacetValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for FacetValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// A boolean filter expression understood by the vector index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Predicate {
    /// Comparison of a field with a single value: `key op value`.
    Equality {
        /// Field name.
        key: String,
        /// Comparison operator, written verbatim (usually `=`).
        operator: String,
        /// Value to compare against.
        value: FacetValue,
    },
    /// Inclusive numeric range: `key >= lower AND key <= upper`.
    Range {
        /// Field name.
        key: String,
        /// Lower bound (inclusive).
        lower: f64,
        /// Upper bound (inclusive).
        upper: f64,
    },
    /// Pre-formatted clause, written verbatim.
    Raw {
        /// Clause text.
        text: String,
    },
    /// Logical OR of the contained predicates.
    Or {
        /// Alternatives.
        predicates: Vec<Predicate>,
    },
    /// Logical AND of the contained predicates. Each operand is
    /// parenthesized when rendered.
    And {
        /// Operands.
        predicates: Vec<Predicate>,
    },
}

impl Predicate {
    /// Creates an equality predicate.
    #[must_use]
    pub fn equals(key: impl Into<String>, value: impl Into<FacetValue>) -> Self {
        Self::compare(key, "=", value)
    }

    /// Creates a comparison with an arbitrary operator.
    #[must_use]
    pub fn compare(
        key: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<FacetValue>,
    ) -> Self {
        Self::Equality {
            key: key.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Creates an inclusive range predicate.
    #[must_use]
    pub fn range(key: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self::Range {
            key: key.into(),
            lower,
            upper,
        }
    }

    /// Creates a raw clause.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw { text: text.into() }
    }

    /// Creates an OR of several predicates.
    #[must_use]
    pub fn or(predicates: Vec<Predicate>) -> Self {
        Self::Or { predicates }
    }

    /// Creates an AND of several predicates.
    #[must_use]
    pub fn and(predicates: Vec<Predicate>) -> Self {
        Self::And { predicates }
    }

    /// Returns true for predicates rendered without inner structure.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Equality { .. })
    }
}
