//! Validation of the product filter descriptor sent by the storefront page.
//!
//! The query assembler trusts its input. Everything it relies on (known
//! facet values, ordered non-negative price bounds, a known sort mode) is
//! checked here first.

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::query::SortMode;

/// Facet selection as posted by the storefront page.
///
/// ```json
/// {"color": ["white", "blue"], "size": ["L"], "price": [0, 100], "sort": "none"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Selected colors. Empty means the color facet is not constrained.
    pub color: Vec<String>,
    /// Selected sizes. Empty means the size facet is not constrained.
    pub size: Vec<String>,
    /// Inclusive price range `[lower, upper]`.
    pub price: [f64; 2],
    /// Requested ordering.
    pub sort: SortMode,
}

impl Default for ProductFilter {
    /// Every option selected, full price range, no sort.
    fn default() -> Self {
        let catalog = CatalogConfig::default();
        Self {
            color: catalog.colors,
            size: catalog.sizes,
            price: [catalog.min_price, catalog.max_price],
            sort: SortMode::None,
        }
    }
}

impl ProductFilter {
    /// Parses a descriptor from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] on malformed JSON, a missing field or
    /// an unknown sort mode.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Checks the descriptor against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilter`] naming the first offending field.
    pub fn validate(&self, catalog: &CatalogConfig) -> Result<()> {
        check_options("color", &self.color, &catalog.colors)?;
        check_options("size", &self.size, &catalog.sizes)?;

        let [lower, upper] = self.price;
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::invalid_filter("price", "bounds must be finite"));
        }
        if lower < 0.0 || upper < 0.0 {
            return Err(Error::invalid_filter("price", "bounds must be non-negative"));
        }
        if lower > upper {
            return Err(Error::invalid_filter(
                "price",
                format!("lower bound {lower} exceeds upper bound {upper}"),
            ));
        }
        if lower < catalog.min_price || upper > catalog.max_price {
            return Err(Error::invalid_filter(
                "price",
                format!(
                    "range [{lower}, {upper}] is outside [{}, {}]",
                    catalog.min_price, catalog.max_price
                ),
            ));
        }
        Ok(())
    }
}

fn check_options(field: &str, selected: &[String], allowed: &[String]) -> Result<()> {
    match selected.iter().find(|value| !allowed.contains(*value)) {
        Some(unknown) => Err(Error::invalid_filter(
            field,
            format!("unknown option '{unknown}', expected one of: {allowed:?}"),
        )),
        None => Ok(()),
    }
}
