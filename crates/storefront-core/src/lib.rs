//! # `storefront-core`
//!
//! Faceted product search over a nearest-neighbor vector index.
//!
//! The index has no relational sort or filter, so a storefront query is
//! expressed as:
//!
//! - a **filter predicate** in the index filter language, one OR-group per
//!   facet joined with AND ([`filter::FilterBuilder`]);
//! - a **sort vector** whose last coordinate is a price target, so nearest
//!   neighbors lean toward cheap or expensive products
//!   ([`query::QueryAssembler`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_core::{QueryAssembler, SortMode};
//!
//! let assembler = QueryAssembler::default();
//! let request = assembler.assemble(["white", "blue"], ["L"], [0.0, 100.0], SortMode::None, 12)?;
//!
//! assert_eq!(
//!     request.filter.as_deref(),
//!     Some("(color = 'white' OR color = 'blue') AND (size = 'L') AND (price >= 0 AND price <= 100)")
//! );
//! assert_eq!(request.vector, vec![0.0, 0.0, 25.0]);
//! # Ok::<(), storefront_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod filter;
pub mod query;
pub mod validator;
#[cfg(test)]
mod validator_tests;

pub use config::{ConfigError, StorefrontConfig};
pub use error::{Error, Result};
pub use filter::{FacetValue, FilterBuilder, Predicate};
pub use query::{QueryAssembler, QueryRequest, SortMode, SortSentinels};
pub use validator::ProductFilter;
