//! HTTP handlers for the storefront REST API.
//!
//! - `health`: Health check endpoint
//! - `products`: Faceted product search

pub mod health;
pub mod products;

pub use health::health_check;
pub use products::products;
