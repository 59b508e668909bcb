#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_for_each)]
//! Storefront Server - REST API for faceted product search.
//!
//! `POST /api/products` takes a facet selection, turns it into a vector
//! index query with [`storefront_core::QueryAssembler`] and returns the
//! matching products.
//!
//! ## OpenAPI Documentation
//!
//! - Swagger UI: `GET /swagger-ui`
//! - OpenAPI JSON: `GET /api-docs/openapi.json`

mod error;
mod handlers;
pub mod index;
mod types;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use storefront_core::config::CatalogConfig;
use storefront_core::{QueryAssembler, StorefrontConfig};
use utoipa::OpenApi;

pub use error::{ApiError, SERVER_ERROR_MESSAGE};
pub use handlers::{health_check, products};
pub use index::{IndexError, ProductIndex, RestIndex};
pub use types::*;

// ============================================================================
// OpenAPI Documentation
// ============================================================================

/// Storefront API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        description = "Faceted product search over a vector index. \
            Filters by color, size and price; approximates price sort through the query vector."
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "products", description = "Faceted product search")
    ),
    paths(
        handlers::health::health_check,
        handlers::products::products
    ),
    components(
        schemas(ProductsRequest, Product, ProductHit, ErrorResponse)
    )
)]
pub struct ApiDoc;

// ============================================================================
// Application State
// ============================================================================

/// Application state shared across handlers.
pub struct AppState {
    /// Builds index queries from facet selections.
    pub assembler: QueryAssembler,
    /// Facet options accepted from clients.
    pub catalog: CatalogConfig,
    /// The product index.
    pub index: Arc<dyn ProductIndex>,
}

impl AppState {
    /// Creates the state from a loaded configuration and an index.
    #[must_use]
    pub fn new(config: &StorefrontConfig, index: Arc<dyn ProductIndex>) -> Self {
        Self {
            assembler: config.assembler(),
            catalog: config.catalog.clone(),
            index,
        }
    }
}

/// Builds the API router (without Swagger UI and HTTP layers).
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/products", post(products))
        .with_state(state)
}

// ============================================================================
// Tests
// ============================================================================
