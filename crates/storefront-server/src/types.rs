//! Request/Response types for the storefront REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_core::ProductFilter;
use utoipa::ToSchema;

// ============================================================================
// Product search
// ============================================================================

/// Body of `POST /api/products`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductsRequest {
    /// Facet selection: `{color: [..], size: [..], price: [min, max], sort}`.
    /// `sort` is one of `none`, `Asc`, `Desc`.
    #[schema(value_type = Object, example = json!({
        "color": ["white", "blue"],
        "size": ["L"],
        "price": [0, 100],
        "sort": "none"
    }))]
    pub filter: ProductFilter,
}

/// Catalog record stored as metadata next to each product vector.
///
/// Documents the expected shape only. Hits carry their metadata as raw JSON
/// so whatever the index stored reaches the storefront unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: String,
    /// Image identifier used by the storefront to build the picture URL.
    pub image_id: String,
    /// Display name.
    #[schema(example = "Cotton Tee")]
    pub name: String,
    /// Size option.
    #[schema(example = "L")]
    pub size: String,
    /// Color option.
    #[schema(example = "white")]
    pub color: String,
    /// Price in dollars.
    #[schema(example = 25.0)]
    pub price: f64,
}

/// A single product returned by the vector index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductHit {
    /// Vector ID.
    pub id: String,
    /// Similarity score.
    pub score: f32,
    /// Product metadata as stored in the index, present when the query
    /// asked for it. Usually shaped like [`Product`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Product>)]
    pub metadata: Option<Value>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    #[schema(example = "Server Error")]
    pub message: String,
}
