//! Faceted product search handler.

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::types::{ErrorResponse, ProductHit, ProductsRequest};
use crate::AppState;

/// Search products by color, size and price, ranked by the sort preference.
///
/// The body is parsed here rather than with the `Json` extractor so that a
/// malformed body gets the same `500` answer as every other failure.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductsRequest,
    responses(
        (status = 200, description = "Matching products", body = [ProductHit]),
        (status = 500, description = "Any failure", body = ErrorResponse)
    )
)]
pub async fn products(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<ProductHit>>, ApiError> {
    let request: ProductsRequest =
        serde_json::from_slice(&body).map_err(storefront_core::Error::from)?;
    let descriptor = request.filter;
    descriptor.validate(&state.catalog)?;

    let query = state.assembler.assemble_descriptor(&descriptor)?;
    tracing::info!(
        filter = query.filter.as_deref().unwrap_or_default(),
        "Generated filter string"
    );

    let hits = state.index.query(&query).await?;
    Ok(Json(hits))
}
