//! Liveness endpoint.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

/// Reports the server version and the query shape it produces.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = Object)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let assembler = &state.assembler;
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "top_k": assembler.default_top_k(),
        "sort": assembler.sentinels(),
    }))
}
