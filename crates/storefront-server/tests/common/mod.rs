//! Common test utilities for storefront-server integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use storefront_core::{QueryRequest, StorefrontConfig};
use storefront_server::{api_router, AppState, IndexError, ProductHit, ProductIndex};

/// In-memory index that records every query and answers with fixed hits.
#[derive(Default)]
pub struct RecordingIndex {
    hits: Vec<ProductHit>,
    queries: Mutex<Vec<QueryRequest>>,
}

impl RecordingIndex {
    pub fn with_hits(hits: Vec<ProductHit>) -> Self {
        Self {
            hits,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<QueryRequest> {
        self.queries.lock().expect("lock").clone()
    }
}

#[async_trait]
impl ProductIndex for RecordingIndex {
    async fn query(&self, request: &QueryRequest) -> Result<Vec<ProductHit>, IndexError> {
        self.queries.lock().expect("lock").push(request.clone());
        Ok(self.hits.clone())
    }
}

/// Index that always fails with an HTTP status error.
pub struct FailingIndex;

#[async_trait]
impl ProductIndex for FailingIndex {
    async fn query(&self, _request: &QueryRequest) -> Result<Vec<ProductHit>, IndexError> {
        Err(IndexError::Status {
            status: 503,
            body: "unavailable".to_string(),
        })
    }
}

/// Sample catalog hit.
pub fn hit(id: &str, color: &str, size: &str, price: f64) -> ProductHit {
    ProductHit {
        id: id.to_string(),
        score: 0.9,
        metadata: Some(json!({
            "id": id,
            "imageId": format!("/thumbnails/{color}_{id}.png"),
            "name": "Cotton Tee",
            "size": size,
            "color": color,
            "price": price
        })),
    }
}

/// Hit carrying `metadata` exactly as given.
pub fn raw_hit(id: &str, metadata: Value) -> ProductHit {
    ProductHit {
        id: id.to_string(),
        score: 0.5,
        metadata: Some(metadata),
    }
}

/// Helper to create test app backed by `index`.
pub fn create_test_app(index: Arc<dyn ProductIndex>) -> Router {
    let state = Arc::new(AppState::new(&StorefrontConfig::default(), index));
    api_router(state)
}

/// Posts `body` to `/api/products` and returns status and JSON body.
pub async fn post_products(app: Router, body: String) -> (axum::http::StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json: Value = serde_json::from_slice(&body).expect("Invalid JSON");
    (status, json)
}
