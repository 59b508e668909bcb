//! Client for the vector index holding the product catalog.
//!
//! The index is an external service. Handlers only see the
//! [`ProductIndex`] trait so tests can swap in an in-memory index.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use storefront_core::config::IndexConfig;
use storefront_core::QueryRequest;
use thiserror::Error;

use crate::types::ProductHit;

/// Errors returned by the vector index.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The request could not be sent or the response could not be read.
    #[error("Index transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The index answered with a non-success status.
    #[error("Index returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if readable.
        body: String,
    },
}

/// A nearest-neighbor index over product vectors.
#[async_trait]
pub trait ProductIndex: Send + Sync {
    /// Runs `request` and returns the matching products, closest first.
    async fn query(&self, request: &QueryRequest) -> Result<Vec<ProductHit>, IndexError>;
}

/// Envelope of the index `/query` response.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Vec<ProductHit>,
}

/// REST client for the index `/query` endpoint.
#[derive(Debug, Clone)]
pub struct RestIndex {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl RestIndex {
    /// Creates a client from the `[index]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &IndexConfig) -> Result<Self, IndexError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token: (!config.token.is_empty()).then(|| config.token.clone()),
        })
    }

    /// URL queries are posted to.
    #[must_use]
    pub fn query_url(&self) -> String {
        format!("{}/query", self.endpoint)
    }
}

#[async_trait]
impl ProductIndex for RestIndex {
    async fn query(&self, request: &QueryRequest) -> Result<Vec<ProductHit>, IndexError> {
        let mut builder = self.client.post(self.query_url()).json(request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IndexError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: QueryResponse = response.json().await?;
        tracing::debug!(hits = body.result.len(), "Index query completed");
        Ok(body.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_trims_trailing_slash() {
        let config = IndexConfig {
            endpoint: "http://index.local/".to_string(),
            ..IndexConfig::default()
        };

        let index = RestIndex::new(&config).expect("client");

        assert_eq!(index.query_url(), "http://index.local/query");
    }

    #[test]
    fn test_empty_token_sends_no_auth() {
        let index = RestIndex::new(&IndexConfig::default()).expect("client");

        assert!(index.token.is_none());
    }

    #[test]
    fn test_query_response_parses_hits() {
        let json = r#"{"result": [
            {"id": "1", "score": 0.97, "metadata": {
                "id": "1", "imageId": "/thumbnails/white_1.png", "name": "Cotton Tee",
                "size": "L", "color": "white", "price": 25
            }},
            {"id": "2", "score": 0.5}
        ]}"#;

        let response: QueryResponse = serde_json::from_str(json).expect("parse");

        assert_eq!(response.result.len(), 2);
        let product = response.result[0].metadata.as_ref().expect("metadata");
        assert_eq!(product["imageId"], "/thumbnails/white_1.png");
        assert!(product["price"].is_u64(), "integer price stays an integer");
        assert!(response.result[1].metadata.is_none());
    }
}
