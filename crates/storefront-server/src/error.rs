//! API error type mapped to HTTP responses.
//!
//! Every failure on the product endpoint answers `500` with the body
//! `{"message": "Server Error"}`. The underlying cause is only logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::index::IndexError;
use crate::types::ErrorResponse;

/// Body message of every error response.
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Errors raised while serving a product query.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed body, invalid filter or unrenderable facet value.
    #[error(transparent)]
    Core(#[from] storefront_core::Error),

    /// The vector index failed.
    #[error(transparent)]
    Index(#[from] IndexError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Product query failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: SERVER_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
