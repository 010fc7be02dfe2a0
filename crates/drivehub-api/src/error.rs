//! The HTTP error shape produced at the top-level boundary.
//!
//! Every failure kind is flattened into one generic 500 response; there
//! is no per-kind status mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use drivehub_core::error::AppError;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Short error headline.
    pub error: String,
    /// Human-readable detail message.
    pub details: String,
    /// Error source chain, present only in the development environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ApiErrorResponse {
    /// Create an error response without a stack.
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
            stack: None,
        }
    }

    /// Create an error response from an application error, optionally
    /// carrying the error source chain.
    pub fn from_app_error(error: impl Into<String>, err: &AppError, include_stack: bool) -> Self {
        Self {
            error: error.into(),
            details: err.message.clone(),
            stack: include_stack.then(|| source_chain(err)),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

/// Render an error and its sources, one frame per line.
fn source_chain(err: &AppError) -> String {
    let mut frames = vec![err.to_string()];
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        frames.push(cause.to_string());
        source = cause.source();
    }
    frames.join("\n")
}
