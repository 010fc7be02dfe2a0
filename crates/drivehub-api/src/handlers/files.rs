//! File listing handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::dto::response::FileListResponse;
use crate::error::ApiErrorResponse;
use crate::state::AppState;

/// ANY /api/files
///
/// The single top-level error boundary: every failure on the listing
/// path is flattened into one 500 shape here. When the document store
/// never initialized, the handler short-circuits before any cache or
/// upstream work.
pub async fn fetch_files(State(state): State<AppState>) -> Response {
    let Some(listing) = state.listing.as_ref() else {
        return ApiErrorResponse::new(
            "Server configuration error",
            "Document store is not initialized",
        )
        .into_response();
    };

    match listing.fetch_files().await {
        Ok(listing) => (StatusCode::OK, Json(FileListResponse::from(listing))).into_response(),
        Err(err) => {
            error!(error = %err, "Failed to fetch files");
            ApiErrorResponse::from_app_error(
                "Failed to fetch files",
                &err,
                state.config.server.is_development(),
            )
            .into_response()
        }
    }
}
