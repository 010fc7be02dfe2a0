//! Health check handlers.

use axum::Json;
use axum::extract::State;

use drivehub_core::traits::store::DocumentStore;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/detailed
pub async fn health_detailed(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    let store = match state.store.as_ref() {
        Some(store) => match store.health_check().await {
            Ok(true) => "connected",
            _ => "unreachable",
        },
        None => "uninitialized",
    };

    let status = if store == "connected" { "ok" } else { "degraded" };

    Json(DetailedHealthResponse {
        status: status.to_string(),
        store: store.to_string(),
    })
}
