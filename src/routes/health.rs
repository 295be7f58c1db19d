use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub storage: String,
}

/// Health check endpoint
///
/// Storage is only reported; profiles can still be built without it.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let storage_ok = state.profiles.repository().dir().is_dir();

    Json(HealthResponse {
        status: if storage_ok { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceHealth {
            storage: if storage_ok { "ok" } else { "error" }.to_string(),
        },
    })
}
