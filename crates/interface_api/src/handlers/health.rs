//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use core_kernel::RegistryHealthReport;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check across every registered adapter
///
/// Responds 503 with the same report when no adapter is usable.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<RegistryHealthReport>) {
    let mut results = Vec::with_capacity(state.health.len());
    for adapter in &state.health {
        results.push(adapter.health_check().await);
    }
    let report = RegistryHealthReport::from_results(results);

    let status = if report.is_operational() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report))
}
