//! Province handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use domain_reference::Province;

use crate::{error::ApiError, AppState};

/// Gets a province by code
pub async fn get_province(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Province>, ApiError> {
    Ok(Json(state.reference.get_province(&code).await?))
}

/// Creates a province under an existing country
pub async fn create_province(
    State(state): State<AppState>,
    Json(province): Json<Province>,
) -> Result<(StatusCode, Json<Province>), ApiError> {
    let created = state.reference.create_province(province).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replaces a province
pub async fn update_province(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(province): Json<Province>,
) -> Result<Json<Province>, ApiError> {
    Ok(Json(state.reference.update_province(&code, province).await?))
}

pub async fn delete_province(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.reference.delete_province(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
