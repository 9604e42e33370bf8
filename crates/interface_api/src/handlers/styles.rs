//! Style handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use domain_catalog::Style;

use crate::{error::ApiError, AppState};

pub async fn list_styles(State(state): State<AppState>) -> Result<Json<Vec<Style>>, ApiError> {
    Ok(Json(state.catalog.list_styles().await?))
}

pub async fn get_style(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Style>, ApiError> {
    Ok(Json(state.catalog.get_style(&name).await?))
}

pub async fn create_style(
    State(state): State<AppState>,
    Json(style): Json<Style>,
) -> Result<(StatusCode, Json<Style>), ApiError> {
    let created = state.catalog.create_style(style).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replaces a style's description; the name in the body must match the path
pub async fn update_style(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(style): Json<Style>,
) -> Result<Json<Style>, ApiError> {
    Ok(Json(state.catalog.update_style(&name, style).await?))
}

pub async fn delete_style(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete_style(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
