//! Country handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use domain_reference::{Country, ProvinceListing};

use crate::{error::ApiError, AppState};

/// Lists countries ordered by name
pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Country>>, ApiError> {
    Ok(Json(state.reference.list_countries().await?))
}

/// Gets a country by code
pub async fn get_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Country>, ApiError> {
    Ok(Json(state.reference.get_country(&code).await?))
}

/// Creates a country
pub async fn create_country(
    State(state): State<AppState>,
    Json(country): Json<Country>,
) -> Result<(StatusCode, Json<Country>), ApiError> {
    let created = state.reference.create_country(country).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replaces a country
pub async fn update_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(country): Json<Country>,
) -> Result<Json<Country>, ApiError> {
    Ok(Json(state.reference.update_country(&code, country).await?))
}

/// Deletes a country that has no provinces
pub async fn delete_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.reference.delete_country(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists a country's provinces
pub async fn list_provinces(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ProvinceListing>, ApiError> {
    Ok(Json(state.reference.list_provinces(&code).await?))
}
