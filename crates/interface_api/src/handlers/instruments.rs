//! Instrument handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::InstrumentId;
use domain_catalog::Instrument;

use crate::{error::ApiError, AppState};

fn parse_id(raw: &str) -> Result<InstrumentId, ApiError> {
    super::parse_id(raw, "instrument")
}

/// Lists instruments ordered by name
pub async fn list_instruments(State(state): State<AppState>) -> Result<Json<Vec<Instrument>>, ApiError> {
    Ok(Json(state.catalog.list_instruments().await?))
}

pub async fn get_instrument(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Instrument>, ApiError> {
    Ok(Json(state.catalog.get_instrument(parse_id(&id)?).await?))
}

pub async fn create_instrument(
    State(state): State<AppState>,
    Json(instrument): Json<Instrument>,
) -> Result<(StatusCode, Json<Instrument>), ApiError> {
    let created = state.catalog.create_instrument(instrument).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Renames an instrument
pub async fn update_instrument(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(instrument): Json<Instrument>,
) -> Result<Json<Instrument>, ApiError> {
    Ok(Json(state.catalog.update_instrument(parse_id(&id)?, instrument).await?))
}

pub async fn delete_instrument(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete_instrument(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
