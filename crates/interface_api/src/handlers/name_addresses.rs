//! Name & address handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::NameAddressId;

use crate::dto::name_address::{NameAddressRequest, NameAddressResponse};
use crate::{error::ApiError, AppState};

fn parse_id(raw: &str) -> Result<NameAddressId, ApiError> {
    super::parse_id(raw, "name & address")
}

/// Lists records ordered by full name
pub async fn list_name_addresses(
    State(state): State<AppState>,
) -> Result<Json<Vec<NameAddressResponse>>, ApiError> {
    let records = state.contacts.list().await?;
    Ok(Json(records.into_iter().map(NameAddressResponse::from).collect()))
}

pub async fn get_name_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NameAddressResponse>, ApiError> {
    let record = state.contacts.get(parse_id(&id)?).await?;
    Ok(Json(record.into()))
}

/// Normalizes, validates and stores a new record
pub async fn create_name_address(
    State(state): State<AppState>,
    Json(request): Json<NameAddressRequest>,
) -> Result<(StatusCode, Json<NameAddressResponse>), ApiError> {
    let created = state.contacts.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Normalizes, validates and replaces an existing record
pub async fn update_name_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<NameAddressRequest>,
) -> Result<Json<NameAddressResponse>, ApiError> {
    let updated = state.contacts.update(parse_id(&id)?, request.into()).await?;
    Ok(Json(updated.into()))
}

pub async fn delete_name_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.contacts.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
