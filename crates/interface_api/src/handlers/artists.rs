//! Artist and group member handlers
//!
//! Group members live under the group they belong to:
//! `/artists/:id/group-members/:member_id`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::ArtistId;
use domain_artists::{Artist, ArtistListing, GroupMember, MembershipListing};

use crate::dto::artist::GroupMemberRequest;
use crate::{error::ApiError, AppState};

fn parse_id(raw: &str) -> Result<ArtistId, ApiError> {
    super::parse_id(raw, "artist")
}

/// Lists artists ordered by full name
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<ArtistListing>>, ApiError> {
    Ok(Json(state.artists.list().await?))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArtistListing>, ApiError> {
    Ok(Json(state.artists.get(parse_id(&id)?).await?))
}

pub async fn create_artist(
    State(state): State<AppState>,
    Json(artist): Json<Artist>,
) -> Result<(StatusCode, Json<ArtistListing>), ApiError> {
    let created = state.artists.create(artist).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(artist): Json<Artist>,
) -> Result<Json<ArtistListing>, ApiError> {
    Ok(Json(state.artists.update(parse_id(&id)?, artist).await?))
}

pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.artists.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Members of a group, or the groups of an individual, with the artist's role
pub async fn list_group_members(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MembershipListing>, ApiError> {
    Ok(Json(state.artists.memberships(parse_id(&id)?).await?))
}

/// Artists that may join the group, ordered by full name
pub async fn list_candidates(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ArtistListing>>, ApiError> {
    Ok(Json(state.artists.candidates(parse_id(&id)?).await?))
}

pub async fn add_group_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<GroupMemberRequest>,
) -> Result<(StatusCode, Json<GroupMember>), ApiError> {
    let group = parse_id(&id)?;
    let added = state.artists.add_member(group, request.into_membership(group)).await?;
    Ok((StatusCode::CREATED, Json(added)))
}

pub async fn get_group_member(
    State(state): State<AppState>,
    Path((id, member_id)): Path<(String, String)>,
) -> Result<Json<GroupMember>, ApiError> {
    Ok(Json(state.artists.get_member(parse_id(&id)?, parse_id(&member_id)?).await?))
}

/// Changes the dates of a membership
pub async fn update_group_member(
    State(state): State<AppState>,
    Path((id, member_id)): Path<(String, String)>,
    Json(request): Json<GroupMemberRequest>,
) -> Result<Json<GroupMember>, ApiError> {
    let group = parse_id(&id)?;
    let updated = state
        .artists
        .update_member(group, parse_id(&member_id)?, request.into_membership(group))
        .await?;
    Ok(Json(updated))
}

pub async fn remove_group_member(
    State(state): State<AppState>,
    Path((id, member_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.artists.remove_member(parse_id(&id)?, parse_id(&member_id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
