//! PostgreSQL Artist Adapter
//!
//! Implements `ArtistPort` and `GroupMemberPort` on top of
//! `ArtistRepository` and `GroupMemberRepository`. Deleting an artist that
//! a membership still names fails on the foreign key and surfaces as a
//! conflict.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ArtistId, DomainPort, HealthCheckResult, HealthCheckable, NameAddressId, OperationMetadata, PortError};
use domain_artists::{Artist, ArtistPort, GroupMember, GroupMemberPort};

use crate::adapters::ping;
use crate::repositories::artist::{ArtistRepository, ArtistRow};
use crate::repositories::group_member::{GroupMemberRepository, GroupMemberRow};

/// PostgreSQL-backed implementation of the artist ports
#[derive(Debug, Clone)]
pub struct PostgresArtistAdapter {
    artists: ArtistRepository,
    members: GroupMemberRepository,
    pool: PgPool,
}

impl PostgresArtistAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            artists: ArtistRepository::new(pool.clone()),
            members: GroupMemberRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresArtistAdapter {}

#[async_trait]
impl HealthCheckable for PostgresArtistAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        ping(&self.pool, "postgres-artist-adapter").await
    }
}

#[async_trait]
impl ArtistPort for PostgresArtistAdapter {
    #[instrument(skip(self, _metadata))]
    async fn list_artists(&self, _metadata: Option<OperationMetadata>) -> Result<Vec<Artist>, PortError> {
        let rows = self.artists.list().await?;
        debug!(count = rows.len(), "Fetched artists");
        Ok(rows.into_iter().map(row_to_artist).collect())
    }

    #[instrument(skip(self, _metadata), fields(id = %id))]
    async fn get_artist(&self, id: ArtistId, _metadata: Option<OperationMetadata>) -> Result<Artist, PortError> {
        Ok(row_to_artist(self.artists.get(id.into()).await?))
    }

    #[instrument(skip(self, artist, _metadata))]
    async fn create_artist(&self, artist: Artist, _metadata: Option<OperationMetadata>) -> Result<Artist, PortError> {
        let row = self
            .artists
            .insert(artist.name_address_id.into(), artist.minimum_hourly_rate)
            .await?;
        debug!(id = %row.artist_id, "Inserted artist");
        Ok(row_to_artist(row))
    }

    #[instrument(skip(self, artist, _metadata), fields(id = %id))]
    async fn update_artist(
        &self,
        id: ArtistId,
        artist: Artist,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Artist, PortError> {
        let row = ArtistRow {
            artist_id: id.into(),
            name_address_id: artist.name_address_id.into(),
            minimum_hourly_rate: artist.minimum_hourly_rate,
        };
        Ok(row_to_artist(self.artists.update(&row).await?))
    }

    #[instrument(skip(self, _metadata), fields(id = %id))]
    async fn delete_artist(&self, id: ArtistId, _metadata: Option<OperationMetadata>) -> Result<(), PortError> {
        self.artists.delete(id.into()).await?;
        Ok(())
    }
}

#[async_trait]
impl GroupMemberPort for PostgresArtistAdapter {
    #[instrument(skip(self, _metadata))]
    async fn list_group_members(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<GroupMember>, PortError> {
        Ok(self.members.list().await?.into_iter().map(row_to_member).collect())
    }

    #[instrument(skip(self), fields(group = %group))]
    async fn members_of(&self, group: ArtistId) -> Result<Vec<GroupMember>, PortError> {
        let rows = self.members.list_by_group(group.into()).await?;
        Ok(rows.into_iter().map(row_to_member).collect())
    }

    #[instrument(skip(self), fields(member = %member))]
    async fn memberships_of(&self, member: ArtistId) -> Result<Vec<GroupMember>, PortError> {
        let rows = self.members.list_by_member(member.into()).await?;
        Ok(rows.into_iter().map(row_to_member).collect())
    }

    #[instrument(skip(self), fields(group = %group, member = %member))]
    async fn find_group_member(&self, group: ArtistId, member: ArtistId) -> Result<Option<GroupMember>, PortError> {
        Ok(self.members.find(group.into(), member.into()).await?.map(row_to_member))
    }

    #[instrument(skip(self, membership, _metadata))]
    async fn create_group_member(
        &self,
        membership: GroupMember,
        _metadata: Option<OperationMetadata>,
    ) -> Result<GroupMember, PortError> {
        Ok(row_to_member(self.members.insert(&member_to_row(membership)).await?))
    }

    #[instrument(skip(self, membership, _metadata))]
    async fn update_group_member(
        &self,
        membership: GroupMember,
        _metadata: Option<OperationMetadata>,
    ) -> Result<GroupMember, PortError> {
        Ok(row_to_member(self.members.update(&member_to_row(membership)).await?))
    }

    #[instrument(skip(self, _metadata), fields(group = %group, member = %member))]
    async fn delete_group_member(
        &self,
        group: ArtistId,
        member: ArtistId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        self.members.delete(group.into(), member.into()).await?;
        Ok(())
    }
}

fn row_to_artist(row: ArtistRow) -> Artist {
    Artist {
        id: Some(ArtistId::from(row.artist_id)),
        name_address_id: NameAddressId::from(row.name_address_id),
        minimum_hourly_rate: row.minimum_hourly_rate,
    }
}

fn row_to_member(row: GroupMemberRow) -> GroupMember {
    GroupMember {
        group_id: ArtistId::from(row.artist_id_group),
        member_id: ArtistId::from(row.artist_id_member),
        date_joined: row.date_joined,
        date_left: row.date_left,
    }
}

fn member_to_row(membership: GroupMember) -> GroupMemberRow {
    GroupMemberRow {
        artist_id_group: membership.group_id.into(),
        artist_id_member: membership.member_id.into(),
        date_joined: membership.date_joined,
        date_left: membership.date_left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    #[test]
    fn test_row_to_artist() {
        let (id, contact) = (Uuid::now_v7(), Uuid::now_v7());
        let artist = row_to_artist(ArtistRow {
            artist_id: id,
            name_address_id: contact,
            minimum_hourly_rate: Decimal::new(12550, 2),
        });

        assert_eq!(artist.id, Some(ArtistId::from(id)));
        assert_eq!(artist.name_address_id, NameAddressId::from(contact));
        assert_eq!(artist.minimum_hourly_rate.to_string(), "125.50");
    }

    #[test]
    fn test_membership_keeps_open_date_left() {
        let membership = GroupMember::new(ArtistId::new(), ArtistId::new())
            .joined(NaiveDate::from_ymd_opt(1999, 3, 1).unwrap());
        let row = member_to_row(membership.clone());

        assert_eq!(row.date_left, None);
        assert_eq!(row_to_member(row), membership);
    }
}
