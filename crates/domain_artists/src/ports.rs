//! Artists Domain Ports
//!
//! `ArtistPort` stores artists; `GroupMemberPort` stores memberships, keyed
//! by the pair of group and member. Both are usually implemented by the
//! same adapter.

use async_trait::async_trait;

use core_kernel::{ArtistId, DomainPort, HealthCheckable, OperationMetadata, PortError};

use crate::artist::Artist;
use crate::membership::GroupMember;

/// Storage port for artists
#[async_trait]
pub trait ArtistPort: DomainPort + HealthCheckable {
    /// Lists every artist, in no particular order
    async fn list_artists(&self, metadata: Option<OperationMetadata>) -> Result<Vec<Artist>, PortError>;

    /// Retrieves an artist by id; `PortError::NotFound` if missing
    async fn get_artist(&self, id: ArtistId, metadata: Option<OperationMetadata>) -> Result<Artist, PortError>;

    /// Stores a new artist and returns it with its assigned id
    async fn create_artist(&self, artist: Artist, metadata: Option<OperationMetadata>) -> Result<Artist, PortError>;

    async fn update_artist(
        &self,
        id: ArtistId,
        artist: Artist,
        metadata: Option<OperationMetadata>,
    ) -> Result<Artist, PortError>;

    async fn delete_artist(&self, id: ArtistId, metadata: Option<OperationMetadata>) -> Result<(), PortError>;
}

/// Storage port for group memberships
#[async_trait]
pub trait GroupMemberPort: DomainPort + HealthCheckable {
    /// Lists every membership of every group
    async fn list_group_members(&self, metadata: Option<OperationMetadata>) -> Result<Vec<GroupMember>, PortError>;

    /// Lists the members of `group`
    async fn members_of(&self, group: ArtistId) -> Result<Vec<GroupMember>, PortError>;

    /// Lists the groups `member` belongs or belonged to
    async fn memberships_of(&self, member: ArtistId) -> Result<Vec<GroupMember>, PortError>;

    async fn find_group_member(&self, group: ArtistId, member: ArtistId) -> Result<Option<GroupMember>, PortError>;

    async fn create_group_member(
        &self,
        membership: GroupMember,
        metadata: Option<OperationMetadata>,
    ) -> Result<GroupMember, PortError>;

    /// Replaces the dates of an existing membership
    async fn update_group_member(
        &self,
        membership: GroupMember,
        metadata: Option<OperationMetadata>,
    ) -> Result<GroupMember, PortError>;

    async fn delete_group_member(
        &self,
        group: ArtistId,
        member: ArtistId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}

/// Mock implementation of the artist ports for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    /// In-memory implementation of both artist ports
    ///
    /// Deleting an artist that still appears in a membership is refused,
    /// as the database's foreign keys would.
    #[derive(Debug, Default, Clone)]
    pub struct MockArtistPort {
        artists: Arc<RwLock<BTreeMap<ArtistId, Artist>>>,
        memberships: Arc<RwLock<BTreeMap<(ArtistId, ArtistId), GroupMember>>>,
    }

    impl MockArtistPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the port; artists without an id are given one
        pub async fn with_data(artists: Vec<Artist>, memberships: Vec<GroupMember>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.artists.write().await;
                for mut artist in artists {
                    let id = *artist.id.get_or_insert_with(ArtistId::new_v7);
                    stored.insert(id, artist);
                }
            }
            {
                let mut stored = port.memberships.write().await;
                for membership in memberships {
                    stored.insert((membership.group_id, membership.member_id), membership);
                }
            }
            port
        }

        async fn select(&self, keep: impl Fn(&GroupMember) -> bool) -> Vec<GroupMember> {
            self.memberships
                .read()
                .await
                .values()
                .filter(|m| keep(m))
                .cloned()
                .collect()
        }
    }

    impl DomainPort for MockArtistPort {}

    #[async_trait]
    impl HealthCheckable for MockArtistPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                message: Some("Mock adapter always healthy".to_string()),
                ..HealthCheckResult::healthy("mock-artist-port")
            }
        }
    }

    #[async_trait]
    impl ArtistPort for MockArtistPort {
        async fn list_artists(&self, _metadata: Option<OperationMetadata>) -> Result<Vec<Artist>, PortError> {
            Ok(self.artists.read().await.values().cloned().collect())
        }

        async fn get_artist(&self, id: ArtistId, _metadata: Option<OperationMetadata>) -> Result<Artist, PortError> {
            self.artists
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Artist", id))
        }

        async fn create_artist(
            &self,
            mut artist: Artist,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Artist, PortError> {
            let id = ArtistId::new_v7();
            artist.id = Some(id);
            self.artists.write().await.insert(id, artist.clone());
            Ok(artist)
        }

        async fn update_artist(
            &self,
            id: ArtistId,
            mut artist: Artist,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Artist, PortError> {
            let mut artists = self.artists.write().await;
            let stored = artists.get_mut(&id).ok_or_else(|| PortError::not_found("Artist", id))?;
            artist.id = Some(id);
            *stored = artist.clone();
            Ok(artist)
        }

        async fn delete_artist(&self, id: ArtistId, _metadata: Option<OperationMetadata>) -> Result<(), PortError> {
            let referenced = self
                .memberships
                .read()
                .await
                .keys()
                .any(|(group, member)| *group == id || *member == id);
            if referenced {
                return Err(PortError::conflict(format!("Artist {} is referenced by group_member", id)));
            }
            self.artists
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Artist", id))
        }
    }

    #[async_trait]
    impl GroupMemberPort for MockArtistPort {
        async fn list_group_members(
            &self,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<GroupMember>, PortError> {
            Ok(self.select(|_| true).await)
        }

        async fn members_of(&self, group: ArtistId) -> Result<Vec<GroupMember>, PortError> {
            Ok(self.select(|m| m.group_id == group).await)
        }

        async fn memberships_of(&self, member: ArtistId) -> Result<Vec<GroupMember>, PortError> {
            Ok(self.select(|m| m.member_id == member).await)
        }

        async fn find_group_member(&self, group: ArtistId, member: ArtistId) -> Result<Option<GroupMember>, PortError> {
            Ok(self.memberships.read().await.get(&(group, member)).cloned())
        }

        async fn create_group_member(
            &self,
            membership: GroupMember,
            _metadata: Option<OperationMetadata>,
        ) -> Result<GroupMember, PortError> {
            let key = (membership.group_id, membership.member_id);
            let mut memberships = self.memberships.write().await;
            if memberships.contains_key(&key) {
                return Err(PortError::conflict(format!(
                    "Artist {} is already a member of {}",
                    membership.member_id, membership.group_id
                )));
            }
            memberships.insert(key, membership.clone());
            Ok(membership)
        }

        async fn update_group_member(
            &self,
            membership: GroupMember,
            _metadata: Option<OperationMetadata>,
        ) -> Result<GroupMember, PortError> {
            let mut memberships = self.memberships.write().await;
            let stored = memberships
                .get_mut(&(membership.group_id, membership.member_id))
                .ok_or_else(|| PortError::not_found("GroupMember", membership.member_id))?;
            *stored = membership.clone();
            Ok(membership)
        }

        async fn delete_group_member(
            &self,
            group: ArtistId,
            member: ArtistId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            self.memberships
                .write()
                .await
                .remove(&(group, member))
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("GroupMember", member))
        }
    }
}
