//! Artist and group maintenance
//!
//! Memberships are always handled within one group: the group comes from
//! the caller's selection, never from the submitted membership, and a
//! membership that names another group is treated as not found.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use core_kernel::{ArtistId, NameAddressId, OperationMetadata, PortError};
use domain_contacts::NameAddressPort;

use crate::artist::{Artist, ArtistListing};
use crate::error::ArtistError;
use crate::membership::{ArtistRole, GroupMember, MembershipListing};
use crate::ports::{ArtistPort, GroupMemberPort};

/// Application service for artists and their group memberships
#[derive(Clone)]
pub struct ArtistService {
    artists: Arc<dyn ArtistPort>,
    members: Arc<dyn GroupMemberPort>,
    contacts: Arc<dyn NameAddressPort>,
}

impl ArtistService {
    pub fn new(
        artists: Arc<dyn ArtistPort>,
        members: Arc<dyn GroupMemberPort>,
        contacts: Arc<dyn NameAddressPort>,
    ) -> Self {
        Self {
            artists,
            members,
            contacts,
        }
    }

    /// Lists every artist ordered by full name
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ArtistListing>, ArtistError> {
        let artists = self.artists.list_artists(None).await?;
        self.with_names(artists).await
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: ArtistId) -> Result<ArtistListing, ArtistError> {
        let artist = self.find(id).await?;
        let full_name = self.full_name(artist.name_address_id).await?;
        Ok(ArtistListing { artist, full_name })
    }

    #[instrument(skip(self, artist))]
    pub async fn create(&self, mut artist: Artist) -> Result<ArtistListing, ArtistError> {
        artist.id = None;
        self.check_artist(&artist).await?;

        let created = self
            .artists
            .create_artist(artist, Some(Self::metadata("create_artist")))
            .await?;
        info!(id = ?created.id, "Artist created");
        self.listing(created).await
    }

    /// Replaces the artist stored under `id`
    ///
    /// An artist carrying a different id is treated as not found.
    #[instrument(skip(self, artist), fields(id = %id))]
    pub async fn update(&self, id: ArtistId, artist: Artist) -> Result<ArtistListing, ArtistError> {
        if artist.id.is_some_and(|own| own != id) {
            return Err(ArtistError::ArtistNotFound(id));
        }
        self.check_artist(&artist).await?;

        let updated = self
            .artists
            .update_artist(id, artist, Some(Self::metadata("update_artist")))
            .await
            .map_err(|e| Self::artist_miss(e, id))?;
        info!("Artist updated");
        self.listing(updated).await
    }

    /// Deletes an artist that is neither a group with members nor a member
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: ArtistId) -> Result<(), ArtistError> {
        self.find(id).await?;
        if !self.members.members_of(id).await?.is_empty() || !self.members.memberships_of(id).await?.is_empty() {
            warn!("Artist with memberships kept");
            return Err(ArtistError::Conflict(
                "The artist still has group memberships on file and cannot be deleted.".to_string(),
            ));
        }

        self.artists
            .delete_artist(id, Some(Self::metadata("delete_artist")))
            .await
            .map_err(|e| Self::artist_miss(e, id))?;
        info!("Artist deleted");
        Ok(())
    }

    /// Classifies an artist and returns the memberships that go with it
    ///
    /// An artist with members is a group and gets its members; otherwise an
    /// artist that belongs or belonged to groups is an individual and gets
    /// those memberships; otherwise it is unaffiliated.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn memberships(&self, id: ArtistId) -> Result<MembershipListing, ArtistError> {
        self.find(id).await?;

        let members = self.members.members_of(id).await?;
        if !members.is_empty() {
            return Ok(MembershipListing::new(id, ArtistRole::Group, members));
        }

        let memberships = self.members.memberships_of(id).await?;
        if !memberships.is_empty() {
            debug!("Artist is an individual");
            return Ok(MembershipListing::new(id, ArtistRole::Individual, memberships));
        }

        debug!("Artist is unaffiliated");
        Ok(MembershipListing::new(id, ArtistRole::Unaffiliated, Vec::new()))
    }

    /// Lists the artists that may join `group`, ordered by full name
    ///
    /// Groups and artists that are currently in any group are left out, as
    /// is the group itself.
    #[instrument(skip(self), fields(group = %group))]
    pub async fn candidates(&self, group: ArtistId) -> Result<Vec<ArtistListing>, ArtistError> {
        self.find(group).await?;

        let memberships = self.members.list_group_members(None).await?;
        let unavailable: HashSet<ArtistId> = memberships
            .iter()
            .flat_map(|m| {
                let current = m.is_current().then_some(m.member_id);
                std::iter::once(m.group_id).chain(current)
            })
            .chain(std::iter::once(group))
            .collect();

        let artists = self
            .artists
            .list_artists(None)
            .await?
            .into_iter()
            .filter(|a| a.id.is_some_and(|id| !unavailable.contains(&id)))
            .collect();
        self.with_names(artists).await
    }

    #[instrument(skip(self), fields(group = %group, member = %member))]
    pub async fn get_member(&self, group: ArtistId, member: ArtistId) -> Result<GroupMember, ArtistError> {
        self.members
            .find_group_member(group, member)
            .await?
            .ok_or(ArtistError::MemberNotFound { group, member })
    }

    /// Adds an artist to `group`
    ///
    /// The member must be an eligible candidate and may not leave before it
    /// joined.
    #[instrument(skip(self, membership), fields(group = %group, member = %membership.member_id))]
    pub async fn add_member(&self, group: ArtistId, mut membership: GroupMember) -> Result<GroupMember, ArtistError> {
        membership.group_id = group;
        self.find(group).await?;
        if membership.member_id == group {
            return Err(ArtistError::validation("A group cannot be a member of itself."));
        }
        self.find(membership.member_id).await?;
        Self::check_dates(&membership)?;

        if self.members.find_group_member(group, membership.member_id).await?.is_some() {
            return Err(ArtistError::Conflict(
                "The artist is already on file as a member of this group.".to_string(),
            ));
        }
        let eligible = self
            .candidates(group)
            .await?
            .iter()
            .any(|c| c.artist.id == Some(membership.member_id));
        if !eligible {
            warn!("Ineligible group member rejected");
            return Err(ArtistError::validation(
                "The artist is a group or is currently a member of another group.",
            ));
        }

        let created = self
            .members
            .create_group_member(membership, Some(Self::metadata("add_member")))
            .await?;
        info!("Group member added");
        Ok(created)
    }

    /// Replaces the dates of `member`'s membership of `group`
    #[instrument(skip(self, membership), fields(group = %group, member = %member))]
    pub async fn update_member(
        &self,
        group: ArtistId,
        member: ArtistId,
        membership: GroupMember,
    ) -> Result<GroupMember, ArtistError> {
        if membership.group_id != group || membership.member_id != member {
            return Err(ArtistError::MemberNotFound { group, member });
        }
        Self::check_dates(&membership)?;

        let updated = self
            .members
            .update_group_member(membership, Some(Self::metadata("update_member")))
            .await
            .map_err(|e| Self::member_miss(e, group, member))?;
        info!("Group member updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(group = %group, member = %member))]
    pub async fn remove_member(&self, group: ArtistId, member: ArtistId) -> Result<(), ArtistError> {
        self.members
            .delete_group_member(group, member, Some(Self::metadata("remove_member")))
            .await
            .map_err(|e| Self::member_miss(e, group, member))?;
        info!("Group member removed");
        Ok(())
    }

    async fn find(&self, id: ArtistId) -> Result<Artist, ArtistError> {
        self.artists
            .get_artist(id, None)
            .await
            .map_err(|e| Self::artist_miss(e, id))
    }

    async fn check_artist(&self, artist: &Artist) -> Result<(), ArtistError> {
        let mut errors = Vec::new();
        if artist.minimum_hourly_rate < Decimal::ZERO {
            errors.push("Minimum Hourly Rate cannot be negative.".to_string());
        }
        if !self.contacts.exists(artist.name_address_id).await? {
            errors.push(format!(
                "Name & address record {} is not on file.",
                artist.name_address_id
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ArtistError::ValidationFailed(errors))
        }
    }

    fn check_dates(membership: &GroupMember) -> Result<(), ArtistError> {
        if membership.left_before_joining() {
            return Err(ArtistError::validation("Date Left cannot be before Date Joined."));
        }
        Ok(())
    }

    async fn full_name(&self, id: NameAddressId) -> Result<String, ArtistError> {
        match self.contacts.get_name_address(id, None).await {
            Ok(record) => Ok(record.full_name()),
            Err(e) if e.is_not_found() => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn listing(&self, artist: Artist) -> Result<ArtistListing, ArtistError> {
        let full_name = self.full_name(artist.name_address_id).await?;
        Ok(ArtistListing { artist, full_name })
    }

    /// Attaches full names and sorts by them
    async fn with_names(&self, artists: Vec<Artist>) -> Result<Vec<ArtistListing>, ArtistError> {
        let names: HashMap<NameAddressId, String> = self
            .contacts
            .list_name_addresses(None)
            .await?
            .into_iter()
            .filter_map(|record| {
                let full_name = record.full_name();
                record.id.map(|id| (id, full_name))
            })
            .collect();

        let mut listings: Vec<ArtistListing> = artists
            .into_iter()
            .map(|artist| ArtistListing {
                full_name: names.get(&artist.name_address_id).cloned().unwrap_or_default(),
                artist,
            })
            .collect();
        listings.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(listings)
    }

    fn artist_miss(error: PortError, id: ArtistId) -> ArtistError {
        if error.is_not_found() {
            ArtistError::ArtistNotFound(id)
        } else {
            ArtistError::Port(error)
        }
    }

    fn member_miss(error: PortError, group: ArtistId, member: ArtistId) -> ArtistError {
        if error.is_not_found() {
            ArtistError::MemberNotFound { group, member }
        } else {
            ArtistError::Port(error)
        }
    }

    fn metadata(operation: &str) -> OperationMetadata {
        OperationMetadata::default().with_context("operation", operation)
    }
}
