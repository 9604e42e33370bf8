//! Group memberships

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::ArtistId;

/// Shown for an artist that only ever belonged to groups
pub const INDIVIDUAL_MESSAGE: &str =
    "The artist is an individual, not a group. These are their historic group memberships.";

/// Shown for an artist with no memberships of either kind
pub const UNAFFILIATED_MESSAGE: &str =
    "The artist is neither a group nor a group member. Please make them a new group.";

/// One artist's membership of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub group_id: ArtistId,
    pub member_id: ArtistId,
    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
    /// Unset while the member is still in the group
    #[serde(default)]
    pub date_left: Option<NaiveDate>,
}

impl GroupMember {
    pub fn new(group_id: ArtistId, member_id: ArtistId) -> Self {
        Self {
            group_id,
            member_id,
            date_joined: None,
            date_left: None,
        }
    }

    pub fn joined(mut self, date: NaiveDate) -> Self {
        self.date_joined = Some(date);
        self
    }

    pub fn left(mut self, date: NaiveDate) -> Self {
        self.date_left = Some(date);
        self
    }

    /// Returns true while the member has not left
    pub fn is_current(&self) -> bool {
        self.date_left.is_none()
    }

    /// Returns true when both dates are set and the member left before joining
    pub fn left_before_joining(&self) -> bool {
        matches!((self.date_joined, self.date_left), (Some(joined), Some(left)) if left < joined)
    }
}

/// Orders memberships by date left, then date joined; unset dates first
pub fn sort_memberships(memberships: &mut [GroupMember]) {
    memberships.sort_by_key(|m| (m.date_left, m.date_joined));
}

/// How an artist takes part in groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtistRole {
    /// Other artists are members of this one
    Group,
    /// This artist is or was a member of groups
    Individual,
    Unaffiliated,
}

impl ArtistRole {
    /// Message to show alongside the memberships, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ArtistRole::Group => None,
            ArtistRole::Individual => Some(INDIVIDUAL_MESSAGE),
            ArtistRole::Unaffiliated => Some(UNAFFILIATED_MESSAGE),
        }
    }
}

/// The memberships relevant to one artist
///
/// For a group these are its members; for an individual, the groups it
/// belonged to; for an unaffiliated artist, nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipListing {
    pub artist_id: ArtistId,
    pub role: ArtistRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub memberships: Vec<GroupMember>,
}

impl MembershipListing {
    pub fn new(artist_id: ArtistId, role: ArtistRole, mut memberships: Vec<GroupMember>) -> Self {
        sort_memberships(&mut memberships);
        Self {
            artist_id,
            role,
            message: role.message(),
            memberships,
        }
    }
}
