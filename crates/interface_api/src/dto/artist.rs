//! Group member request body

use chrono::NaiveDate;
use serde::Deserialize;

use core_kernel::ArtistId;
use domain_artists::GroupMember;

/// A membership as submitted; the group defaults to the one in the path
#[derive(Debug, Clone, Deserialize)]
pub struct GroupMemberRequest {
    #[serde(default)]
    pub group_id: Option<ArtistId>,
    pub member_id: ArtistId,
    #[serde(default)]
    pub date_joined: Option<NaiveDate>,
    #[serde(default)]
    pub date_left: Option<NaiveDate>,
}

impl GroupMemberRequest {
    pub fn into_membership(self, group: ArtistId) -> GroupMember {
        GroupMember {
            group_id: self.group_id.unwrap_or(group),
            member_id: self.member_id,
            date_joined: self.date_joined,
            date_left: self.date_left,
        }
    }
}
