//! Artists Domain
//!
//! An artist is a name & address record that can be booked, together with
//! the minimum hourly rate it accepts. Artists form groups: a group is an
//! artist whose members are other artists, each membership dated by when
//! the member joined and, once they have gone, when they left.
//!
//! [`ArtistService::memberships`] classifies an artist as a group, an
//! individual with past or present memberships, or neither.

pub mod artist;
pub mod membership;
pub mod error;
pub mod ports;
pub mod service;

pub use artist::{Artist, ArtistListing};
pub use membership::{ArtistRole, GroupMember, MembershipListing, INDIVIDUAL_MESSAGE, UNAFFILIATED_MESSAGE};
pub use error::ArtistError;
pub use ports::{ArtistPort, GroupMemberPort};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockArtistPort;
pub use service::ArtistService;
