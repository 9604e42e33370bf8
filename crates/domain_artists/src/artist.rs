//! Artists

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ArtistId, NameAddressId};

/// A bookable performer or group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Assigned by the store on creation
    #[serde(default)]
    pub id: Option<ArtistId>,

    /// The name & address record the artist is known by
    pub name_address_id: NameAddressId,

    #[serde(default)]
    pub minimum_hourly_rate: Decimal,
}

impl Artist {
    pub fn new(name_address_id: NameAddressId, minimum_hourly_rate: Decimal) -> Self {
        Self {
            id: None,
            name_address_id,
            minimum_hourly_rate,
        }
    }
}

/// An artist together with the full name of its name & address record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistListing {
    #[serde(flatten)]
    pub artist: Artist,
    pub full_name: String,
}
