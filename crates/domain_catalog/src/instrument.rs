//! Instruments

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::InstrumentId;

/// An instrument an artist can play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Instrument {
    /// Assigned by the store on creation
    #[serde(default)]
    pub id: Option<InstrumentId>,

    #[validate(length(min = 1, max = 50, message = "Instrument Name must be 1 to 50 characters."))]
    pub name: String,
}

impl Instrument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
    }
}
