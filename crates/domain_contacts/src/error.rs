//! Contacts domain errors

use thiserror::Error;

use core_kernel::{NameAddressId, PortError};

use crate::record::{NameAddress, ValidationFailure};

/// Errors that can occur while maintaining name & address records
#[derive(Debug, Error)]
pub enum ContactsError {
    /// The record failed validation; carries the normalized record for redisplay
    #[error("Invalid name & address record: {}", summarize(.failures))]
    Invalid {
        record: Box<NameAddress>,
        failures: Vec<ValidationFailure>,
    },

    /// No record is stored under the given id
    #[error("NameAddressId is not on file: {0}")]
    NotFound(NameAddressId),

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] PortError),
}

impl ContactsError {
    pub fn invalid(record: NameAddress, failures: Vec<ValidationFailure>) -> Self {
        ContactsError::Invalid {
            record: Box::new(record),
            failures,
        }
    }

    /// Returns the validation failures, if this is a validation error
    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            ContactsError::Invalid { failures, .. } => failures,
            _ => &[],
        }
    }
}

fn summarize(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(|f| f.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
