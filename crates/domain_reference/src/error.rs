//! Reference data errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur while maintaining countries and provinces
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Country with the given code was not found
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    /// Province with the given code was not found
    #[error("Province not found: {0}")]
    ProvinceNotFound(String),

    /// Provinces were requested without a known country
    #[error("Please select a country to retrieve its provinces")]
    NoCountrySelected,

    /// A code or name is already taken
    #[error("{}", .0.join(" "))]
    Duplicate(Vec<String>),

    /// Field validation failed
    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// The underlying store failed
    #[error(transparent)]
    Port(#[from] PortError),
}

