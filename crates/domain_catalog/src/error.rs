//! Catalog errors

use thiserror::Error;
use validator::ValidationErrors;

use core_kernel::{InstrumentId, PortError};

/// Errors that can occur while maintaining instruments and styles
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Instrument not found: {0}")]
    InstrumentNotFound(InstrumentId),

    #[error("Style not found: {0}")]
    StyleNotFound(String),

    /// A name is already taken
    #[error("{}", .0.join(" "))]
    Duplicate(Vec<String>),

    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// The underlying store failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl From<ValidationErrors> for CatalogError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid ({})", field, e.code),
                })
            })
            .collect();
        messages.sort();
        CatalogError::ValidationFailed(messages)
    }
}
