//! Artists domain errors

use thiserror::Error;

use core_kernel::{ArtistId, PortError};

/// Errors that can occur while maintaining artists and group memberships
#[derive(Debug, Error)]
pub enum ArtistError {
    #[error("Artist not found: {0}")]
    ArtistNotFound(ArtistId),

    /// No membership of `member` in `group`
    #[error("Group member not found: {member} in {group}")]
    MemberNotFound { group: ArtistId, member: ArtistId },

    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// The change would contradict stored memberships
    #[error("{0}")]
    Conflict(String),

    /// The underlying store failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl ArtistError {
    pub fn validation(message: impl Into<String>) -> Self {
        ArtistError::ValidationFailed(vec![message.into()])
    }
}
