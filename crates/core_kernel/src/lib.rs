//! Core Kernel - Foundational types and utilities for the clubs system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed record identifiers
//! - Port error, marker and health types shared by every adapter
//! - String manipulation helpers used when normalizing user-entered data

pub mod identifiers;
pub mod error;
pub mod ports;
pub mod registry;
pub mod text;

pub use identifiers::{ArtistId, InstrumentId, NameAddressId};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
    OperationMetadata,
};
pub use registry::{AdapterSource, RegistryHealthReport};
