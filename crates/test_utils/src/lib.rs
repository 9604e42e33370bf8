//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! clubs test suite.
//!
//! # Modules
//!
//! - `fixtures`: Countries, provinces, the catalog, and in-memory ports seeded with them
//! - `builders`: Builder for name & address records
//! - `assertions`: Assertions over validation failures
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
