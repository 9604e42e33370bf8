//! Catalog Domain
//!
//! The instruments artists play and the musical styles they perform. Both
//! are small lookup tables whose names must be unique.
//!
//! # Examples
//!
//! ```rust
//! use domain_catalog::{Instrument, Style};
//!
//! let mut guitar = Instrument::new("  bass guitar ");
//! guitar.normalize();
//! assert_eq!(guitar.name, "bass guitar");
//!
//! let jazz = Style::new("Jazz", "Swing, bebop and everything after");
//! assert_eq!(jazz.name, "Jazz");
//! ```

pub mod instrument;
pub mod style;
pub mod error;
pub mod ports;
pub mod service;

pub use instrument::Instrument;
pub use style::Style;
pub use error::CatalogError;
pub use ports::{InstrumentPort, StylePort};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockCatalogPort;
pub use service::CatalogService;
