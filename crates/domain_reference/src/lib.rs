//! Reference Data Domain
//!
//! Countries and provinces are the lookup tables behind every postal
//! address in the clubs system. A country carries the regular expression its
//! postal codes must match; a province names its country and the letters its
//! postal codes may start with.
//!
//! # Examples
//!
//! ```rust
//! use domain_reference::{Country, Province};
//! use rust_decimal_macros::dec;
//!
//! let canada = Country::new("CA", "Canada")
//!     .with_postal_pattern(r"^[A-Z]\d[A-Z] ?\d[A-Z]\d$")
//!     .with_federal_sales_tax(dec!(0.05));
//! assert!(canada.uses_spaced_postal_codes());
//!
//! let ontario = Province::new("ON", "Ontario", "CA").with_first_postal_letters("KLMNP");
//! assert!(ontario.allows_first_letter('K'));
//! assert!(!ontario.allows_first_letter('Z'));
//! ```

pub mod country;
pub mod province;
pub mod error;
pub mod validation;
pub mod ports;
pub mod service;

pub use country::{Country, SPACED_POSTAL_COUNTRY};
pub use province::Province;
pub use error::ReferenceError;
pub use validation::{ReferenceValidator, ValidationResult};
pub use ports::{CountryLookup, ProvinceLookup, CountryPort, ProvincePort};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockReferencePort;
pub use service::{ReferenceDataService, ProvinceListing};
