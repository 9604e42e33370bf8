//! Contacts Domain
//!
//! Name & address records for the people and companies a club deals with.
//! Every record passes through the [`AddressNormalizer`] before it is stored:
//! names are title-cased, postal codes checked against the country's pattern
//! and the province's first letters, and phones rewritten as `DDD-DDD-DDDD`.
//!
//! # Examples
//!
//! ```rust
//! use domain_contacts::{NameAddress, normalize_fields};
//!
//! let mut record = NameAddress {
//!     first_name: "  john ".to_string(),
//!     last_name: "SMITH".to_string(),
//!     phone: "(613) 555-0100".to_string(),
//!     ..Default::default()
//! };
//! normalize_fields(&mut record);
//!
//! assert_eq!(record.full_name(), "Smith, John");
//! assert_eq!(record.phone, "6135550100");
//! ```

pub mod record;
pub mod email;
pub mod normalizer;
pub mod error;
pub mod ports;
pub mod service;

pub use record::{NameAddress, AddressField, ValidationFailure};
pub use normalizer::{AddressNormalizer, normalize_fields, SPACE_POSITION_POSTAL, PHONE_LENGTH};
pub use error::ContactsError;
pub use ports::NameAddressPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockNameAddressPort;
pub use service::{NameAddressService, MISMATCHED_RECORD};
