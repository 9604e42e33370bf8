//! Repository implementations for the clubs tables
//!
//! Repositories own the SQL. They bind parameters at runtime, read rows
//! through `sqlx::FromRow`, and report failures as `DatabaseError`.

pub mod country;
pub mod province;
pub mod name_address;
pub mod instrument;
pub mod style;
pub mod artist;
pub mod group_member;

pub use country::CountryRepository;
pub use province::ProvinceRepository;
pub use name_address::NameAddressRepository;
pub use instrument::InstrumentRepository;
pub use style::StyleRepository;
pub use artist::ArtistRepository;
pub use group_member::GroupMemberRepository;
