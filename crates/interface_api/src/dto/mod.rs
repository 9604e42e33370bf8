//! Request and response bodies

pub mod name_address;
pub mod artist;
