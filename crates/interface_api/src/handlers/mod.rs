//! Request handlers, one module per resource

pub mod health;
pub mod countries;
pub mod provinces;
pub mod name_addresses;
pub mod instruments;
pub mod styles;
pub mod artists;

use std::str::FromStr;

use crate::error::ApiError;

/// Parses a path id, with or without its prefix
pub(crate) fn parse_id<T: FromStr>(raw: &str, kind: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("'{}' is not a valid {} id", raw, kind)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{ArtistId, NameAddressId};

    #[test]
    fn test_parse_id_accepts_prefixed_and_bare() {
        let id = NameAddressId::new();
        assert_eq!(parse_id::<NameAddressId>(&id.to_string(), "name & address").unwrap(), id);
        assert_eq!(parse_id::<NameAddressId>(&id.as_uuid().to_string(), "name & address").unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        match parse_id::<ArtistId>("not-an-id", "artist") {
            Err(ApiError::BadRequest(message)) => assert_eq!(message, "'not-an-id' is not a valid artist id"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }
}
