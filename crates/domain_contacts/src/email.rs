//! Email address checks

use std::str::FromStr;

use lettre::message::Mailbox;

/// Parses `email` as an RFC 5322 mailbox (`user@host` or `Name <user@host>`)
///
/// Returns the parser's reason when the address is rejected.
pub fn check_mailbox(email: &str) -> Result<(), String> {
    Mailbox::from_str(email).map(|_| ()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_address_is_accepted() {
        assert!(check_mailbox("jsmith@example.com").is_ok());
    }

    #[test]
    fn test_named_address_is_accepted() {
        assert!(check_mailbox("John Smith <jsmith@example.com>").is_ok());
    }

    #[test]
    fn test_malformed_addresses_are_rejected() {
        assert!(check_mailbox("jsmith").is_err());
        assert!(check_mailbox("jsmith@").is_err());
        assert!(check_mailbox("@example.com").is_err());
    }
}
