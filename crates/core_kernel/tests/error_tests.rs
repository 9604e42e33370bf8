//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::text::postal_code_matches;
use core_kernel::PortError;

#[test]
fn test_core_error_invalid_pattern_names_the_pattern() {
    let error = postal_code_matches("K1A0B1", "[unclosed").unwrap_err();
    let display = error.to_string();

    assert!(display.contains("Invalid pattern"));
    assert!(display.contains("[unclosed"));
}

#[test]
fn test_core_error_display() {
    let error = CoreError::configuration("missing CLUBS_DATABASE_URL");
    assert!(error.to_string().contains("Configuration error"));
}

#[test]
fn test_port_error_conflict() {
    let error = PortError::conflict("duplicate key");
    assert!(!error.is_not_found());
    assert_eq!(error.to_string(), "Conflict: duplicate key");
}
