//! Custom Test Assertions
//!
//! Assertion helpers over validation failures that print every failure
//! when they do not hold.

use domain_contacts::{AddressField, ValidationFailure};

/// Asserts that a record produced no validation failures
pub fn assert_no_failures(failures: &[ValidationFailure]) {
    assert!(failures.is_empty(), "Expected no failures, got {:?}", failures);
}

/// Asserts that some failure concerns `field` and its message contains `fragment`
///
/// # Panics
///
/// Panics listing every failure when none matches.
pub fn assert_failure_on(failures: &[ValidationFailure], field: AddressField, fragment: &str) {
    assert!(
        failures
            .iter()
            .any(|f| f.concerns(field) && f.message.contains(fragment)),
        "Expected a failure on {} containing '{}', got {:?}",
        field,
        fragment,
        failures
    );
}

/// Asserts that no failure concerns `field`
pub fn assert_no_failure_on(failures: &[ValidationFailure], field: AddressField) {
    let on_field: Vec<&ValidationFailure> = failures.iter().filter(|f| f.concerns(field)).collect();
    assert!(on_field.is_empty(), "Expected no failure on {}, got {:?}", field, on_field);
}

/// Asserts the exact messages, in order
pub fn assert_failure_messages(failures: &[ValidationFailure], expected: &[&str]) {
    let actual: Vec<&str> = failures.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(actual, expected, "Failure messages differ");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_on_matches_field_and_fragment() {
        let failures = vec![ValidationFailure::field(
            AddressField::Phone,
            "Phone must be exactly 10 digits.",
        )];
        assert_failure_on(&failures, AddressField::Phone, "10 digits");
        assert_no_failure_on(&failures, AddressField::Email);
    }

    #[test]
    #[should_panic(expected = "Expected no failures")]
    fn test_no_failures_panics_on_failure() {
        assert_no_failures(&[ValidationFailure::record("bad")]);
    }
}
