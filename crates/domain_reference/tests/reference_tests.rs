//! Integration tests for domain_reference

use rust_decimal_macros::dec;
use validator::Validate;

use domain_reference::{Country, Province, ReferenceError, ReferenceValidator};

// ============================================================================
// Country Tests
// ============================================================================

mod country_tests {
    use super::*;

    #[test]
    fn test_country_defaults() {
        let country = Country::new("US", "United States");
        assert_eq!(country.province_terminology, "Province");
        assert!(country.postal_pattern.is_empty());
        assert_eq!(country.federal_sales_tax, dec!(0));
    }

    #[test]
    fn test_country_field_limits() {
        let long_name = "N".repeat(51);
        let country = Country::new("US", long_name);
        let errors = country.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_country_deserializes_with_missing_optional_fields() {
        let country: Country =
            serde_json::from_str(r#"{"code":"US","name":"United States"}"#).unwrap();
        assert_eq!(country.code, "US");
        assert!(country.phone_pattern.is_empty());
        assert!(!country.uses_spaced_postal_codes());
    }

    #[test]
    fn test_state_terminology() {
        let usa = Country::new("US", "United States")
            .with_postal_pattern(r"^\d{5}(-\d{4})?$")
            .with_province_terminology("State");
        let result = ReferenceValidator::validate_country(&usa);
        assert!(result.is_valid);
        assert_eq!(usa.province_terminology, "State");
    }
}

// ============================================================================
// Province Tests
// ============================================================================

mod province_tests {
    use super::*;

    #[test]
    fn test_quebec_letters() {
        let quebec = Province::new("QC", "Quebec", "CA")
            .with_first_postal_letters("GHJ")
            .with_sales_tax("QST", dec!(0.09975), false);
        assert!(quebec.allows_first_letter('H'));
        assert!(!quebec.allows_first_letter('K'));
        assert!(!quebec.includes_federal_tax);
    }

    #[test]
    fn test_province_with_three_letter_code_is_invalid() {
        let province = Province::new("ONT", "Ontario", "CA");
        let result = ReferenceValidator::validate_province(&province, None);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["Province Code must be exactly 2 characters.".to_string()]
        );
    }

    #[test]
    fn test_province_letters_with_digits_are_invalid() {
        let province = Province::new("ON", "Ontario", "CA").with_first_postal_letters("K1");
        let result = ReferenceValidator::validate_province(&province, None);
        assert!(!result.is_valid);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;
    use core_kernel::PortError;

    #[test]
    fn test_duplicate_messages() {
        let err = ReferenceError::Duplicate(vec![
            "'ON' is already taken - Province Code must be unique.".to_string(),
            "'Ontario' is already taken - Province Name must be unique.".to_string(),
        ]);
        assert!(matches!(&err, ReferenceError::Duplicate(messages) if messages.len() == 2));
        assert!(err.to_string().starts_with("'ON' is already taken"));
    }

    #[test]
    fn test_port_errors_pass_through() {
        let err: ReferenceError = PortError::not_found("Province", "ZZ").into();
        assert!(matches!(&err, ReferenceError::Port(e) if e.is_not_found()));

        let err: ReferenceError = PortError::connection("pool closed").into();
        assert_eq!(err.to_string(), "Connection error: pool closed");
    }
}
