//! Reference data validation rules
//!
//! Field-level constraints are declared on the entities with `validator`
//! derives; this module holds the custom field checks and the
//! `ReferenceValidator` that combines them with the cross-field warnings.
//!
//! # Validation Rules
//!
//! ## Countries
//! - Code is exactly 2 characters, name is 1 to 50 characters
//! - Postal pattern, if given, must compile as a regular expression
//! - Federal sales tax cannot be negative
//!
//! ## Provinces
//! - Code and country code are exactly 2 characters
//! - First postal letters are upper-case ASCII letters only
//! - Sales tax cannot be negative

use std::borrow::Cow;

use regex::Regex;
use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::country::Country;
use crate::province::Province;

/// Result of reference data validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the entity is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Adds every message of a `validator` error set, sorted for stable output
    fn add_field_errors(&mut self, errors: &ValidationErrors) {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid ({})", field, e.code),
                })
            })
            .collect();
        messages.sort();
        for message in messages {
            self.add_error(message);
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for countries and provinces
pub struct ReferenceValidator;

impl ReferenceValidator {
    /// Validates a country
    pub fn validate_country(country: &Country) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if let Err(errors) = country.validate() {
            result.add_field_errors(&errors);
        }

        if country.postal_pattern.is_empty() {
            result.add_warning(format!(
                "{} has no postal pattern; any postal code will be accepted",
                country.name
            ));
        }

        result
    }

    /// Validates a province
    ///
    /// # Arguments
    ///
    /// * `province` - The province to validate
    /// * `country` - The province's country, when already resolved
    pub fn validate_province(province: &Province, country: Option<&Country>) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if let Err(errors) = province.validate() {
            result.add_field_errors(&errors);
        }

        if let Some(country) = country {
            if country.code != province.country_code {
                result.add_error(format!(
                    "Province {} belongs to {}, not {}",
                    province.code, province.country_code, country.code
                ));
            }
            if country.uses_spaced_postal_codes() && province.first_postal_letters.is_empty() {
                result.add_warning(format!(
                    "{} has no first postal letters; every postal code will be rejected",
                    province.name
                ));
            }
        }

        result
    }
}

fn field_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

pub(crate) fn validate_postal_pattern(pattern: &str) -> Result<(), ValidationError> {
    if pattern.is_empty() {
        return Ok(());
    }
    Regex::new(pattern)
        .map(|_| ())
        .map_err(|e| field_error("postal_pattern", format!("Postal Pattern is not a valid regular expression: {}", e)))
}

pub(crate) fn validate_tax_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(field_error("tax_rate", format!("Sales tax cannot be negative: {}", rate)));
    }
    Ok(())
}

pub(crate) fn validate_first_postal_letters(letters: &str) -> Result<(), ValidationError> {
    if letters.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(field_error(
            "first_postal_letters",
            format!("First Postal Letters must be upper-case letters only: '{}'", letters),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn canada() -> Country {
        Country::new("CA", "Canada").with_postal_pattern(r"^[A-Z]\d[A-Z] ?\d[A-Z]\d$")
    }

    #[test]
    fn test_valid_country() {
        let result = ReferenceValidator::validate_country(&canada());
        assert!(result.is_valid, "Errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_country_with_bad_code_and_pattern() {
        let country = Country::new("CAN", "Canada").with_postal_pattern("([A-Z");
        let result = ReferenceValidator::validate_country(&country);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors.iter().any(|e| e.contains("exactly 2")));
        assert!(result.errors.iter().any(|e| e.contains("regular expression")));
    }

    #[test]
    fn test_country_without_pattern_warns() {
        let result = ReferenceValidator::validate_country(&Country::new("GB", "United Kingdom"));
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_negative_tax_rejected() {
        let country = canada().with_federal_sales_tax(dec!(-0.05));
        let result = ReferenceValidator::validate_country(&country);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("negative")));
    }

    #[test]
    fn test_valid_province() {
        let ontario = Province::new("ON", "Ontario", "CA")
            .with_first_postal_letters("KLMNP")
            .with_sales_tax("HST", dec!(0.13), true);
        let result = ReferenceValidator::validate_province(&ontario, Some(&canada()));
        assert!(result.is_valid, "Errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_province_with_lowercase_letters() {
        let province = Province::new("ON", "Ontario", "CA").with_first_postal_letters("klm");
        let result = ReferenceValidator::validate_province(&province, None);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("upper-case")));
    }

    #[test]
    fn test_province_of_another_country() {
        let province = Province::new("NY", "New York", "US");
        let result = ReferenceValidator::validate_province(&province, Some(&canada()));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_canadian_province_without_letters_warns() {
        let province = Province::new("NU", "Nunavut", "CA");
        let result = ReferenceValidator::validate_province(&province, Some(&canada()));
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }
}
