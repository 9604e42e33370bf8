//! Tests for the address normalizer against in-memory reference data

use proptest::prelude::*;

use domain_contacts::{AddressField, AddressNormalizer, NameAddress, ValidationFailure};
use domain_reference::{Country, MockReferencePort, Province};
use test_utils::ontario_postal_input_strategy;

async fn reference() -> MockReferencePort {
    MockReferencePort::with_data(
        vec![
            Country::new("CA", "Canada").with_postal_pattern(r"^[A-Z]\d[A-Z] ?\d[A-Z]\d$"),
            Country::new("US", "United States")
                .with_postal_pattern(r"^\d{5}(-\d{4})?$")
                .with_province_terminology("State"),
            Country::new("GB", "United Kingdom"),
        ],
        vec![
            Province::new("ON", "Ontario", "CA").with_first_postal_letters("KLMNP"),
            Province::new("QC", "Quebec", "CA").with_first_postal_letters("GHJ"),
            Province::new("NY", "New York", "US"),
            Province::new("LN", "London", "GB"),
        ],
    )
    .await
}

fn ottawa() -> NameAddress {
    NameAddress {
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        street_address: "24 Sussex Drive".to_string(),
        city: "Ottawa".to_string(),
        postal_code: "K1A0B1".to_string(),
        province_code: "ON".to_string(),
        phone: "6135550100".to_string(),
        ..Default::default()
    }
}

async fn normalize(record: &mut NameAddress) -> Vec<ValidationFailure> {
    let reference = reference().await;
    AddressNormalizer::new(&reference, &reference).normalize(record).await
}

fn failures_on(failures: &[ValidationFailure], field: AddressField) -> usize {
    failures.iter().filter(|f| f.concerns(field)).count()
}

// ============================================================================
// Name Tests
// ============================================================================

mod name_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_names_fail_once_on_all_three_fields() {
        let mut record = NameAddress {
            first_name: "   ".to_string(),
            last_name: String::new(),
            company_name: "\t".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].fields,
            vec![AddressField::FirstName, AddressField::LastName, AddressField::CompanyName]
        );
        assert_eq!(
            failures[0].message,
            "At least one of First Name, Last Name, or Company Name must be specified."
        );
    }

    #[tokio::test]
    async fn test_company_name_alone_is_enough() {
        let mut record = NameAddress {
            first_name: String::new(),
            last_name: String::new(),
            company_name: "the RIDEAU club".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert!(failures.is_empty(), "Unexpected failures: {:?}", failures);
        assert_eq!(record.company_name, "The Rideau Club");
        assert_eq!(record.full_name(), "");
    }

    #[tokio::test]
    async fn test_names_are_title_cased() {
        let mut record = NameAddress {
            first_name: "  john   SMITH  ".to_string(),
            ..ottawa()
        };

        normalize(&mut record).await;

        assert_eq!(record.first_name, "John Smith");
    }
}

// ============================================================================
// Province & Postal Code Tests
// ============================================================================

mod postal_tests {
    use super::*;

    #[tokio::test]
    async fn test_canadian_postal_code_gets_space() {
        let mut record = ottawa();

        let failures = normalize(&mut record).await;

        assert!(failures.is_empty(), "Unexpected failures: {:?}", failures);
        assert_eq!(record.postal_code, "K1A 0B1");
    }

    #[tokio::test]
    async fn test_wrong_first_letter_names_allowed_letters() {
        let mut record = NameAddress {
            postal_code: "Z1A0B1".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].fields, vec![AddressField::PostalCode]);
        assert_eq!(
            failures[0].message,
            "Province Code does not match the Province First Postal Letter. Possible values: KLMNP"
        );
        assert_eq!(record.postal_code, "Z1A0B1");
    }

    #[tokio::test]
    async fn test_postal_code_without_province() {
        let mut record = NameAddress {
            province_code: String::new(),
            postal_code: "not a postal code".to_string(),
            email: "john@example.com".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].fields, vec![AddressField::PostalCode]);
        assert_eq!(failures[0].message, "Province Code is required for Postal Code adjustment.");
        assert_eq!(record.postal_code, "NOT A POSTAL CODE");
    }

    #[tokio::test]
    async fn test_unknown_province() {
        let mut record = NameAddress {
            province_code: "zz".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert_eq!(failures[0].fields, vec![AddressField::ProvinceCode]);
        assert_eq!(failures[0].message, "The given Province Code is not found.");
        assert_eq!(failures_on(&failures, AddressField::PostalCode), 1);
        assert_eq!(record.province_code, "ZZ");
    }

    #[tokio::test]
    async fn test_pattern_mismatch() {
        let mut record = NameAddress {
            postal_code: "1234".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].message,
            "Province Code does not match the Country Postal Pattern."
        );
    }

    #[tokio::test]
    async fn test_us_zip_plus_four() {
        let mut record = NameAddress {
            city: "new york".to_string(),
            postal_code: "10001-1234".to_string(),
            province_code: "ny".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert!(failures.is_empty(), "Unexpected failures: {:?}", failures);
        assert_eq!(record.city, "New York");
        assert_eq!(record.postal_code, "10001-1234");
    }

    #[tokio::test]
    async fn test_country_without_pattern_accepts_anything() {
        let mut record = NameAddress {
            postal_code: "sw1a 1aa".to_string(),
            province_code: "LN".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert!(failures.is_empty(), "Unexpected failures: {:?}", failures);
        assert_eq!(record.postal_code, "SW1A 1AA");
    }
}

// ============================================================================
// Email & Phone Tests
// ============================================================================

mod contact_tests {
    use super::*;

    #[tokio::test]
    async fn test_no_email_with_full_postal_address() {
        let mut record = ottawa();
        let failures = normalize(&mut record).await;
        assert_eq!(failures_on(&failures, AddressField::Email), 0);
    }

    #[tokio::test]
    async fn test_no_email_with_any_postal_field_missing() {
        let variants = [
            NameAddress { street_address: String::new(), ..ottawa() },
            NameAddress { city: " ".to_string(), ..ottawa() },
            NameAddress { postal_code: String::new(), ..ottawa() },
            NameAddress { province_code: String::new(), postal_code: String::new(), ..ottawa() },
        ];

        for mut record in variants {
            let failures = normalize(&mut record).await;
            assert_eq!(failures_on(&failures, AddressField::Email), 1, "Record: {:?}", record);
            let email_failure = failures
                .iter()
                .find(|f| f.concerns(AddressField::Email))
                .map(|f| f.message.as_str());
            assert_eq!(
                email_failure,
                Some("All the postal addressing information is required if Email is not provided.")
            );
        }
    }

    #[tokio::test]
    async fn test_email_replaces_postal_requirement() {
        let mut record = NameAddress {
            street_address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            province_code: String::new(),
            email: "  john@example.com ".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert!(failures.is_empty(), "Unexpected failures: {:?}", failures);
        assert_eq!(record.email, "john@example.com");
    }

    #[tokio::test]
    async fn test_malformed_email() {
        let mut record = NameAddress {
            email: "john.example.com".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].fields, vec![AddressField::Email]);
        assert!(failures[0].message.starts_with("Email is invalid: "));
    }

    #[tokio::test]
    async fn test_phone_formats() {
        for phone in ["(613) 555-0100", "6135550100", "613.555.0100", "613-555-0100"] {
            let mut record = NameAddress {
                phone: phone.to_string(),
                ..ottawa()
            };
            let failures = normalize(&mut record).await;
            assert!(failures.is_empty(), "Unexpected failures for {}: {:?}", phone, failures);
            assert_eq!(record.phone, "613-555-0100");
        }
    }

    #[tokio::test]
    async fn test_phone_wrong_length() {
        let mut record = NameAddress {
            phone: "1 (613) 555-0100".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message, "Phone must be exactly 10 digits.");
        assert_eq!(record.phone, "16135550100");
    }

    #[tokio::test]
    async fn test_failures_are_reported_in_order() {
        let mut record = NameAddress {
            first_name: String::new(),
            last_name: String::new(),
            street_address: String::new(),
            postal_code: "Z1A0B1".to_string(),
            phone: "555".to_string(),
            ..ottawa()
        };

        let failures = normalize(&mut record).await;

        let fields: Vec<AddressField> = failures.iter().map(|f| f.fields[0]).collect();
        assert_eq!(
            fields,
            vec![
                AddressField::FirstName,
                AddressField::PostalCode,
                AddressField::Email,
                AddressField::Phone,
            ]
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

fn run<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

/// Ten digits wrapped in phone-style punctuation
fn punctuated_phone() -> impl Strategy<Value = (String, String)> {
    ("[0-9]{10}", prop::sample::select(vec![0usize, 1, 2, 3])).prop_map(|(digits, style)| {
        let formatted = match style {
            0 => digits.clone(),
            1 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
            2 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
            _ => format!(" {} {} {} ", &digits[..3], &digits[3..6], &digits[6..]),
        };
        (digits, formatted)
    })
}

proptest! {
    #[test]
    fn prop_ontario_postal_codes_normalize_once(postal in ontario_postal_input_strategy()) {
        let (first, first_failures, second, second_failures) = run(async {
            let mut record = NameAddress { postal_code: postal.clone(), ..ottawa() };
            let first_failures = normalize(&mut record).await;
            let first = record.clone();
            let second_failures = normalize(&mut record).await;
            (first, first_failures, record, second_failures)
        });

        prop_assert!(first_failures.is_empty(), "Failures: {:?}", first_failures);
        prop_assert!(second_failures.is_empty());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.postal_code.len(), 7);
        prop_assert_eq!(first.postal_code.matches(' ').count(), 1);
        prop_assert_eq!(first.postal_code.chars().nth(3), Some(' '));
    }

    #[test]
    fn prop_phone_punctuation_is_ignored((digits, phone) in punctuated_phone()) {
        let (record, failures) = run(async {
            let mut record = NameAddress { phone, ..ottawa() };
            let failures = normalize(&mut record).await;
            (record, failures)
        });

        prop_assert!(failures.is_empty());
        prop_assert_eq!(
            record.phone,
            format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
        );
    }

    #[test]
    fn prop_names_normalize_idempotently(
        first in "[ a-zA-ZßéÉñøİıσςΣﬁ]{0,20}",
        last in "[ a-zA-ZßéÉñøİıσςΣﬁ]{0,20}",
    ) {
        let (once, twice) = run(async {
            let mut record = NameAddress { first_name: first, last_name: last, ..ottawa() };
            normalize(&mut record).await;
            let once = record.clone();
            normalize(&mut record).await;
            (once, record)
        });

        prop_assert_eq!(once, twice);
    }
}
