//! Cross-crate workflows: reference data maintenance feeding record validation

use std::sync::Arc;

use proptest::prelude::*;

use domain_contacts::{AddressField, ContactsError, MockNameAddressPort, NameAddressService};
use domain_reference::{MockReferencePort, Province, ReferenceDataService};
use test_utils::*;

fn services(reference: MockReferencePort) -> (ReferenceDataService, NameAddressService) {
    let reference = Arc::new(reference);
    let records = Arc::new(MockNameAddressPort::new());
    (
        ReferenceDataService::new(reference.clone(), reference.clone()),
        NameAddressService::new(records, reference.clone(), reference),
    )
}

#[tokio::test]
async fn test_new_province_becomes_usable_for_records() {
    let (reference, contacts) = services(seeded_reference_port().await);
    let record = NameAddressBuilder::new()
        .with_postal_code("v6b 1a1")
        .with_province_code("BC")
        .build();

    let err = contacts.create(record.clone()).await.unwrap_err();
    assert_failure_on(err.failures(), AddressField::ProvinceCode, "not found");

    reference
        .create_province(Province::new("bc", "British Columbia", "ca").with_first_postal_letters("V"))
        .await
        .unwrap();

    let created = contacts.create(record).await.unwrap();
    assert_eq!(created.postal_code, "V6B 1A1");
    assert_eq!(created.province_code, "BC");
}

#[tokio::test]
async fn test_changed_first_letters_reject_existing_style_of_address() {
    let (reference, contacts) = services(seeded_reference_port().await);

    let mut ontario = ProvinceFixtures::ontario();
    ontario.first_postal_letters = "P".to_string();
    reference.update_province("ON", ontario).await.unwrap();

    let mut record = NameAddressBuilder::new().build();
    let failures = contacts.validate(&mut record).await;
    assert_failure_messages(
        &failures,
        &["Province Code does not match the Province First Postal Letter. Possible values: P"],
    );
}

#[tokio::test]
async fn test_province_of_unknown_country_fails_on_postal_code() {
    let reference = MockReferencePort::with_data(
        CountryFixtures::all(),
        vec![ProvinceFixtures::ontario(), ProvinceFixtures::orphan()],
    )
    .await;
    let (_, contacts) = services(reference);

    let mut record = NameAddressBuilder::new().with_province_code("XX").build();
    let failures = contacts.validate(&mut record).await;

    assert_failure_on(&failures, AddressField::PostalCode, "'ZZ'");
    assert_no_failure_on(&failures, AddressField::ProvinceCode);
}

#[tokio::test]
async fn test_email_only_company_needs_no_address() {
    let (_, contacts) = services(seeded_reference_port().await);

    let created = contacts.create(NameAddressBuilder::email_only().build()).await.unwrap();
    assert_eq!(created.company_name, "The Blue Note");
    assert_eq!(created.phone, "613-555-0199");
}

#[tokio::test]
async fn test_anonymous_record_without_contact_is_rejected() {
    let (_, contacts) = services(seeded_reference_port().await);

    let err = contacts
        .create(NameAddressBuilder::new().anonymous().with_postal_code("").build())
        .await
        .unwrap_err();

    assert!(matches!(err, ContactsError::Invalid { .. }));
    assert_failure_on(err.failures(), AddressField::CompanyName, "At least one of");
    assert_failure_on(err.failures(), AddressField::Email, "postal addressing information");
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #[test]
    fn test_new_york_accepts_any_zip(zip in zip_code_strategy(), phone in phone_input_strategy()) {
        let (failures, record) = block_on(async {
            let (_, contacts) = services(seeded_reference_port().await);
            let mut record = NameAddressBuilder::new()
                .in_new_york()
                .with_postal_code(zip.clone())
                .with_phone(phone)
                .build();
            let failures = contacts.validate(&mut record).await;
            (failures, record)
        });

        prop_assert!(failures.is_empty(), "{:?}", failures);
        prop_assert_eq!(record.postal_code, zip);
        prop_assert_eq!(record.phone.len(), 12);
    }

    #[test]
    fn test_messy_names_are_title_cased(first in messy_name_strategy(), last in messy_name_strategy()) {
        let (failures, record) = block_on(async {
            let (_, contacts) = services(seeded_reference_port().await);
            let mut record = NameAddressBuilder::new()
                .with_first_name(first)
                .with_last_name(last)
                .build();
            let failures = contacts.validate(&mut record).await;
            (failures, record)
        });

        assert_no_failures(&failures);
        for name in [&record.first_name, &record.last_name] {
            prop_assert!(!name.contains("  "));
            prop_assert!(name.split(' ').all(|w| w.chars().next().is_some_and(|c| c.is_uppercase())));
        }
    }
}
