//! Address record normalization and validation
//!
//! `AddressNormalizer` tidies a `NameAddress` in place and reports every
//! problem it finds in one pass. The record is always left normalized, even
//! when failures are returned, so a form can be redisplayed with the cleaned
//! values.
//!
//! # Order of checks
//!
//! 1. Trim every field; title-case names, street and city; upper-case the
//!    postal and province codes; reduce the phone to its digits
//! 2. At least one of first, last or company name
//! 3. Province code, when given, must be on file
//! 4. Postal code, when given, needs a province on file, must match the
//!    country's postal pattern, and for Canada must start with one of the
//!    province's first postal letters; Canadian codes get a space after the
//!    third character
//! 5. Without an email every postal field is required
//! 6. Phone must be ten digits and is written as `DDD-DDD-DDDD`
//! 7. An email, when given, must parse as a mailbox

use tracing::{debug, instrument, warn};

use core_kernel::text::{extract_digits, format_phone, insert_space_at, postal_code_matches, title_case};
use core_kernel::text::PHONE_DIGITS;
use domain_reference::{Country, CountryLookup, Province, ProvinceLookup};

use crate::email::check_mailbox;
use crate::record::{AddressField, NameAddress, ValidationFailure};

/// Index before which the space is inserted in a spaced postal code
pub const SPACE_POSITION_POSTAL: usize = 3;

/// Number of digits a phone number must have
pub const PHONE_LENGTH: usize = PHONE_DIGITS;

/// Normalizes and validates name & address records against reference data
pub struct AddressNormalizer<'a> {
    provinces: &'a dyn ProvinceLookup,
    countries: &'a dyn CountryLookup,
}

impl<'a> AddressNormalizer<'a> {
    pub fn new(provinces: &'a dyn ProvinceLookup, countries: &'a dyn CountryLookup) -> Self {
        Self { provinces, countries }
    }

    /// Normalizes `record` in place and returns the problems found, in order
    ///
    /// An empty vector means the record is valid.
    #[instrument(skip_all, fields(province_code = %record.province_code.trim()))]
    pub async fn normalize(&self, record: &mut NameAddress) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();

        normalize_fields(record);

        if record.first_name.is_empty() && record.last_name.is_empty() && record.company_name.is_empty() {
            failures.push(ValidationFailure::fields(
                &[AddressField::FirstName, AddressField::LastName, AddressField::CompanyName],
                "At least one of First Name, Last Name, or Company Name must be specified.",
            ));
        }

        let province = self.resolve_province(record, &mut failures).await;

        if !record.postal_code.is_empty() {
            match &province {
                None => failures.push(ValidationFailure::field(
                    AddressField::PostalCode,
                    "Province Code is required for Postal Code adjustment.",
                )),
                Some(province) => {
                    if let Err(failure) = self.check_postal_code(record, province).await {
                        failures.push(failure);
                    }
                }
            }
        }

        if record.email.is_empty()
            && (record.street_address.is_empty()
                || record.city.is_empty()
                || record.postal_code.is_empty()
                || record.province_code.is_empty())
        {
            failures.push(ValidationFailure::field(
                AddressField::Email,
                "All the postal addressing information is required if Email is not provided.",
            ));
        }

        match format_phone(&record.phone) {
            Some(formatted) => record.phone = formatted,
            None => failures.push(ValidationFailure::field(
                AddressField::Phone,
                format!("Phone must be exactly {} digits.", PHONE_LENGTH),
            )),
        }

        if !record.email.is_empty() {
            if let Err(reason) = check_mailbox(&record.email) {
                failures.push(ValidationFailure::field(
                    AddressField::Email,
                    format!("Email is invalid: {}", reason),
                ));
            }
        }

        if !failures.is_empty() {
            debug!(failures = failures.len(), "Record has validation failures");
        }
        failures
    }

    async fn resolve_province(
        &self,
        record: &NameAddress,
        failures: &mut Vec<ValidationFailure>,
    ) -> Option<Province> {
        if record.province_code.is_empty() {
            return None;
        }

        match self.provinces.find_province(&record.province_code).await {
            Ok(Some(province)) => Some(province),
            Ok(None) => {
                debug!(province_code = %record.province_code, "Province not on file");
                failures.push(ValidationFailure::field(
                    AddressField::ProvinceCode,
                    "The given Province Code is not found.",
                ));
                None
            }
            Err(e) => {
                warn!(error = %e, "Province lookup failed");
                failures.push(ValidationFailure::field(AddressField::ProvinceCode, e.base_message()));
                None
            }
        }
    }

    async fn check_postal_code(
        &self,
        record: &mut NameAddress,
        province: &Province,
    ) -> Result<(), ValidationFailure> {
        let country = self.resolve_country(province).await?;

        let matches = postal_code_matches(&record.postal_code, &country.postal_pattern).map_err(|e| {
            warn!(country_code = %country.code, error = %e, "Country postal pattern does not compile");
            ValidationFailure::field(AddressField::PostalCode, e.to_string())
        })?;
        if !matches {
            return Err(ValidationFailure::field(
                AddressField::PostalCode,
                "Province Code does not match the Country Postal Pattern.",
            ));
        }

        if country.uses_spaced_postal_codes() {
            let starts_allowed = record
                .postal_code
                .chars()
                .next()
                .is_some_and(|first| province.allows_first_letter(first));
            if !starts_allowed {
                return Err(ValidationFailure::field(
                    AddressField::PostalCode,
                    format!(
                        "Province Code does not match the Province First Postal Letter. Possible values: {}",
                        province.first_postal_letters
                    ),
                ));
            }
            record.postal_code = insert_space_at(&record.postal_code, SPACE_POSITION_POSTAL);
        }

        Ok(())
    }

    async fn resolve_country(&self, province: &Province) -> Result<Country, ValidationFailure> {
        match self.countries.find_country(&province.country_code).await {
            Ok(Some(country)) => Ok(country),
            Ok(None) => {
                warn!(country_code = %province.country_code, "Province refers to a country not on file");
                Err(ValidationFailure::field(
                    AddressField::PostalCode,
                    format!(
                        "The Country '{}' of the given Province Code is not found.",
                        province.country_code
                    ),
                ))
            }
            Err(e) => {
                warn!(error = %e, "Country lookup failed");
                Err(ValidationFailure::field(AddressField::PostalCode, e.base_message()))
            }
        }
    }
}

/// Applies the field clean-up that precedes validation
///
/// Trims every field, title-cases names, street and city, upper-cases the
/// postal and province codes, and keeps only the digits of the phone.
pub fn normalize_fields(record: &mut NameAddress) {
    record.first_name = title_case(&record.first_name);
    record.last_name = title_case(&record.last_name);
    record.company_name = title_case(&record.company_name);
    record.street_address = title_case(&record.street_address);
    record.city = title_case(&record.city);

    record.postal_code = record.postal_code.trim().to_uppercase();
    record.province_code = record.province_code.trim().to_uppercase();

    record.email = record.email.trim().to_string();
    record.phone = extract_digits(&record.phone);
}
