//! Name & address records and their validation failures

use std::fmt;

use serde::{Deserialize, Serialize};

use core_kernel::NameAddressId;

/// A contact record: a person or company with a postal address and phone
///
/// Every text field is free text until the record has been through
/// `AddressNormalizer::normalize`; an empty string means the value is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameAddress {
    /// Assigned by the store; `None` until the record is first saved
    pub id: Option<NameAddressId>,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    pub province_code: String,
    pub email: String,
    pub phone: String,
}

impl NameAddress {
    /// Returns the display name
    ///
    /// `"Last, First"` when both names are present, whichever one is present
    /// otherwise, and an empty string when neither is.
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{}, {}", self.last_name, self.first_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// Returns true if the record has been saved
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// A field of a `NameAddress` that a validation failure can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    FirstName,
    LastName,
    CompanyName,
    StreetAddress,
    City,
    PostalCode,
    ProvinceCode,
    Email,
    Phone,
}

impl AddressField {
    /// The label shown next to the field on a form
    pub fn label(&self) -> &'static str {
        match self {
            AddressField::FirstName => "First Name",
            AddressField::LastName => "Last Name",
            AddressField::CompanyName => "Company Name",
            AddressField::StreetAddress => "Street Address",
            AddressField::City => "City",
            AddressField::PostalCode => "Postal Code",
            AddressField::ProvinceCode => "Province Code",
            AddressField::Email => "Email",
            AddressField::Phone => "Phone",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One problem found in a record
///
/// A failure with no fields applies to the record as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub message: String,
    pub fields: Vec<AddressField>,
}

impl ValidationFailure {
    /// Creates a failure tagged to a single field
    pub fn field(field: AddressField, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: vec![field],
        }
    }

    /// Creates a failure tagged to several fields
    pub fn fields(fields: &[AddressField], message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: fields.to_vec(),
        }
    }

    /// Creates a failure that applies to the whole record
    pub fn record(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Returns true if the failure names the given field
    pub fn concerns(&self, field: AddressField) -> bool {
        self.fields.contains(&field)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(first: &str, last: &str) -> NameAddress {
        NameAddress {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(named("John", "Smith").full_name(), "Smith, John");
        assert_eq!(named("John", "").full_name(), "John");
        assert_eq!(named("", "Smith").full_name(), "Smith");
        assert_eq!(named("", "").full_name(), "");
    }

    #[test]
    fn test_field_serializes_camel_case() {
        let json = serde_json::to_string(&AddressField::PostalCode).unwrap();
        assert_eq!(json, "\"postalCode\"");
        assert_eq!(AddressField::ProvinceCode.to_string(), "Province Code");
    }

    #[test]
    fn test_record_level_failure_has_no_fields() {
        let failure = ValidationFailure::record("A record being updated is not the one requested.");
        assert!(failure.fields.is_empty());
        assert!(!failure.concerns(AddressField::Email));
    }
}
