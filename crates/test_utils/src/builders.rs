//! Test Data Builders
//!
//! Builds name & address records with sensible defaults so a test only
//! spells out the fields it is about.

use domain_contacts::NameAddress;

/// Builder for name & address records
///
/// The defaults describe a valid Ottawa address in raw, un-normalized form.
pub struct NameAddressBuilder {
    record: NameAddress,
}

impl Default for NameAddressBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NameAddressBuilder {
    /// Creates a builder for a valid Ontario record
    pub fn new() -> Self {
        Self {
            record: NameAddress {
                id: None,
                first_name: "john".to_string(),
                last_name: "SMITH".to_string(),
                company_name: String::new(),
                street_address: "24 sussex drive".to_string(),
                city: "ottawa".to_string(),
                postal_code: "k1a0b1".to_string(),
                province_code: "on".to_string(),
                email: String::new(),
                phone: "(613) 555-0100".to_string(),
            },
        }
    }

    /// Creates a builder for a company reachable by email only
    pub fn email_only() -> Self {
        Self {
            record: NameAddress {
                company_name: "the blue note".to_string(),
                email: "info@bluenote.example".to_string(),
                phone: "613 555 0199".to_string(),
                ..NameAddress::default()
            },
        }
    }

    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.record.first_name = name.into();
        self
    }

    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.record.last_name = name.into();
        self
    }

    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.record.company_name = name.into();
        self
    }

    pub fn with_street_address(mut self, street: impl Into<String>) -> Self {
        self.record.street_address = street.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.record.city = city.into();
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.record.postal_code = postal_code.into();
        self
    }

    pub fn with_province_code(mut self, code: impl Into<String>) -> Self {
        self.record.province_code = code.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.record.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.record.phone = phone.into();
        self
    }

    /// Moves the record to New York
    pub fn in_new_york(self) -> Self {
        self.with_street_address("350 fifth avenue")
            .with_city("new york")
            .with_postal_code("10118")
            .with_province_code("NY")
            .with_phone("212.555.0142")
    }

    /// Clears every name field
    pub fn anonymous(self) -> Self {
        self.with_first_name("").with_last_name("").with_company_name("")
    }

    pub fn build(self) -> NameAddress {
        self.record
    }
}
