//! Country reference data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{validate_postal_pattern, validate_tax_rate};

/// Code of the one country whose postal codes are written with an inner space
pub const SPACED_POSTAL_COUNTRY: &str = "CA";

/// A country and its postal conventions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Country {
    /// Two-letter country code (primary key)
    #[validate(length(equal = 2, message = "Country Code must be exactly 2 characters."))]
    pub code: String,

    #[validate(length(min = 1, max = 50, message = "Country Name must be 1 to 50 characters."))]
    pub name: String,

    /// Regular expression postal codes must match; empty accepts anything
    #[serde(default)]
    #[validate(custom(function = "validate_postal_pattern"))]
    pub postal_pattern: String,

    #[serde(default)]
    pub phone_pattern: String,

    #[serde(default)]
    #[validate(custom(function = "validate_tax_rate"))]
    pub federal_sales_tax: Decimal,

    /// What the country calls its subdivisions ("Province", "State", ...)
    #[serde(default)]
    pub province_terminology: String,
}

impl Country {
    /// Creates a country with no postal pattern and no federal sales tax
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            postal_pattern: String::new(),
            phone_pattern: String::new(),
            federal_sales_tax: Decimal::ZERO,
            province_terminology: "Province".to_string(),
        }
    }

    pub fn with_postal_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.postal_pattern = pattern.into();
        self
    }

    pub fn with_phone_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.phone_pattern = pattern.into();
        self
    }

    pub fn with_federal_sales_tax(mut self, rate: Decimal) -> Self {
        self.federal_sales_tax = rate;
        self
    }

    pub fn with_province_terminology(mut self, terminology: impl Into<String>) -> Self {
        self.province_terminology = terminology.into();
        self
    }

    /// Returns true when postal codes in this country carry a space after
    /// the third character (e.g. `K1A 0B1`)
    pub fn uses_spaced_postal_codes(&self) -> bool {
        self.code == SPACED_POSTAL_COUNTRY
    }

    /// Trims every field and upper-cases the code
    pub fn normalize(&mut self) {
        self.code = self.code.trim().to_uppercase();
        self.name = self.name.trim().to_string();
        self.postal_pattern = self.postal_pattern.trim().to_string();
        self.phone_pattern = self.phone_pattern.trim().to_string();
        self.province_terminology = self.province_terminology.trim().to_string();
    }
}
