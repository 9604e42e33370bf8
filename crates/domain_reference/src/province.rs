//! Province reference data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{validate_first_postal_letters, validate_tax_rate};

/// A province (or state) within a country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Province {
    /// Two-letter province code (primary key)
    #[validate(length(equal = 2, message = "Province Code must be exactly 2 characters."))]
    pub code: String,

    /// Province name, unique across all provinces
    #[validate(length(min = 1, max = 50, message = "Province Name must be 1 to 50 characters."))]
    pub name: String,

    #[validate(length(equal = 2, message = "Country Code must be exactly 2 characters."))]
    pub country_code: String,

    #[serde(default)]
    pub sales_tax_code: String,

    #[serde(default)]
    #[validate(custom(function = "validate_tax_rate"))]
    pub sales_tax: Decimal,

    #[serde(default)]
    pub includes_federal_tax: bool,

    /// Letters a postal code in this province may start with, e.g. `"KLMNP"`
    #[serde(default)]
    #[validate(custom(function = "validate_first_postal_letters"))]
    pub first_postal_letters: String,
}

impl Province {
    /// Creates a province with no sales tax and no postal letter restriction
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            country_code: country_code.into(),
            sales_tax_code: String::new(),
            sales_tax: Decimal::ZERO,
            includes_federal_tax: false,
            first_postal_letters: String::new(),
        }
    }

    pub fn with_first_postal_letters(mut self, letters: impl Into<String>) -> Self {
        self.first_postal_letters = letters.into();
        self
    }

    pub fn with_sales_tax(mut self, code: impl Into<String>, rate: Decimal, includes_federal: bool) -> Self {
        self.sales_tax_code = code.into();
        self.sales_tax = rate;
        self.includes_federal_tax = includes_federal;
        self
    }

    /// Returns true if a postal code in this province may start with `letter`
    pub fn allows_first_letter(&self, letter: char) -> bool {
        self.first_postal_letters.contains(letter)
    }

    /// Trims every field and upper-cases the codes and postal letters
    pub fn normalize(&mut self) {
        self.code = self.code.trim().to_uppercase();
        self.name = self.name.trim().to_string();
        self.country_code = self.country_code.trim().to_uppercase();
        self.sales_tax_code = self.sales_tax_code.trim().to_uppercase();
        self.first_postal_letters = self.first_postal_letters.trim().to_uppercase();
    }
}
