//! Pre-built Test Fixtures
//!
//! Reference data shared by the test suites. Canada writes postal codes
//! with an inner space and restricts their first letter per province; the
//! United States uses ZIP codes and no letter restriction. A small catalog
//! of instruments and styles rounds out the data.

use rust_decimal_macros::dec;

use domain_catalog::{Instrument, MockCatalogPort, Style};
use domain_reference::{Country, MockReferencePort, Province};

/// Canadian postal code pattern, inner space optional
pub const CANADA_POSTAL_PATTERN: &str = r"^[A-Z]\d[A-Z] ?\d[A-Z]\d$";

/// ZIP and ZIP+4
pub const US_POSTAL_PATTERN: &str = r"^\d{5}(-\d{4})?$";

/// Fixture for country test data
pub struct CountryFixtures;

impl CountryFixtures {
    pub fn canada() -> Country {
        Country::new("CA", "Canada")
            .with_postal_pattern(CANADA_POSTAL_PATTERN)
            .with_federal_sales_tax(dec!(0.05))
            .with_province_terminology("Province")
    }

    pub fn united_states() -> Country {
        Country::new("US", "United States")
            .with_postal_pattern(US_POSTAL_PATTERN)
            .with_province_terminology("State")
    }

    /// A country whose postal pattern does not compile
    pub fn broken_pattern() -> Country {
        Country::new("BP", "Broken Pattern").with_postal_pattern("([A-Z")
    }

    pub fn all() -> Vec<Country> {
        vec![Self::canada(), Self::united_states()]
    }
}

/// Fixture for province test data
pub struct ProvinceFixtures;

impl ProvinceFixtures {
    /// Postal codes start with K, L, M, N or P
    pub fn ontario() -> Province {
        Province::new("ON", "Ontario", "CA")
            .with_first_postal_letters("KLMNP")
            .with_sales_tax("HST", dec!(0.13), true)
    }

    /// Postal codes start with G, H or J
    pub fn quebec() -> Province {
        Province::new("QC", "Quebec", "CA")
            .with_first_postal_letters("GHJ")
            .with_sales_tax("QST", dec!(0.09975), false)
    }

    pub fn new_york() -> Province {
        Province::new("NY", "New York", "US")
    }

    /// A province whose country is not on file
    pub fn orphan() -> Province {
        Province::new("XX", "Nowhere", "ZZ")
    }

    pub fn all() -> Vec<Province> {
        vec![Self::ontario(), Self::quebec(), Self::new_york()]
    }
}

/// In-memory reference port holding every country and province fixture
pub async fn seeded_reference_port() -> MockReferencePort {
    MockReferencePort::with_data(CountryFixtures::all(), ProvinceFixtures::all()).await
}

pub struct CatalogFixtures;

impl CatalogFixtures {
    pub fn instruments() -> Vec<Instrument> {
        vec![Instrument::new("Drums"), Instrument::new("Guitar"), Instrument::new("Vocals")]
    }

    pub fn styles() -> Vec<Style> {
        vec![
            Style::new("Blues", "Twelve-bar forms"),
            Style::new("Jazz", "Swing and bebop"),
        ]
    }
}

/// In-memory catalog port holding every instrument and style fixture
pub async fn seeded_catalog_port() -> MockCatalogPort {
    MockCatalogPort::with_data(CatalogFixtures::instruments(), CatalogFixtures::styles()).await
}
