//! Data loaded into the in-memory store

use rust_decimal::Decimal;

use domain_catalog::{Instrument, Style};
use domain_reference::{Country, Province};

/// Canada and the United States with a few of their provinces and states
pub fn reference_data() -> (Vec<Country>, Vec<Province>) {
    let countries = vec![
        Country::new("CA", "Canada")
            .with_postal_pattern(r"^[A-Z]\d[A-Z] ?\d[A-Z]\d$")
            .with_phone_pattern(r"^\d{3}-\d{3}-\d{4}$")
            .with_federal_sales_tax(Decimal::new(5, 2))
            .with_province_terminology("Province"),
        Country::new("US", "United States")
            .with_postal_pattern(r"^\d{5}(-\d{4})?$")
            .with_phone_pattern(r"^\d{3}-\d{3}-\d{4}$")
            .with_province_terminology("State"),
    ];

    let provinces = vec![
        Province::new("ON", "Ontario", "CA")
            .with_first_postal_letters("KLMNP")
            .with_sales_tax("HST", Decimal::new(13, 2), true),
        Province::new("QC", "Quebec", "CA")
            .with_first_postal_letters("GHJ")
            .with_sales_tax("QST", Decimal::new(9975, 5), false),
        Province::new("BC", "British Columbia", "CA")
            .with_first_postal_letters("V")
            .with_sales_tax("PST", Decimal::new(7, 2), false),
        Province::new("NY", "New York", "US"),
        Province::new("MI", "Michigan", "US"),
    ];

    (countries, provinces)
}

/// A starter set of instruments and styles
pub fn catalog() -> (Vec<Instrument>, Vec<Style>) {
    let instruments = ["Bass Guitar", "Drums", "Guitar", "Keyboards", "Saxophone", "Vocals"]
        .into_iter()
        .map(Instrument::new)
        .collect();

    let styles = vec![
        Style::new("Blues", "Twelve-bar forms and blue notes"),
        Style::new("Country", "Folk roots, steel guitar and fiddle"),
        Style::new("Jazz", "Swing, bebop and improvisation"),
        Style::new("Rock", "Amplified guitars, bass and drums"),
    ];

    (instruments, styles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_seed_data_is_valid() {
        let (countries, provinces) = reference_data();
        assert!(countries.iter().all(|c| c.validate().is_ok()));
        assert!(provinces.iter().all(|p| p.validate().is_ok()));
        assert!(provinces
            .iter()
            .all(|p| countries.iter().any(|c| c.code == p.country_code)));
    }

    #[test]
    fn test_catalog_names_are_unique_and_valid() {
        let (instruments, styles) = catalog();
        assert!(instruments.iter().all(|i| i.validate().is_ok()));
        assert!(styles.iter().all(|s| s.validate().is_ok()));

        let names: std::collections::HashSet<&str> = instruments.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names.len(), instruments.len());
    }
}
