//! Reference Data Ports
//!
//! Two small read-only lookups (`CountryLookup`, `ProvinceLookup`) are all the
//! address normalizer needs. The maintenance ports (`CountryPort`,
//! `ProvincePort`) extend them with the create/update/delete operations used by
//! `ReferenceDataService`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_reference::{CountryPort, ProvinceLookup};
//!
//! let adapter = Arc::new(PostgresReferenceAdapter::new(pool));
//! let countries: Arc<dyn CountryPort> = adapter.clone();
//! let provinces: Arc<dyn ProvinceLookup> = adapter;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, OperationMetadata, PortError};

use crate::country::Country;
use crate::province::Province;

/// Read access to countries by code
#[async_trait]
pub trait CountryLookup: Send + Sync {
    /// Finds a country by its code
    ///
    /// Returns `Ok(None)` when no such country exists; `Err` is reserved for
    /// faults of the underlying store.
    async fn find_country(&self, code: &str) -> Result<Option<Country>, PortError>;
}

/// Read access to provinces by code
#[async_trait]
pub trait ProvinceLookup: Send + Sync {
    /// Finds a province by its code
    ///
    /// Returns `Ok(None)` when no such province exists; `Err` is reserved for
    /// faults of the underlying store.
    async fn find_province(&self, code: &str) -> Result<Option<Province>, PortError>;
}

/// Maintenance port for countries
#[async_trait]
pub trait CountryPort: CountryLookup + DomainPort + HealthCheckable {
    /// Lists all countries ordered by name
    async fn list_countries(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Country>, PortError>;

    /// Inserts a new country; `PortError::Conflict` if the code is taken
    async fn create_country(
        &self,
        country: Country,
        metadata: Option<OperationMetadata>,
    ) -> Result<Country, PortError>;

    /// Replaces an existing country; `PortError::NotFound` if missing
    async fn update_country(
        &self,
        country: Country,
        metadata: Option<OperationMetadata>,
    ) -> Result<Country, PortError>;

    /// Deletes a country; `PortError::Conflict` while provinces still reference it
    async fn delete_country(
        &self,
        code: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}

/// Maintenance port for provinces
#[async_trait]
pub trait ProvincePort: ProvinceLookup + DomainPort + HealthCheckable {
    /// Lists the provinces of one country ordered by name
    async fn list_provinces(
        &self,
        country_code: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Province>, PortError>;

    /// Finds a province by its (unique) name
    async fn find_province_by_name(
        &self,
        name: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Option<Province>, PortError>;

    /// Inserts a new province; `PortError::Conflict` if the code is taken
    async fn create_province(
        &self,
        province: Province,
        metadata: Option<OperationMetadata>,
    ) -> Result<Province, PortError>;

    /// Replaces an existing province; `PortError::NotFound` if missing
    async fn update_province(
        &self,
        province: Province,
        metadata: Option<OperationMetadata>,
    ) -> Result<Province, PortError>;

    /// Deletes a province; `PortError::NotFound` if missing
    async fn delete_province(
        &self,
        code: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}

/// Mock implementation of the reference data ports for testing
///
/// Countries and provinces live in memory. A lookup fault can be injected to
/// exercise the paths where the store itself fails.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    /// In-memory implementation of every reference data port
    #[derive(Debug, Default, Clone)]
    pub struct MockReferencePort {
        countries: Arc<RwLock<BTreeMap<String, Country>>>,
        provinces: Arc<RwLock<BTreeMap<String, Province>>>,
        lookup_fault: Arc<RwLock<Option<String>>>,
    }

    impl MockReferencePort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the port with reference data
        pub async fn with_data(countries: Vec<Country>, provinces: Vec<Province>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.countries.write().await;
                for country in countries {
                    stored.insert(country.code.clone(), country);
                }
            }
            {
                let mut stored = port.provinces.write().await;
                for province in provinces {
                    stored.insert(province.code.clone(), province);
                }
            }
            port
        }

        /// Makes every subsequent lookup fail with a connection error
        pub async fn fail_lookups_with(&self, message: impl Into<String>) {
            *self.lookup_fault.write().await = Some(message.into());
        }

        async fn check_fault(&self) -> Result<(), PortError> {
            match self.lookup_fault.read().await.as_ref() {
                Some(message) => Err(PortError::connection(message.clone())),
                None => Ok(()),
            }
        }
    }

    impl DomainPort for MockReferencePort {}

    #[async_trait]
    impl HealthCheckable for MockReferencePort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                message: Some("Mock adapter always healthy".to_string()),
                ..HealthCheckResult::healthy("mock-reference-port")
            }
        }
    }

    #[async_trait]
    impl CountryLookup for MockReferencePort {
        async fn find_country(&self, code: &str) -> Result<Option<Country>, PortError> {
            self.check_fault().await?;
            Ok(self.countries.read().await.get(code).cloned())
        }
    }

    #[async_trait]
    impl ProvinceLookup for MockReferencePort {
        async fn find_province(&self, code: &str) -> Result<Option<Province>, PortError> {
            self.check_fault().await?;
            Ok(self.provinces.read().await.get(code).cloned())
        }
    }

    #[async_trait]
    impl CountryPort for MockReferencePort {
        async fn list_countries(
            &self,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<Country>, PortError> {
            let mut countries: Vec<Country> = self.countries.read().await.values().cloned().collect();
            countries.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(countries)
        }

        async fn create_country(
            &self,
            country: Country,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Country, PortError> {
            let mut countries = self.countries.write().await;
            if countries.contains_key(&country.code) {
                return Err(PortError::conflict(format!("Country {} already exists", country.code)));
            }
            countries.insert(country.code.clone(), country.clone());
            Ok(country)
        }

        async fn update_country(
            &self,
            country: Country,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Country, PortError> {
            let mut countries = self.countries.write().await;
            let stored = countries
                .get_mut(&country.code)
                .ok_or_else(|| PortError::not_found("Country", &country.code))?;
            *stored = country.clone();
            Ok(country)
        }

        async fn delete_country(
            &self,
            code: &str,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            let in_use = self
                .provinces
                .read()
                .await
                .values()
                .any(|p| p.country_code == code);
            if in_use {
                return Err(PortError::conflict(format!(
                    "Country {} still has provinces on file",
                    code
                )));
            }
            self.countries
                .write()
                .await
                .remove(code)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Country", code))
        }
    }

    #[async_trait]
    impl ProvincePort for MockReferencePort {
        async fn list_provinces(
            &self,
            country_code: &str,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<Province>, PortError> {
            let mut provinces: Vec<Province> = self
                .provinces
                .read()
                .await
                .values()
                .filter(|p| p.country_code == country_code)
                .cloned()
                .collect();
            provinces.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(provinces)
        }

        async fn find_province_by_name(
            &self,
            name: &str,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Option<Province>, PortError> {
            Ok(self
                .provinces
                .read()
                .await
                .values()
                .find(|p| p.name == name)
                .cloned())
        }

        async fn create_province(
            &self,
            province: Province,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Province, PortError> {
            if !self.countries.read().await.contains_key(&province.country_code) {
                return Err(PortError::conflict(format!(
                    "Country {} is not on file",
                    province.country_code
                )));
            }
            let mut provinces = self.provinces.write().await;
            if provinces.contains_key(&province.code) {
                return Err(PortError::conflict(format!("Province {} already exists", province.code)));
            }
            provinces.insert(province.code.clone(), province.clone());
            Ok(province)
        }

        async fn update_province(
            &self,
            province: Province,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Province, PortError> {
            let mut provinces = self.provinces.write().await;
            let stored = provinces
                .get_mut(&province.code)
                .ok_or_else(|| PortError::not_found("Province", &province.code))?;
            *stored = province.clone();
            Ok(province)
        }

        async fn delete_province(
            &self,
            code: &str,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            self.provinces
                .write()
                .await
                .remove(code)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Province", code))
        }
    }
}
