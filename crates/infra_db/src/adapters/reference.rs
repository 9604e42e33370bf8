//! PostgreSQL Reference Data Adapter
//!
//! Implements the country and province ports (and the read-only lookups the
//! address normalizer uses) on top of `CountryRepository` and
//! `ProvinceRepository`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_db::adapters::PostgresReferenceAdapter;
//! use domain_reference::{CountryPort, ProvincePort};
//!
//! let adapter = Arc::new(PostgresReferenceAdapter::new(pool));
//! let countries: Arc<dyn CountryPort> = adapter.clone();
//! let provinces: Arc<dyn ProvincePort> = adapter;
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError};
use domain_reference::{Country, CountryLookup, CountryPort, Province, ProvinceLookup, ProvincePort};

use crate::adapters::ping;
use crate::repositories::country::{CountryRepository, CountryRow};
use crate::repositories::province::{ProvinceRepository, ProvinceRow};

/// PostgreSQL-backed implementation of the reference data ports
#[derive(Debug, Clone)]
pub struct PostgresReferenceAdapter {
    countries: CountryRepository,
    provinces: ProvinceRepository,
    pool: PgPool,
}

impl PostgresReferenceAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            countries: CountryRepository::new(pool.clone()),
            provinces: ProvinceRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresReferenceAdapter {}

#[async_trait]
impl HealthCheckable for PostgresReferenceAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        ping(&self.pool, "postgres-reference-adapter").await
    }
}

#[async_trait]
impl CountryLookup for PostgresReferenceAdapter {
    #[instrument(skip(self))]
    async fn find_country(&self, code: &str) -> Result<Option<Country>, PortError> {
        debug!("Looking up country");
        let row = self.countries.find(code).await?;
        Ok(row.map(row_to_country))
    }
}

#[async_trait]
impl ProvinceLookup for PostgresReferenceAdapter {
    #[instrument(skip(self))]
    async fn find_province(&self, code: &str) -> Result<Option<Province>, PortError> {
        debug!("Looking up province");
        let row = self.provinces.find(code).await?;
        Ok(row.map(row_to_province))
    }
}

#[async_trait]
impl CountryPort for PostgresReferenceAdapter {
    #[instrument(skip(self, _metadata))]
    async fn list_countries(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Country>, PortError> {
        let rows = self.countries.list().await?;
        Ok(rows.into_iter().map(row_to_country).collect())
    }

    #[instrument(skip(self, country, _metadata), fields(code = %country.code))]
    async fn create_country(
        &self,
        country: Country,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Country, PortError> {
        let row = self.countries.insert(&country_to_row(country)).await?;
        Ok(row_to_country(row))
    }

    #[instrument(skip(self, country, _metadata), fields(code = %country.code))]
    async fn update_country(
        &self,
        country: Country,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Country, PortError> {
        let row = self.countries.update(&country_to_row(country)).await?;
        Ok(row_to_country(row))
    }

    #[instrument(skip(self, _metadata))]
    async fn delete_country(
        &self,
        code: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        self.countries.delete(code).await?;
        Ok(())
    }
}

#[async_trait]
impl ProvincePort for PostgresReferenceAdapter {
    #[instrument(skip(self, _metadata))]
    async fn list_provinces(
        &self,
        country_code: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Province>, PortError> {
        let rows = self.provinces.list_by_country(country_code).await?;
        Ok(rows.into_iter().map(row_to_province).collect())
    }

    #[instrument(skip(self, _metadata))]
    async fn find_province_by_name(
        &self,
        name: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Option<Province>, PortError> {
        let row = self.provinces.find_by_name(name).await?;
        Ok(row.map(row_to_province))
    }

    #[instrument(skip(self, province, _metadata), fields(code = %province.code))]
    async fn create_province(
        &self,
        province: Province,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Province, PortError> {
        let row = self.provinces.insert(&province_to_row(province)).await?;
        Ok(row_to_province(row))
    }

    #[instrument(skip(self, province, _metadata), fields(code = %province.code))]
    async fn update_province(
        &self,
        province: Province,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Province, PortError> {
        let row = self.provinces.update(&province_to_row(province)).await?;
        Ok(row_to_province(row))
    }

    #[instrument(skip(self, _metadata))]
    async fn delete_province(
        &self,
        code: &str,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        self.provinces.delete(code).await?;
        Ok(())
    }
}

fn row_to_country(row: CountryRow) -> Country {
    Country {
        code: row.country_code,
        name: row.name,
        postal_pattern: row.postal_pattern,
        phone_pattern: row.phone_pattern,
        federal_sales_tax: row.federal_sales_tax,
        province_terminology: row.province_terminology,
    }
}

fn country_to_row(country: Country) -> CountryRow {
    CountryRow {
        country_code: country.code,
        name: country.name,
        postal_pattern: country.postal_pattern,
        phone_pattern: country.phone_pattern,
        federal_sales_tax: country.federal_sales_tax,
        province_terminology: country.province_terminology,
    }
}

fn row_to_province(row: ProvinceRow) -> Province {
    Province {
        code: row.province_code,
        name: row.name,
        country_code: row.country_code,
        sales_tax_code: row.sales_tax_code,
        sales_tax: row.sales_tax,
        includes_federal_tax: row.includes_federal_tax,
        first_postal_letters: row.first_postal_letters,
    }
}

fn province_to_row(province: Province) -> ProvinceRow {
    ProvinceRow {
        province_code: province.code,
        name: province.name,
        country_code: province.country_code,
        sales_tax_code: province.sales_tax_code,
        sales_tax: province.sales_tax,
        includes_federal_tax: province.includes_federal_tax,
        first_postal_letters: province.first_postal_letters,
    }
}
