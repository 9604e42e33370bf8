//! PostgreSQL Name & Address Adapter
//!
//! Implements `NameAddressPort` on top of `NameAddressRepository`. Records
//! arrive already normalized; the adapter only maps them to and from rows.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, NameAddressId, OperationMetadata, PortError};
use domain_contacts::{NameAddress, NameAddressPort};

use crate::adapters::ping;
use crate::repositories::name_address::{NameAddressRepository, NameAddressRow, NameAddressValues};

/// PostgreSQL-backed implementation of `NameAddressPort`
#[derive(Debug, Clone)]
pub struct PostgresNameAddressAdapter {
    repository: NameAddressRepository,
    pool: PgPool,
}

impl PostgresNameAddressAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: NameAddressRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresNameAddressAdapter {}

#[async_trait]
impl HealthCheckable for PostgresNameAddressAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        ping(&self.pool, "postgres-name-address-adapter").await
    }
}

#[async_trait]
impl NameAddressPort for PostgresNameAddressAdapter {
    #[instrument(skip(self, _metadata))]
    async fn list_name_addresses(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<NameAddress>, PortError> {
        let rows = self.repository.list().await?;
        debug!(count = rows.len(), "Fetched name & address records");
        Ok(rows.into_iter().map(row_to_record).collect())
    }

    #[instrument(skip(self, _metadata), fields(id = %id))]
    async fn get_name_address(
        &self,
        id: NameAddressId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<NameAddress, PortError> {
        let row = self.repository.get(id.into()).await?;
        Ok(row_to_record(row))
    }

    #[instrument(skip(self, record, _metadata))]
    async fn create_name_address(
        &self,
        record: NameAddress,
        _metadata: Option<OperationMetadata>,
    ) -> Result<NameAddress, PortError> {
        let row = self.repository.insert(&record_to_values(record)).await?;
        debug!(id = %row.name_address_id, "Inserted name & address record");
        Ok(row_to_record(row))
    }

    #[instrument(skip(self, record, _metadata), fields(id = %id))]
    async fn update_name_address(
        &self,
        id: NameAddressId,
        record: NameAddress,
        _metadata: Option<OperationMetadata>,
    ) -> Result<NameAddress, PortError> {
        let row = self.repository.update(id.into(), &record_to_values(record)).await?;
        Ok(row_to_record(row))
    }

    #[instrument(skip(self, _metadata), fields(id = %id))]
    async fn delete_name_address(
        &self,
        id: NameAddressId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        self.repository.delete(id.into()).await?;
        Ok(())
    }
}

fn row_to_record(row: NameAddressRow) -> NameAddress {
    NameAddress {
        id: Some(NameAddressId::from(row.name_address_id)),
        first_name: row.first_name,
        last_name: row.last_name,
        company_name: row.company_name,
        street_address: row.street_address,
        city: row.city,
        postal_code: row.postal_code,
        province_code: row.province_code.unwrap_or_default(),
        email: row.email,
        phone: row.phone,
    }
}

fn record_to_values(record: NameAddress) -> NameAddressValues {
    NameAddressValues {
        first_name: record.first_name,
        last_name: record.last_name,
        company_name: record.company_name,
        street_address: record.street_address,
        city: record.city,
        postal_code: record.postal_code,
        province_code: Some(record.province_code).filter(|code| !code.is_empty()),
        email: record.email,
        phone: record.phone,
    }
}
