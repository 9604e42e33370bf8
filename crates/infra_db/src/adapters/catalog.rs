//! PostgreSQL Catalog Adapter
//!
//! Implements `InstrumentPort` and `StylePort` on top of
//! `InstrumentRepository` and `StyleRepository`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, InstrumentId, OperationMetadata, PortError};
use domain_catalog::{Instrument, InstrumentPort, Style, StylePort};

use crate::adapters::ping;
use crate::repositories::instrument::{InstrumentRepository, InstrumentRow};
use crate::repositories::style::{StyleRepository, StyleRow};

/// PostgreSQL-backed implementation of the catalog ports
#[derive(Debug, Clone)]
pub struct PostgresCatalogAdapter {
    instruments: InstrumentRepository,
    styles: StyleRepository,
    pool: PgPool,
}

impl PostgresCatalogAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            instruments: InstrumentRepository::new(pool.clone()),
            styles: StyleRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresCatalogAdapter {}

#[async_trait]
impl HealthCheckable for PostgresCatalogAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        ping(&self.pool, "postgres-catalog-adapter").await
    }
}

#[async_trait]
impl InstrumentPort for PostgresCatalogAdapter {
    #[instrument(skip(self, _metadata))]
    async fn list_instruments(
        &self,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Instrument>, PortError> {
        let rows = self.instruments.list().await?;
        debug!(count = rows.len(), "Fetched instruments");
        Ok(rows.into_iter().map(row_to_instrument).collect())
    }

    #[instrument(skip(self, _metadata), fields(id = %id))]
    async fn get_instrument(
        &self,
        id: InstrumentId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Instrument, PortError> {
        Ok(row_to_instrument(self.instruments.get(id.into()).await?))
    }

    #[instrument(skip(self))]
    async fn find_instrument_by_name(&self, name: &str) -> Result<Option<Instrument>, PortError> {
        Ok(self.instruments.find_by_name(name).await?.map(row_to_instrument))
    }

    #[instrument(skip(self, instrument, _metadata), fields(name = %instrument.name))]
    async fn create_instrument(
        &self,
        instrument: Instrument,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Instrument, PortError> {
        let row = self.instruments.insert(&instrument.name).await?;
        debug!(id = %row.instrument_id, "Inserted instrument");
        Ok(row_to_instrument(row))
    }

    #[instrument(skip(self, instrument, _metadata), fields(id = %id))]
    async fn update_instrument(
        &self,
        id: InstrumentId,
        instrument: Instrument,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Instrument, PortError> {
        Ok(row_to_instrument(self.instruments.update(id.into(), &instrument.name).await?))
    }

    #[instrument(skip(self, _metadata), fields(id = %id))]
    async fn delete_instrument(
        &self,
        id: InstrumentId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError> {
        self.instruments.delete(id.into()).await?;
        Ok(())
    }
}

#[async_trait]
impl StylePort for PostgresCatalogAdapter {
    #[instrument(skip(self, _metadata))]
    async fn list_styles(&self, _metadata: Option<OperationMetadata>) -> Result<Vec<Style>, PortError> {
        let rows = self.styles.list().await?;
        Ok(rows.into_iter().map(row_to_style).collect())
    }

    #[instrument(skip(self))]
    async fn find_style(&self, name: &str) -> Result<Option<Style>, PortError> {
        Ok(self.styles.find(name).await?.map(row_to_style))
    }

    #[instrument(skip(self, style, _metadata), fields(name = %style.name))]
    async fn create_style(&self, style: Style, _metadata: Option<OperationMetadata>) -> Result<Style, PortError> {
        Ok(row_to_style(self.styles.insert(&style_to_row(style)).await?))
    }

    #[instrument(skip(self, style, _metadata), fields(name = %style.name))]
    async fn update_style(&self, style: Style, _metadata: Option<OperationMetadata>) -> Result<Style, PortError> {
        Ok(row_to_style(self.styles.update(&style_to_row(style)).await?))
    }

    #[instrument(skip(self, _metadata))]
    async fn delete_style(&self, name: &str, _metadata: Option<OperationMetadata>) -> Result<(), PortError> {
        self.styles.delete(name).await?;
        Ok(())
    }
}

fn row_to_instrument(row: InstrumentRow) -> Instrument {
    Instrument {
        id: Some(InstrumentId::from(row.instrument_id)),
        name: row.name,
    }
}

fn row_to_style(row: StyleRow) -> Style {
    Style {
        name: row.style_name,
        description: row.description,
    }
}

fn style_to_row(style: Style) -> StyleRow {
    StyleRow {
        style_name: style.name,
        description: style.description,
    }
}
