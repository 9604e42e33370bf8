//! Catalog Domain Ports
//!
//! `InstrumentPort` and `StylePort` are what `CatalogService` needs from
//! storage. Uniqueness of names is checked by the service before a write
//! reaches the port.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, InstrumentId, OperationMetadata, PortError};

use crate::instrument::Instrument;
use crate::style::Style;

/// Storage port for instruments
#[async_trait]
pub trait InstrumentPort: DomainPort + HealthCheckable {
    /// Lists every instrument ordered by name
    async fn list_instruments(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Instrument>, PortError>;

    /// Retrieves an instrument by id; `PortError::NotFound` if missing
    async fn get_instrument(
        &self,
        id: InstrumentId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Instrument, PortError>;

    /// Finds an instrument by exact name
    async fn find_instrument_by_name(&self, name: &str) -> Result<Option<Instrument>, PortError>;

    /// Stores a new instrument and returns it with its assigned id
    async fn create_instrument(
        &self,
        instrument: Instrument,
        metadata: Option<OperationMetadata>,
    ) -> Result<Instrument, PortError>;

    /// Renames the instrument stored under `id`
    async fn update_instrument(
        &self,
        id: InstrumentId,
        instrument: Instrument,
        metadata: Option<OperationMetadata>,
    ) -> Result<Instrument, PortError>;

    async fn delete_instrument(
        &self,
        id: InstrumentId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}

/// Storage port for styles, keyed by name
#[async_trait]
pub trait StylePort: DomainPort + HealthCheckable {
    /// Lists every style ordered by name
    async fn list_styles(&self, metadata: Option<OperationMetadata>) -> Result<Vec<Style>, PortError>;

    async fn find_style(&self, name: &str) -> Result<Option<Style>, PortError>;

    async fn create_style(
        &self,
        style: Style,
        metadata: Option<OperationMetadata>,
    ) -> Result<Style, PortError>;

    /// Replaces the description of an existing style
    async fn update_style(
        &self,
        style: Style,
        metadata: Option<OperationMetadata>,
    ) -> Result<Style, PortError>;

    async fn delete_style(&self, name: &str, metadata: Option<OperationMetadata>) -> Result<(), PortError>;
}

/// Mock implementation of the catalog ports for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    /// In-memory implementation of both catalog ports
    #[derive(Debug, Default, Clone)]
    pub struct MockCatalogPort {
        instruments: Arc<RwLock<BTreeMap<InstrumentId, Instrument>>>,
        styles: Arc<RwLock<BTreeMap<String, Style>>>,
    }

    impl MockCatalogPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the port; instruments without an id are given one
        pub async fn with_data(instruments: Vec<Instrument>, styles: Vec<Style>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.instruments.write().await;
                for mut instrument in instruments {
                    let id = *instrument.id.get_or_insert_with(InstrumentId::new_v7);
                    stored.insert(id, instrument);
                }
            }
            {
                let mut stored = port.styles.write().await;
                for style in styles {
                    stored.insert(style.name.clone(), style);
                }
            }
            port
        }
    }

    impl DomainPort for MockCatalogPort {}

    #[async_trait]
    impl HealthCheckable for MockCatalogPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                message: Some("Mock adapter always healthy".to_string()),
                ..HealthCheckResult::healthy("mock-catalog-port")
            }
        }
    }

    #[async_trait]
    impl InstrumentPort for MockCatalogPort {
        async fn list_instruments(
            &self,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<Instrument>, PortError> {
            let mut instruments: Vec<Instrument> = self.instruments.read().await.values().cloned().collect();
            instruments.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(instruments)
        }

        async fn get_instrument(
            &self,
            id: InstrumentId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Instrument, PortError> {
            self.instruments
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Instrument", id))
        }

        async fn find_instrument_by_name(&self, name: &str) -> Result<Option<Instrument>, PortError> {
            Ok(self
                .instruments
                .read()
                .await
                .values()
                .find(|i| i.name == name)
                .cloned())
        }

        async fn create_instrument(
            &self,
            mut instrument: Instrument,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Instrument, PortError> {
            let id = InstrumentId::new_v7();
            instrument.id = Some(id);
            self.instruments.write().await.insert(id, instrument.clone());
            Ok(instrument)
        }

        async fn update_instrument(
            &self,
            id: InstrumentId,
            mut instrument: Instrument,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Instrument, PortError> {
            let mut instruments = self.instruments.write().await;
            let stored = instruments
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Instrument", id))?;
            instrument.id = Some(id);
            *stored = instrument.clone();
            Ok(instrument)
        }

        async fn delete_instrument(
            &self,
            id: InstrumentId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            self.instruments
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Instrument", id))
        }
    }

    #[async_trait]
    impl StylePort for MockCatalogPort {
        async fn list_styles(&self, _metadata: Option<OperationMetadata>) -> Result<Vec<Style>, PortError> {
            Ok(self.styles.read().await.values().cloned().collect())
        }

        async fn find_style(&self, name: &str) -> Result<Option<Style>, PortError> {
            Ok(self.styles.read().await.get(name).cloned())
        }

        async fn create_style(
            &self,
            style: Style,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Style, PortError> {
            let mut styles = self.styles.write().await;
            if styles.contains_key(&style.name) {
                return Err(PortError::conflict(format!("Style {} already exists", style.name)));
            }
            styles.insert(style.name.clone(), style.clone());
            Ok(style)
        }

        async fn update_style(
            &self,
            style: Style,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Style, PortError> {
            let mut styles = self.styles.write().await;
            let stored = styles
                .get_mut(&style.name)
                .ok_or_else(|| PortError::not_found("Style", &style.name))?;
            *stored = style.clone();
            Ok(style)
        }

        async fn delete_style(&self, name: &str, _metadata: Option<OperationMetadata>) -> Result<(), PortError> {
            self.styles
                .write()
                .await
                .remove(name)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Style", name))
        }
    }
}
