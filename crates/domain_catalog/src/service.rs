//! Catalog maintenance
//!
//! `CatalogService` validates instruments and styles and keeps their names
//! unique. A style is addressed by its name, so an update may change only
//! the description.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use validator::Validate;

use core_kernel::{InstrumentId, OperationMetadata, PortError};

use crate::error::CatalogError;
use crate::instrument::Instrument;
use crate::ports::{InstrumentPort, StylePort};
use crate::style::Style;

/// Application service for instruments and styles
#[derive(Clone)]
pub struct CatalogService {
    instruments: Arc<dyn InstrumentPort>,
    styles: Arc<dyn StylePort>,
}

impl CatalogService {
    pub fn new(instruments: Arc<dyn InstrumentPort>, styles: Arc<dyn StylePort>) -> Self {
        Self { instruments, styles }
    }

    /// Lists every instrument ordered by name
    #[instrument(skip(self))]
    pub async fn list_instruments(&self) -> Result<Vec<Instrument>, CatalogError> {
        Ok(self.instruments.list_instruments(None).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_instrument(&self, id: InstrumentId) -> Result<Instrument, CatalogError> {
        self.instruments
            .get_instrument(id, None)
            .await
            .map_err(|e| Self::instrument_miss(e, id))
    }

    #[instrument(skip(self, instrument))]
    pub async fn create_instrument(&self, mut instrument: Instrument) -> Result<Instrument, CatalogError> {
        instrument.id = None;
        instrument.normalize();
        instrument.validate()?;
        self.check_instrument_name(&instrument.name, None).await?;

        let created = self
            .instruments
            .create_instrument(instrument, Some(Self::metadata("create_instrument")))
            .await?;
        info!(id = ?created.id, name = %created.name, "Instrument created");
        Ok(created)
    }

    /// Renames the instrument stored under `id`
    ///
    /// An instrument carrying a different id is treated as not found.
    #[instrument(skip(self, instrument), fields(id = %id))]
    pub async fn update_instrument(
        &self,
        id: InstrumentId,
        mut instrument: Instrument,
    ) -> Result<Instrument, CatalogError> {
        if instrument.id.is_some_and(|own| own != id) {
            return Err(CatalogError::InstrumentNotFound(id));
        }
        instrument.normalize();
        instrument.validate()?;
        self.check_instrument_name(&instrument.name, Some(id)).await?;

        let updated = self
            .instruments
            .update_instrument(id, instrument, Some(Self::metadata("update_instrument")))
            .await
            .map_err(|e| Self::instrument_miss(e, id))?;
        info!(name = %updated.name, "Instrument updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_instrument(&self, id: InstrumentId) -> Result<(), CatalogError> {
        self.instruments
            .delete_instrument(id, Some(Self::metadata("delete_instrument")))
            .await
            .map_err(|e| Self::instrument_miss(e, id))?;
        info!("Instrument deleted");
        Ok(())
    }

    /// Lists every style ordered by name
    #[instrument(skip(self))]
    pub async fn list_styles(&self) -> Result<Vec<Style>, CatalogError> {
        Ok(self.styles.list_styles(None).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_style(&self, name: &str) -> Result<Style, CatalogError> {
        let name = name.trim();
        self.styles
            .find_style(name)
            .await?
            .ok_or_else(|| CatalogError::StyleNotFound(name.to_string()))
    }

    #[instrument(skip(self, style), fields(name = %style.name))]
    pub async fn create_style(&self, mut style: Style) -> Result<Style, CatalogError> {
        style.normalize();
        style.validate()?;

        if self.styles.find_style(&style.name).await?.is_some() {
            warn!(name = %style.name, "Style rejected as duplicate");
            return Err(CatalogError::Duplicate(vec![format!(
                "'{}' is already taken - Style Name must be unique.",
                style.name
            )]));
        }

        let created = self
            .styles
            .create_style(style, Some(Self::metadata("create_style")))
            .await?;
        info!(name = %created.name, "Style created");
        Ok(created)
    }

    /// Replaces the style stored under `name`
    ///
    /// A style whose own name differs from `name` is treated as not found.
    #[instrument(skip(self, style))]
    pub async fn update_style(&self, name: &str, mut style: Style) -> Result<Style, CatalogError> {
        style.normalize();
        let name = name.trim();
        if style.name != name {
            return Err(CatalogError::StyleNotFound(name.to_string()));
        }
        style.validate()?;

        let updated = self
            .styles
            .update_style(style, Some(Self::metadata("update_style")))
            .await
            .map_err(|e| Self::style_miss(e, name))?;
        info!(name = %updated.name, "Style updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_style(&self, name: &str) -> Result<(), CatalogError> {
        let name = name.trim();
        self.styles
            .delete_style(name, Some(Self::metadata("delete_style")))
            .await
            .map_err(|e| Self::style_miss(e, name))?;
        info!(name = %name, "Style deleted");
        Ok(())
    }

    /// Rejects `name` when an instrument other than `keep` already uses it
    async fn check_instrument_name(&self, name: &str, keep: Option<InstrumentId>) -> Result<(), CatalogError> {
        match self.instruments.find_instrument_by_name(name).await? {
            Some(other) if other.id != keep => {
                warn!(name = %name, "Instrument rejected as duplicate");
                Err(CatalogError::Duplicate(vec![format!(
                    "'{}' is already taken - Instrument Name must be unique.",
                    name
                )]))
            }
            _ => Ok(()),
        }
    }

    fn instrument_miss(error: PortError, id: InstrumentId) -> CatalogError {
        if error.is_not_found() {
            CatalogError::InstrumentNotFound(id)
        } else {
            CatalogError::Port(error)
        }
    }

    fn style_miss(error: PortError, name: &str) -> CatalogError {
        if error.is_not_found() {
            CatalogError::StyleNotFound(name.to_string())
        } else {
            CatalogError::Port(error)
        }
    }

    fn metadata(operation: &str) -> OperationMetadata {
        OperationMetadata::default().with_context("operation", operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockCatalogPort;

    async fn service() -> CatalogService {
        let port = Arc::new(
            MockCatalogPort::with_data(
                vec![Instrument::new("Guitar"), Instrument::new("Drums")],
                vec![Style::new("Jazz", "Swing and bebop")],
            )
            .await,
        );
        CatalogService::new(port.clone(), port)
    }

    #[tokio::test]
    async fn test_create_instrument_trims_and_assigns_id() {
        let service = service().await;
        let created = service.create_instrument(Instrument::new("  Cello ")).await.unwrap();

        assert_eq!(created.name, "Cello");
        assert!(created.id.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_instrument_name() {
        let service = service().await;
        let err = service.create_instrument(Instrument::new("Guitar")).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "'Guitar' is already taken - Instrument Name must be unique."
        );
    }

    #[tokio::test]
    async fn test_rename_instrument_to_its_own_name_is_allowed() {
        let service = service().await;
        let guitar = service
            .list_instruments()
            .await
            .unwrap()
            .into_iter()
            .find(|i| i.name == "Guitar")
            .unwrap();
        let id = guitar.id.unwrap();

        let updated = service.update_instrument(id, guitar).await.unwrap();
        assert_eq!(updated.id, Some(id));

        let err = service.update_instrument(id, Instrument::new("Drums")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_update_instrument_with_other_id_is_not_found() {
        let service = service().await;
        let id = InstrumentId::new();
        let instrument = Instrument {
            id: Some(InstrumentId::new()),
            name: "Oboe".to_string(),
        };

        let err = service.update_instrument(id, instrument).await.unwrap_err();
        assert!(matches!(err, CatalogError::InstrumentNotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_blank_instrument_is_rejected() {
        let service = service().await;
        let err = service.create_instrument(Instrument::new(" ")).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::ValidationFailed(messages) if messages == ["Instrument Name must be 1 to 50 characters."]
        ));
    }

    #[tokio::test]
    async fn test_duplicate_style_message() {
        let service = service().await;
        let err = service.create_style(Style::new(" Jazz ", "")).await.unwrap_err();

        assert_eq!(err.to_string(), "'Jazz' is already taken - Style Name must be unique.");
    }

    #[tokio::test]
    async fn test_update_style_under_other_name_is_not_found() {
        let service = service().await;
        let err = service
            .update_style("Jazz", Style::new("Blues", "Twelve bars"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::StyleNotFound(name) if name == "Jazz"));
    }

    #[tokio::test]
    async fn test_update_style_description() {
        let service = service().await;
        service
            .update_style("Jazz", Style::new("Jazz", "Improvised"))
            .await
            .unwrap();

        assert_eq!(service.get_style("Jazz").await.unwrap().description, "Improvised");
    }

    #[tokio::test]
    async fn test_delete_missing_style() {
        let service = service().await;
        let err = service.delete_style("Polka").await.unwrap_err();
        assert!(matches!(err, CatalogError::StyleNotFound(name) if name == "Polka"));
    }
}
