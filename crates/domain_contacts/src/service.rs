//! Name & address maintenance
//!
//! Every record is normalized and validated immediately before it is
//! committed. A rejected record comes back normalized together with its
//! failures so the caller can redisplay it.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use core_kernel::{NameAddressId, OperationMetadata, PortError};
use domain_reference::{CountryLookup, ProvinceLookup};

use crate::error::ContactsError;
use crate::normalizer::AddressNormalizer;
use crate::ports::NameAddressPort;
use crate::record::{NameAddress, ValidationFailure};

/// Message for an update whose record id differs from the one requested
pub const MISMATCHED_RECORD: &str = "A record being updated is not the one requested.";

/// Application service for name & address records
#[derive(Clone)]
pub struct NameAddressService {
    records: Arc<dyn NameAddressPort>,
    provinces: Arc<dyn ProvinceLookup>,
    countries: Arc<dyn CountryLookup>,
}

impl NameAddressService {
    pub fn new(
        records: Arc<dyn NameAddressPort>,
        provinces: Arc<dyn ProvinceLookup>,
        countries: Arc<dyn CountryLookup>,
    ) -> Self {
        Self {
            records,
            provinces,
            countries,
        }
    }

    fn normalizer(&self) -> AddressNormalizer<'_> {
        AddressNormalizer::new(self.provinces.as_ref(), self.countries.as_ref())
    }

    /// Normalizes and validates a record without storing it
    pub async fn validate(&self, record: &mut NameAddress) -> Vec<ValidationFailure> {
        self.normalizer().normalize(record).await
    }

    /// Lists every record ordered by full name
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<NameAddress>, ContactsError> {
        let mut records = self.records.list_name_addresses(None).await?;
        records.sort_by_cached_key(|r| r.full_name());
        Ok(records)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: NameAddressId) -> Result<NameAddress, ContactsError> {
        self.records
            .get_name_address(id, None)
            .await
            .map_err(|e| Self::miss(e, id))
    }

    /// Validates and stores a new record
    #[instrument(skip(self, record))]
    pub async fn create(&self, mut record: NameAddress) -> Result<NameAddress, ContactsError> {
        record.id = None;
        let failures = self.validate(&mut record).await;
        if !failures.is_empty() {
            warn!(failures = failures.len(), "Name & address record rejected");
            return Err(ContactsError::invalid(record, failures));
        }

        let created = self
            .records
            .create_name_address(record, Some(Self::metadata("create")))
            .await?;
        info!(id = ?created.id, "Name & address record added");
        Ok(created)
    }

    /// Validates and stores a changed record under `id`
    ///
    /// A record without an id takes the requested one; a record carrying a
    /// different id is rejected.
    #[instrument(skip(self, record), fields(id = %id))]
    pub async fn update(&self, id: NameAddressId, mut record: NameAddress) -> Result<NameAddress, ContactsError> {
        let mut failures = Vec::new();
        match record.id {
            Some(record_id) if record_id != id => failures.push(ValidationFailure::record(MISMATCHED_RECORD)),
            Some(_) => {}
            None => record.id = Some(id),
        }

        failures.extend(self.validate(&mut record).await);
        if !failures.is_empty() {
            warn!(failures = failures.len(), "Name & address record rejected");
            return Err(ContactsError::invalid(record, failures));
        }

        let updated = self
            .records
            .update_name_address(id, record, Some(Self::metadata("update")))
            .await
            .map_err(|e| Self::miss(e, id))?;
        info!("Name & address record updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: NameAddressId) -> Result<(), ContactsError> {
        self.records
            .delete_name_address(id, Some(Self::metadata("delete")))
            .await
            .map_err(|e| Self::miss(e, id))?;
        info!("Name & address record deleted");
        Ok(())
    }

    fn miss(error: PortError, id: NameAddressId) -> ContactsError {
        if error.is_not_found() {
            ContactsError::NotFound(id)
        } else {
            ContactsError::Store(error)
        }
    }

    fn metadata(operation: &str) -> OperationMetadata {
        OperationMetadata::default().with_context("operation", operation)
    }
}
