//! Contacts Domain Ports
//!
//! `NameAddressPort` is everything `NameAddressService` needs from storage.
//! Records reaching the port have already been normalized and validated.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_contacts::NameAddressPort;
//!
//! let contacts: Arc<dyn NameAddressPort> = Arc::new(PostgresNameAddressAdapter::new(pool));
//! let record = contacts.get_name_address(id, None).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, NameAddressId, OperationMetadata, PortError};

use crate::record::NameAddress;

/// Storage port for name & address records
#[async_trait]
pub trait NameAddressPort: DomainPort + HealthCheckable {
    /// Lists every record, in no particular order
    async fn list_name_addresses(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<NameAddress>, PortError>;

    /// Retrieves a record by id; `PortError::NotFound` if missing
    async fn get_name_address(
        &self,
        id: NameAddressId,
        metadata: Option<OperationMetadata>,
    ) -> Result<NameAddress, PortError>;

    /// Stores a new record and returns it with its assigned id
    async fn create_name_address(
        &self,
        record: NameAddress,
        metadata: Option<OperationMetadata>,
    ) -> Result<NameAddress, PortError>;

    /// Replaces a stored record; `PortError::NotFound` if missing
    async fn update_name_address(
        &self,
        id: NameAddressId,
        record: NameAddress,
        metadata: Option<OperationMetadata>,
    ) -> Result<NameAddress, PortError>;

    /// Deletes a record; `PortError::NotFound` if missing
    async fn delete_name_address(
        &self,
        id: NameAddressId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Checks if a record exists
    async fn exists(&self, id: NameAddressId) -> Result<bool, PortError> {
        match self.get_name_address(id, None).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Mock implementation of NameAddressPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    /// In-memory mock implementation of NameAddressPort
    #[derive(Debug, Default, Clone)]
    pub struct MockNameAddressPort {
        records: Arc<RwLock<HashMap<NameAddressId, NameAddress>>>,
    }

    impl MockNameAddressPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a mock port with pre-populated records; records without
        /// an id are given one
        pub async fn with_records(records: Vec<NameAddress>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.records.write().await;
                for mut record in records {
                    let id = *record.id.get_or_insert_with(NameAddressId::new_v7);
                    stored.insert(id, record);
                }
            }
            port
        }

        /// Number of stored records
        pub async fn len(&self) -> usize {
            self.records.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.records.read().await.is_empty()
        }
    }

    impl DomainPort for MockNameAddressPort {}

    #[async_trait]
    impl HealthCheckable for MockNameAddressPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                message: Some("Mock adapter always healthy".to_string()),
                ..HealthCheckResult::healthy("mock-name-address-port")
            }
        }
    }

    #[async_trait]
    impl NameAddressPort for MockNameAddressPort {
        async fn list_name_addresses(
            &self,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<NameAddress>, PortError> {
            Ok(self.records.read().await.values().cloned().collect())
        }

        async fn get_name_address(
            &self,
            id: NameAddressId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<NameAddress, PortError> {
            self.records
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("NameAddress", id))
        }

        async fn create_name_address(
            &self,
            mut record: NameAddress,
            _metadata: Option<OperationMetadata>,
        ) -> Result<NameAddress, PortError> {
            let id = NameAddressId::new_v7();
            record.id = Some(id);
            self.records.write().await.insert(id, record.clone());
            Ok(record)
        }

        async fn update_name_address(
            &self,
            id: NameAddressId,
            mut record: NameAddress,
            _metadata: Option<OperationMetadata>,
        ) -> Result<NameAddress, PortError> {
            let mut records = self.records.write().await;
            let stored = records
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("NameAddress", id))?;
            record.id = Some(id);
            *stored = record.clone();
            Ok(record)
        }

        async fn delete_name_address(
            &self,
            id: NameAddressId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            self.records
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("NameAddress", id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockNameAddressPort;
    use super::*;

    fn record(first: &str) -> NameAddress {
        NameAddress {
            first_name: first.to_string(),
            phone: "613-555-0100".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_mock_port_create_and_get() {
        let port = MockNameAddressPort::new();
        let created = port.create_name_address(record("John"), None).await.unwrap();
        let id = created.id.unwrap();

        let fetched = port.get_name_address(id, None).await.unwrap();
        assert_eq!(fetched, created);
        assert!(port.exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_port_not_found() {
        let port = MockNameAddressPort::new();
        let id = NameAddressId::new();

        assert!(port.get_name_address(id, None).await.unwrap_err().is_not_found());
        assert!(!port.exists(id).await.unwrap());
        assert!(port.delete_name_address(id, None).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_port_update_keeps_id() {
        let port = MockNameAddressPort::with_records(vec![record("John")]).await;
        let stored = port.list_name_addresses(None).await.unwrap().remove(0);
        let id = stored.id.unwrap();

        let updated = port
            .update_name_address(id, NameAddress { id: None, ..record("Jane") }, None)
            .await
            .unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(port.get_name_address(id, None).await.unwrap().first_name, "Jane");
    }

    #[tokio::test]
    async fn test_mock_port_health_check() {
        let port = MockNameAddressPort::new();
        let health = port.health_check().await;
        assert_eq!(health.status, core_kernel::AdapterHealth::Healthy);
    }
}
