//! Domain Adapters
//!
//! Adapter implementations connecting the domain ports to the PostgreSQL
//! repositories. Each adapter translates between domain models and row
//! types, and converts `DatabaseError` into `PortError`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresNameAddressAdapter;
//! use domain_contacts::NameAddressPort;
//!
//! let adapter = PostgresNameAddressAdapter::new(pool);
//! let record = adapter.get_name_address(id, None).await?;
//! ```

pub mod reference;
pub mod name_address;
pub mod catalog;
pub mod artist;

pub use reference::PostgresReferenceAdapter;
pub use name_address::PostgresNameAddressAdapter;
pub use catalog::PostgresCatalogAdapter;
pub use artist::PostgresArtistAdapter;

use chrono::Utc;
use sqlx::PgPool;

use core_kernel::{AdapterHealth, HealthCheckResult};

/// Runs `SELECT 1` against the pool and reports the outcome
pub(crate) async fn ping(pool: &PgPool, adapter_id: &str) -> HealthCheckResult {
    let start = std::time::Instant::now();

    let result = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await;

    let latency_ms = start.elapsed().as_millis() as u64;

    let (status, message) = match result {
        Ok(_) => (AdapterHealth::Healthy, None),
        Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
    };

    HealthCheckResult {
        adapter_id: adapter_id.to_string(),
        status,
        latency_ms,
        message,
        checked_at: Utc::now(),
    }
}
