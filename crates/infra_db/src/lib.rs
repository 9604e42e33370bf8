//! Infrastructure Database Layer
//!
//! PostgreSQL storage for the clubs system using SQLx: the connection pool,
//! schema migrations, one repository per table, and the adapters that
//! implement the domain ports.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresReferenceAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/clubs")).await?;
//! run_migrations(&pool).await?;
//! let reference = PostgresReferenceAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, DatabaseConfig, DEFAULT_DATABASE_URL, create_pool, create_pool_from_url, run_migrations};
pub use error::DatabaseError;
pub use adapters::{PostgresArtistAdapter, PostgresCatalogAdapter, PostgresNameAddressAdapter, PostgresReferenceAdapter};
