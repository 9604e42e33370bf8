//! Instrument repository implementation

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Database row for the `instrument` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct InstrumentRow {
    pub instrument_id: Uuid,
    pub name: String,
}

/// Repository for the `instrument` table
#[derive(Debug, Clone)]
pub struct InstrumentRepository {
    pool: PgPool,
}

impl InstrumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<InstrumentRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, InstrumentRow>("SELECT instrument_id, name FROM instrument ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: Uuid) -> Result<InstrumentRow, DatabaseError> {
        sqlx::query_as::<_, InstrumentRow>("SELECT instrument_id, name FROM instrument WHERE instrument_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Instrument", id))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<InstrumentRow>, DatabaseError> {
        let row = sqlx::query_as::<_, InstrumentRow>("SELECT instrument_id, name FROM instrument WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Inserts an instrument under a freshly generated id
    pub async fn insert(&self, name: &str) -> Result<InstrumentRow, DatabaseError> {
        let row = sqlx::query_as::<_, InstrumentRow>(
            "INSERT INTO instrument (instrument_id, name) VALUES ($1, $2) RETURNING instrument_id, name",
        )
        .bind(Uuid::now_v7())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update(&self, id: Uuid, name: &str) -> Result<InstrumentRow, DatabaseError> {
        sqlx::query_as::<_, InstrumentRow>(
            "UPDATE instrument SET name = $2 WHERE instrument_id = $1 RETURNING instrument_id, name",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Instrument", id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM instrument WHERE instrument_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Instrument", id));
        }
        Ok(())
    }
}
