//! Artist repository implementation

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Database row for the `artist` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ArtistRow {
    pub artist_id: Uuid,
    pub name_address_id: Uuid,
    pub minimum_hourly_rate: Decimal,
}

const ARTIST_COLUMNS: &str = "artist_id, name_address_id, minimum_hourly_rate";

/// Repository for the `artist` table
#[derive(Debug, Clone)]
pub struct ArtistRepository {
    pool: PgPool,
}

impl ArtistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ArtistRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ArtistRow>(&format!("SELECT {} FROM artist", ARTIST_COLUMNS))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: Uuid) -> Result<ArtistRow, DatabaseError> {
        sqlx::query_as::<_, ArtistRow>(&format!("SELECT {} FROM artist WHERE artist_id = $1", ARTIST_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Artist", id))
    }

    /// Inserts an artist under a freshly generated id
    pub async fn insert(&self, name_address_id: Uuid, minimum_hourly_rate: Decimal) -> Result<ArtistRow, DatabaseError> {
        let row = sqlx::query_as::<_, ArtistRow>(&format!(
            "INSERT INTO artist ({}) VALUES ($1, $2, $3) RETURNING {}",
            ARTIST_COLUMNS, ARTIST_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(name_address_id)
        .bind(minimum_hourly_rate)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update(&self, row: &ArtistRow) -> Result<ArtistRow, DatabaseError> {
        sqlx::query_as::<_, ArtistRow>(&format!(
            r#"
            UPDATE artist
            SET name_address_id = $2,
                minimum_hourly_rate = $3
            WHERE artist_id = $1
            RETURNING {}
            "#,
            ARTIST_COLUMNS
        ))
        .bind(row.artist_id)
        .bind(row.name_address_id)
        .bind(row.minimum_hourly_rate)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Artist", row.artist_id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM artist WHERE artist_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Artist", id));
        }
        Ok(())
    }
}
