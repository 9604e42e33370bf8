//! Style repository implementation

use sqlx::PgPool;

use crate::error::DatabaseError;

/// Database row for the `style` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StyleRow {
    pub style_name: String,
    pub description: String,
}

/// Repository for the `style` table
#[derive(Debug, Clone)]
pub struct StyleRepository {
    pool: PgPool,
}

impl StyleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<StyleRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, StyleRow>("SELECT style_name, description FROM style ORDER BY style_name")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn find(&self, name: &str) -> Result<Option<StyleRow>, DatabaseError> {
        let row = sqlx::query_as::<_, StyleRow>("SELECT style_name, description FROM style WHERE style_name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn insert(&self, row: &StyleRow) -> Result<StyleRow, DatabaseError> {
        let inserted = sqlx::query_as::<_, StyleRow>(
            "INSERT INTO style (style_name, description) VALUES ($1, $2) RETURNING style_name, description",
        )
        .bind(&row.style_name)
        .bind(&row.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    pub async fn update(&self, row: &StyleRow) -> Result<StyleRow, DatabaseError> {
        sqlx::query_as::<_, StyleRow>(
            "UPDATE style SET description = $2 WHERE style_name = $1 RETURNING style_name, description",
        )
        .bind(&row.style_name)
        .bind(&row.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Style", &row.style_name))
    }

    pub async fn delete(&self, name: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM style WHERE style_name = $1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Style", name));
        }
        Ok(())
    }
}
