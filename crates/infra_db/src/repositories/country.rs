//! Country repository implementation

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::DatabaseError;

/// Database row for the `country` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CountryRow {
    pub country_code: String,
    pub name: String,
    pub postal_pattern: String,
    pub phone_pattern: String,
    pub federal_sales_tax: Decimal,
    pub province_terminology: String,
}

const COUNTRY_COLUMNS: &str =
    "country_code, name, postal_pattern, phone_pattern, federal_sales_tax, province_terminology";

/// Repository for the `country` table
#[derive(Debug, Clone)]
pub struct CountryRepository {
    pool: PgPool,
}

impl CountryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all countries ordered by name
    pub async fn list(&self) -> Result<Vec<CountryRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CountryRow>(&format!(
            "SELECT {} FROM country ORDER BY name",
            COUNTRY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Finds a country by code; `None` if there is no such country
    pub async fn find(&self, code: &str) -> Result<Option<CountryRow>, DatabaseError> {
        let row = sqlx::query_as::<_, CountryRow>(&format!(
            "SELECT {} FROM country WHERE country_code = $1",
            COUNTRY_COLUMNS
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert(&self, row: &CountryRow) -> Result<CountryRow, DatabaseError> {
        let inserted = sqlx::query_as::<_, CountryRow>(&format!(
            r#"
            INSERT INTO country ({})
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            COUNTRY_COLUMNS, COUNTRY_COLUMNS
        ))
        .bind(&row.country_code)
        .bind(&row.name)
        .bind(&row.postal_pattern)
        .bind(&row.phone_pattern)
        .bind(row.federal_sales_tax)
        .bind(&row.province_terminology)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    /// Replaces every column of an existing country
    pub async fn update(&self, row: &CountryRow) -> Result<CountryRow, DatabaseError> {
        sqlx::query_as::<_, CountryRow>(&format!(
            r#"
            UPDATE country
            SET name = $2,
                postal_pattern = $3,
                phone_pattern = $4,
                federal_sales_tax = $5,
                province_terminology = $6
            WHERE country_code = $1
            RETURNING {}
            "#,
            COUNTRY_COLUMNS
        ))
        .bind(&row.country_code)
        .bind(&row.name)
        .bind(&row.postal_pattern)
        .bind(&row.phone_pattern)
        .bind(row.federal_sales_tax)
        .bind(&row.province_terminology)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Country", &row.country_code))
    }

    pub async fn delete(&self, code: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM country WHERE country_code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Country", code));
        }
        Ok(())
    }
}
