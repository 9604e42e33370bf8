//! Province repository implementation

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::DatabaseError;

/// Database row for the `province` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProvinceRow {
    pub province_code: String,
    pub name: String,
    pub country_code: String,
    pub sales_tax_code: String,
    pub sales_tax: Decimal,
    pub includes_federal_tax: bool,
    pub first_postal_letters: String,
}

const PROVINCE_COLUMNS: &str = "province_code, name, country_code, sales_tax_code, sales_tax, \
     includes_federal_tax, first_postal_letters";

/// Repository for the `province` table
#[derive(Debug, Clone)]
pub struct ProvinceRepository {
    pool: PgPool,
}

impl ProvinceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists the provinces of a country ordered by name
    pub async fn list_by_country(&self, country_code: &str) -> Result<Vec<ProvinceRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ProvinceRow>(&format!(
            "SELECT {} FROM province WHERE country_code = $1 ORDER BY name",
            PROVINCE_COLUMNS
        ))
        .bind(country_code)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Finds a province by code; `None` if there is no such province
    pub async fn find(&self, code: &str) -> Result<Option<ProvinceRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ProvinceRow>(&format!(
            "SELECT {} FROM province WHERE province_code = $1",
            PROVINCE_COLUMNS
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<ProvinceRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ProvinceRow>(&format!(
            "SELECT {} FROM province WHERE name = $1",
            PROVINCE_COLUMNS
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert(&self, row: &ProvinceRow) -> Result<ProvinceRow, DatabaseError> {
        let inserted = sqlx::query_as::<_, ProvinceRow>(&format!(
            r#"
            INSERT INTO province ({})
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            PROVINCE_COLUMNS, PROVINCE_COLUMNS
        ))
        .bind(&row.province_code)
        .bind(&row.name)
        .bind(&row.country_code)
        .bind(&row.sales_tax_code)
        .bind(row.sales_tax)
        .bind(row.includes_federal_tax)
        .bind(&row.first_postal_letters)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    /// Replaces every column of an existing province
    pub async fn update(&self, row: &ProvinceRow) -> Result<ProvinceRow, DatabaseError> {
        sqlx::query_as::<_, ProvinceRow>(&format!(
            r#"
            UPDATE province
            SET name = $2,
                country_code = $3,
                sales_tax_code = $4,
                sales_tax = $5,
                includes_federal_tax = $6,
                first_postal_letters = $7
            WHERE province_code = $1
            RETURNING {}
            "#,
            PROVINCE_COLUMNS
        ))
        .bind(&row.province_code)
        .bind(&row.name)
        .bind(&row.country_code)
        .bind(&row.sales_tax_code)
        .bind(row.sales_tax)
        .bind(row.includes_federal_tax)
        .bind(&row.first_postal_letters)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Province", &row.province_code))
    }

    pub async fn delete(&self, code: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM province WHERE province_code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Province", code));
        }
        Ok(())
    }
}
