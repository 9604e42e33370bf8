//! Name & address repository implementation
//!
//! An absent province is stored as `NULL` so the foreign key to `province`
//! only applies when a code is present.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Database row for the `name_address` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NameAddressRow {
    pub name_address_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    pub province_code: Option<String>,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values written on insert and update
#[derive(Debug, Clone)]
pub struct NameAddressValues {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    pub province_code: Option<String>,
    pub email: String,
    pub phone: String,
}

const NAME_ADDRESS_COLUMNS: &str = "name_address_id, first_name, last_name, company_name, \
     street_address, city, postal_code, province_code, email, phone, created_at, updated_at";

/// Repository for the `name_address` table
#[derive(Debug, Clone)]
pub struct NameAddressRepository {
    pool: PgPool,
}

impl NameAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<NameAddressRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, NameAddressRow>(&format!(
            "SELECT {} FROM name_address ORDER BY last_name, first_name",
            NAME_ADDRESS_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: Uuid) -> Result<NameAddressRow, DatabaseError> {
        sqlx::query_as::<_, NameAddressRow>(&format!(
            "SELECT {} FROM name_address WHERE name_address_id = $1",
            NAME_ADDRESS_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("NameAddress", id))
    }

    /// Inserts a record under a freshly generated id
    pub async fn insert(&self, values: &NameAddressValues) -> Result<NameAddressRow, DatabaseError> {
        let row = sqlx::query_as::<_, NameAddressRow>(&format!(
            r#"
            INSERT INTO name_address (
                name_address_id, first_name, last_name, company_name,
                street_address, city, postal_code, province_code, email, phone
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            NAME_ADDRESS_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(&values.first_name)
        .bind(&values.last_name)
        .bind(&values.company_name)
        .bind(&values.street_address)
        .bind(&values.city)
        .bind(&values.postal_code)
        .bind(&values.province_code)
        .bind(&values.email)
        .bind(&values.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update(&self, id: Uuid, values: &NameAddressValues) -> Result<NameAddressRow, DatabaseError> {
        sqlx::query_as::<_, NameAddressRow>(&format!(
            r#"
            UPDATE name_address
            SET first_name = $2,
                last_name = $3,
                company_name = $4,
                street_address = $5,
                city = $6,
                postal_code = $7,
                province_code = $8,
                email = $9,
                phone = $10,
                updated_at = now()
            WHERE name_address_id = $1
            RETURNING {}
            "#,
            NAME_ADDRESS_COLUMNS
        ))
        .bind(id)
        .bind(&values.first_name)
        .bind(&values.last_name)
        .bind(&values.company_name)
        .bind(&values.street_address)
        .bind(&values.city)
        .bind(&values.postal_code)
        .bind(&values.province_code)
        .bind(&values.email)
        .bind(&values.phone)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("NameAddress", id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM name_address WHERE name_address_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("NameAddress", id));
        }
        Ok(())
    }
}
