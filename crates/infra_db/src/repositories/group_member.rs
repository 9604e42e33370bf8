//! Group member repository implementation
//!
//! Rows are keyed by the pair of group and member artist ids and come back
//! ordered by date left, then date joined, unset dates first.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Database row for the `group_member` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct GroupMemberRow {
    pub artist_id_group: Uuid,
    pub artist_id_member: Uuid,
    pub date_joined: Option<NaiveDate>,
    pub date_left: Option<NaiveDate>,
}

const GROUP_MEMBER_COLUMNS: &str = "artist_id_group, artist_id_member, date_joined, date_left";

const MEMBERSHIP_ORDER: &str = "ORDER BY date_left NULLS FIRST, date_joined NULLS FIRST";

/// Repository for the `group_member` table
#[derive(Debug, Clone)]
pub struct GroupMemberRepository {
    pool: PgPool,
}

impl GroupMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<GroupMemberRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, GroupMemberRow>(&format!(
            "SELECT {} FROM group_member {}",
            GROUP_MEMBER_COLUMNS, MEMBERSHIP_ORDER
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_by_group(&self, group: Uuid) -> Result<Vec<GroupMemberRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, GroupMemberRow>(&format!(
            "SELECT {} FROM group_member WHERE artist_id_group = $1 {}",
            GROUP_MEMBER_COLUMNS, MEMBERSHIP_ORDER
        ))
        .bind(group)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_by_member(&self, member: Uuid) -> Result<Vec<GroupMemberRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, GroupMemberRow>(&format!(
            "SELECT {} FROM group_member WHERE artist_id_member = $1 {}",
            GROUP_MEMBER_COLUMNS, MEMBERSHIP_ORDER
        ))
        .bind(member)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find(&self, group: Uuid, member: Uuid) -> Result<Option<GroupMemberRow>, DatabaseError> {
        let row = sqlx::query_as::<_, GroupMemberRow>(&format!(
            "SELECT {} FROM group_member WHERE artist_id_group = $1 AND artist_id_member = $2",
            GROUP_MEMBER_COLUMNS
        ))
        .bind(group)
        .bind(member)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert(&self, row: &GroupMemberRow) -> Result<GroupMemberRow, DatabaseError> {
        let inserted = sqlx::query_as::<_, GroupMemberRow>(&format!(
            "INSERT INTO group_member ({}) VALUES ($1, $2, $3, $4) RETURNING {}",
            GROUP_MEMBER_COLUMNS, GROUP_MEMBER_COLUMNS
        ))
        .bind(row.artist_id_group)
        .bind(row.artist_id_member)
        .bind(row.date_joined)
        .bind(row.date_left)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    /// Replaces the dates of an existing membership
    pub async fn update(&self, row: &GroupMemberRow) -> Result<GroupMemberRow, DatabaseError> {
        sqlx::query_as::<_, GroupMemberRow>(&format!(
            r#"
            UPDATE group_member
            SET date_joined = $3,
                date_left = $4
            WHERE artist_id_group = $1 AND artist_id_member = $2
            RETURNING {}
            "#,
            GROUP_MEMBER_COLUMNS
        ))
        .bind(row.artist_id_group)
        .bind(row.artist_id_member)
        .bind(row.date_joined)
        .bind(row.date_left)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("GroupMember", row.artist_id_member))
    }

    pub async fn delete(&self, group: Uuid, member: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM group_member WHERE artist_id_group = $1 AND artist_id_member = $2")
            .bind(group)
            .bind(member)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("GroupMember", member));
        }
        Ok(())
    }
}
