use uuid::Uuid;

use super::Database;
use crate::models::DiaryEntry;
use crate::Result;
use crate::SolaceError;

impl Database {
    /// Insert a new diary entry and return the stored row
    pub async fn insert_diary_entry(
        &self,
        user_id: i64,
        title: &str,
        content: &str,
    ) -> Result<DiaryEntry> {
        let entry = sqlx::query_as(
            r"
            INSERT INTO diary_entries (user_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(user_id)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Get a diary entry by id, scoped to its owner
    pub async fn get_diary_entry(&self, user_id: i64, id: Uuid) -> Result<Option<DiaryEntry>> {
        let entry = sqlx::query_as("SELECT * FROM diary_entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entry)
    }

    /// List diary entries for a user, newest first
    pub async fn list_diary_entries(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DiaryEntry>> {
        let entries = sqlx::query_as(
            r"
            SELECT * FROM diary_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Update a diary entry; absent fields keep their stored values
    pub async fn update_diary_entry(
        &self,
        user_id: i64,
        id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<DiaryEntry> {
        let entry: Option<DiaryEntry> = sqlx::query_as(
            r"
            UPDATE diary_entries
            SET title = COALESCE($3, title),
                content = COALESCE($4, content),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            ",
        )
        .bind(id)
        .bind(user_id)
        .bind(title)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        entry.ok_or(SolaceError::DiaryEntryNotFound(id))
    }

    /// Delete a diary entry, returning true when a row was removed
    pub async fn delete_diary_entry(&self, user_id: i64, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM diary_entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
