// ABOUTME: Progress entry storage for registered users
// ABOUTME: Records weight, optional height and notes over time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use super::Database;
use crate::errors::AppResult;
use crate::models::{ProgressUpdate, UserProgress};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

impl Database {
    /// Create the `user_progress` table
    pub(super) async fn migrate_progress(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_progress (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                current_weight REAL NOT NULL,
                current_height REAL,
                notes TEXT,
                recorded_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_user_progress_user_id ON user_progress(user_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record a progress entry for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_progress(
        &self,
        user_id: i64,
        update: &ProgressUpdate,
    ) -> AppResult<UserProgress> {
        let recorded_at = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO user_progress (user_id, current_weight, current_height, notes, recorded_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(user_id)
        .bind(update.current_weight)
        .bind(update.current_height)
        .bind(update.notes.as_deref())
        .bind(recorded_at)
        .execute(&self.pool)
        .await?;

        Ok(UserProgress {
            id: result.last_insert_rowid(),
            user_id,
            current_weight: update.current_weight,
            current_height: update.current_height,
            notes: update.notes.clone(),
            recorded_at,
        })
    }

    /// Progress entries for a user, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_progress(&self, user_id: i64) -> AppResult<Vec<UserProgress>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, current_weight, current_height, notes, recorded_at
            FROM user_progress
            WHERE user_id = ?1
            ORDER BY recorded_at, id
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_progress).collect()
    }

    fn row_to_progress(row: &SqliteRow) -> AppResult<UserProgress> {
        Ok(UserProgress {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            current_weight: row.try_get("current_weight")?,
            current_height: row.try_get("current_height")?,
            notes: row.try_get("notes")?,
            recorded_at: row.try_get("recorded_at")?,
        })
    }
}
