// ABOUTME: User management database operations
// ABOUTME: Handles account registration, lookup, update and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Error as SqlxError, Row};

/// Message shared by registration and update conflicts
pub const DUPLICATE_USER_MESSAGE: &str = "User with this email or username already exists";

const USER_COLUMNS: &str =
    "id, email, username, hashed_password, is_active, created_at, updated_at";

impl Database {
    /// Create the `users` table
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT UNIQUE NOT NULL,
                username TEXT UNIQUE NOT NULL,
                hashed_password TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new account
    ///
    /// # Errors
    ///
    /// Returns an already-exists error when the email or username is taken,
    /// or a database error if the insert fails
    pub async fn create_user(
        &self,
        email: &str,
        username: &str,
        hashed_password: &str,
    ) -> AppResult<User> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO users (email, username, hashed_password, is_active, created_at, updated_at)
            VALUES (?1, ?2, ?3, 1, ?4, ?4)
            ",
        )
        .bind(email)
        .bind(username)
        .bind(hashed_password)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(User {
            id: result.last_insert_rowid(),
            email: email.to_owned(),
            username: username.to_owned(),
            hashed_password: hashed_password.to_owned(),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user(&self, user_id: i64) -> AppResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1");

        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// Get a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1");

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// Whether another account already uses this email or username
    ///
    /// `exclude_id` skips the account being updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn user_conflict_exists(
        &self,
        email: &str,
        username: &str,
        exclude_id: Option<i64>,
    ) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*) FROM users
            WHERE (email = ?1 OR username = ?2) AND (?3 IS NULL OR id != ?3)
            ",
        )
        .bind(email)
        .bind(username)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// List accounts ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_users(&self, offset: i64, limit: i64) -> AppResult<Vec<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id LIMIT ?1 OFFSET ?2");

        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_user).collect()
    }

    /// Replace email, username and password hash; returns `None` if the user does not exist
    ///
    /// # Errors
    ///
    /// Returns an already-exists error on a uniqueness conflict, or a
    /// database error if the update fails
    pub async fn update_user(
        &self,
        user_id: i64,
        email: &str,
        username: &str,
        hashed_password: &str,
    ) -> AppResult<Option<User>> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET email = ?1, username = ?2, hashed_password = ?3, updated_at = ?4
            WHERE id = ?5
            ",
        )
        .bind(email)
        .bind(username)
        .bind(hashed_password)
        .bind(Utc::now())
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_user(user_id).await
    }

    /// Delete an account and its progress entries; returns false when no user matched
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails
    pub async fn delete_user(&self, user_id: i64) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_progress WHERE user_id = ?1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Convert a database row to a `User`
    fn row_to_user(row: &SqliteRow) -> AppResult<User> {
        Ok(User {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            username: row.try_get("username")?,
            hashed_password: row.try_get("hashed_password")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

fn map_unique_violation(error: SqlxError) -> AppError {
    if let SqlxError::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            return AppError::already_exists(DUPLICATE_USER_MESSAGE);
        }
    }
    AppError::from(error)
}
