// ABOUTME: SQLite persistence for generated plans, user accounts and progress entries
// ABOUTME: Owns the connection pool and creates every table idempotently at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Database Management
//!
//! A single [`Database`] handle wraps the `sqlx` pool. Each table group lives
//! in its own submodule that adds `impl Database` blocks, and `migrate` calls
//! their `migrate_*` functions in dependency order.

mod analytics;
mod health_plans;
mod progress;
mod users;

pub use users::DUPLICATE_USER_MESSAGE;

use crate::config::environment::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Database manager for plans, users and progress
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect and run migrations
    ///
    /// File databases are created if missing, along with their parent
    /// directory. In-memory databases are pinned to a single connection
    /// because every `SQLite` memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the connection
    /// fails, or a migration fails
    pub async fn new(url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match url {
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect(&url.to_connection_string())
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                ensure_parent_dir(path).await?;
                // Ensure SQLite creates the database file if it doesn't exist
                let connection = format!("{}?mode=rwc", url.to_connection_string());
                SqlitePoolOptions::new().connect(&connection).await?
            }
        };

        let db = Self { pool };
        db.migrate().await?;

        info!(database = %url, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_health_plans().await?;
        self.migrate_progress().await?;

        debug!("Database migrations applied");
        Ok(())
    }

    /// Round-trip a trivial query to confirm the pool is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

async fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
                .with_source(e)
            })
        }
        _ => Ok(()),
    }
}
