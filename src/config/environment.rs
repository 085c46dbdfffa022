// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses server, database, CORS and logging settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Environment-based configuration management for production deployment

use crate::constants::env_defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory `SQLite` (tests and throwaway runs)
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL or a bare file path
    ///
    /// # Errors
    ///
    /// Returns a configuration error for empty values and non-`SQLite` schemes
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::config("DATABASE_URL must not be empty"));
        }

        if let Some(rest) = trimmed.strip_prefix("sqlite:") {
            let path = rest.trim_start_matches("//");
            if path == ":memory:" {
                return Ok(Self::Memory);
            }
            if path.is_empty() {
                return Err(AppError::config("DATABASE_URL has no SQLite file path"));
            }
            return Ok(Self::SQLite {
                path: PathBuf::from(path),
            });
        }

        if trimmed.contains("://") {
            return Err(AppError::config(format!(
                "Unsupported DATABASE_URL '{trimmed}': only sqlite URLs are supported"
            )));
        }

        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Store a summary of every generated plan
    pub persist_health_plans: bool,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable holds an unparseable value
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable holds an unparseable value
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let http_port = match lookup("HTTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT '{raw}': {e}")))?,
            None => env_defaults::HTTP_PORT,
        };

        let persist_health_plans = match lookup("PERSIST_HEALTH_PLANS") {
            Some(raw) => parse_bool("PERSIST_HEALTH_PLANS", &raw)?,
            None => true,
        };

        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .map_or_else(LogLevel::default, |raw| LogLevel::from_str_or_default(&raw));

        let config = Self {
            host: var_or("HOST", env_defaults::HOST),
            http_port,
            log_level,
            environment: Environment::from_str_or_default(&var_or("ENVIRONMENT", "development")),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&var_or("DATABASE_URL", env_defaults::DATABASE_URL))?,
                persist_health_plans,
            },
            cors: CorsConfig {
                allowed_origins: var_or("CORS_ALLOWED_ORIGINS", env_defaults::CORS_ALLOWED_ORIGINS),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty host or port 0
    pub fn validate(&self) -> AppResult<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::config("HOST must not be empty"));
        }
        if self.http_port == 0 {
            return Err(AppError::config("HTTP_PORT must be between 1 and 65535"));
        }
        Ok(())
    }

    /// Socket address string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitPlan Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Persist Health Plans: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            self.log_level,
            if self.database.url.is_memory() {
                "SQLite (in-memory)"
            } else {
                "SQLite (file)"
            },
            if self.database.persist_health_plans {
                "Enabled"
            } else {
                "Disabled"
            },
            self.cors.allowed_origins,
        )
    }
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!(
            "Invalid {key} '{raw}': expected true or false"
        ))),
    }
}
