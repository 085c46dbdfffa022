// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Validation bounds, service identity, and environment defaults for FitPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Constants grouped by domain.

/// Profile validation bounds (inclusive)
pub mod profile_limits {
    /// Minimum supported age in years
    pub const MIN_AGE: i64 = 13;
    /// Maximum supported age in years
    pub const MAX_AGE: i64 = 120;
    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 300.0;
}

/// Account and progress validation bounds
pub mod account_limits {
    /// Minimum username length
    pub const MIN_USERNAME_LEN: usize = 3;
    /// Maximum username length
    pub const MAX_USERNAME_LEN: usize = 50;
    /// Minimum password length
    pub const MIN_PASSWORD_LEN: usize = 8;
    /// Maximum length of free-text progress notes
    pub const MAX_PROGRESS_NOTES_LEN: usize = 1000;
}

/// Service identity used in logs and the `/api` info endpoint
pub mod service_names {
    /// Binary and log target name
    pub const FITPLAN_SERVER: &str = "fitplan-server";
    /// Human-readable API name
    pub const API_DISPLAY_NAME: &str = "Fitness Health Planner API";
    /// Human-readable API description
    pub const API_DESCRIPTION: &str = "Generate personalized fitness and health plans";
}

/// API routes
pub mod routes {
    /// Versioned API prefix
    pub const API_V1: &str = "/api/v1";
    /// Health check route
    pub const HEALTH: &str = "/health";
    /// Readiness route
    pub const READY: &str = "/ready";
}

/// Pagination defaults for list endpoints
pub mod pagination {
    /// Default page size
    pub const DEFAULT_LIMIT: i64 = 100;
    /// Hard ceiling on page size
    pub const MAX_LIMIT: i64 = 1000;
}

/// Environment variable defaults
pub mod env_defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default SQLite database location
    pub const DATABASE_URL: &str = "sqlite:./data/fitness_planner.db";
    /// Default CORS origins (any)
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}
