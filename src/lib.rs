// ABOUTME: Main library entry point for the Fitness Health Planner API server
// ABOUTME: Wires configuration, logging, SQLite persistence and axum routes around the metrics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

#![deny(unsafe_code)]

//! # FitPlan Server
//!
//! HTTP service that turns a user's biometric profile (age, gender, height,
//! weight, activity level, fitness goal) into a personalized fitness and
//! nutrition plan, and keeps simple records for analytics.
//!
//! ## Architecture
//!
//! - **fitplan-core**: error system, profile models, constants
//! - **fitplan-intelligence**: the health metrics engine and reference dataset
//! - **this crate**: configuration, logging, `SQLite` persistence and routes
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan_server::config::environment::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! println!("FitPlan configured on port {}", config.http_port);
//! # Ok(())
//! # }
//! ```

/// Environment-based configuration
pub mod config;

/// `SQLite` persistence for plans, users and progress
pub mod database;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Persisted records and request payloads
pub mod models;

/// Shared server state
pub mod resources;

/// HTTP route handlers organized by domain
pub mod routes;

/// Router assembly and HTTP serving
pub mod server;

/// Unified error handling, re-exported from the core crate
pub mod errors {
    pub use fitplan_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
}

/// Application constants, re-exported from the core crate
pub mod constants {
    pub use fitplan_core::constants::*;
}
