// ABOUTME: Route module organization for the FitPlan HTTP API
// ABOUTME: One route group per domain plus the JSON body helper shared by handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Route module for the FitPlan server
//!
//! Each domain module exposes a unit struct with a `routes` constructor and
//! thin handlers that delegate to the engine or the database.

/// Analytics over stored plans
pub mod analytics;
/// Liveness and readiness probes
pub mod health;
/// Health plan generation and stored plan management
pub mod health_plans;
/// Service information and reference data
pub mod info;
/// User accounts and progress tracking
pub mod users;

pub use analytics::AnalyticsRoutes;
pub use health::HealthRoutes;
pub use health_plans::HealthPlanRoutes;
pub use info::InfoRoutes;
pub use users::UserRoutes;

use crate::errors::{AppError, AppResult};
use axum::extract::rejection::JsonRejection;
use axum::Json;

/// Unwrap a JSON body, turning every rejection into a 400
///
/// axum rejects missing content types with 415 and type mismatches with 422;
/// the API reports all malformed bodies as invalid input instead.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}
