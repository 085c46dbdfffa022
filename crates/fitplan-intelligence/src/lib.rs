// ABOUTME: Health metrics engine for personalized fitness and nutrition plans
// ABOUTME: Pure BMI/BMR/TDEE/calorie/macro pipeline over a validated reference dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

#![deny(unsafe_code)]

//! # FitPlan Intelligence
//!
//! Stateless health metrics engine. A [`ProfileInput`](fitplan_core::models::ProfileInput)
//! is validated into a `UserProfile`, then run through a short linear pipeline:
//!
//! validation -> BMI -> BMR -> TDEE -> calorie target -> macros -> lookups
//!
//! The [`ReferenceDataset`] is loaded and validated once at startup and shared
//! read-only; the engine holds no state and performs no I/O.

/// Health metrics pipeline
pub mod health_calculator;

/// Rule-based insights over stored plan statistics
pub mod insights;

/// Health plan output records
pub mod plan;

/// Static reference tables
pub mod reference;

pub use health_calculator::{
    build_health_plan, calculate_bmi, calculate_bmr, calculate_daily_calories, calculate_macros,
    calculate_tdee, generate_health_plan, generate_health_plan_at,
};
pub use insights::{goal_insights, population_insights, PlanStatistics};
pub use plan::{BmiResult, HealthMetrics, HealthPlan, MacroBreakdown, MacroTarget};
pub use reference::{DatasetError, ReferenceDataset};
