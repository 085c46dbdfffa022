// ABOUTME: Persisted records and request/response payloads for the HTTP API
// ABOUTME: Users, progress entries, stored plan summaries, analytics views and their validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Data Models
//!
//! Row types mirror the `SQLite` tables one-to-one. Request payloads carry a
//! `validate` method that lists every violated constraint, the same way
//! profile validation does in the engine.

use crate::constants::account_limits::{
    MAX_PROGRESS_NOTES_LEN, MAX_USERNAME_LEN, MIN_PASSWORD_LEN, MIN_USERNAME_LEN,
};
use crate::constants::pagination::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::constants::profile_limits::{
    MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::json;
use std::collections::BTreeMap;

// ================================================================================================
// Health plans
// ================================================================================================

/// Denormalized summary of a generated plan, as stored in `health_plans`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredHealthPlan {
    /// Row id
    pub id: i64,
    /// Owning user, when known
    pub user_id: Option<i64>,
    /// Age in years
    pub age: i64,
    /// Gender label
    pub gender: String,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Activity level label
    pub activity_level: String,
    /// Fitness goal label
    pub fitness_goal: String,
    /// BMI rounded to one decimal
    pub bmi: f64,
    /// Basal metabolic rate (kcal)
    pub bmr: i64,
    /// Total daily energy expenditure (kcal)
    pub tdee: i64,
    /// Daily calorie target
    pub daily_calories: i64,
    /// Protein target in grams
    pub protein_grams: i64,
    /// Carbohydrate target in grams
    pub carbs_grams: i64,
    /// Fat target in grams
    pub fat_grams: i64,
    /// Water intake recommendation
    pub water_intake: String,
    /// Sleep recommendation
    pub sleep_recommendation: String,
    /// Generation timestamp
    pub created_at: DateTime<Utc>,
}

// ================================================================================================
// Users
// ================================================================================================

/// Registered account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Row id
    pub id: i64,
    /// Unique email address
    pub email: String,
    /// Unique username
    pub username: String,
    /// bcrypt hash of the password
    pub hashed_password: String,
    /// Deactivated accounts cannot log in
    pub is_active: bool,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Public view of a user; never includes the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id
    pub id: i64,
    /// Email address
    pub email: String,
    /// Username
    pub username: String,
    /// Active flag
    pub is_active: bool,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Registration and update payload
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    /// Email address
    pub email: String,
    /// Username (3-50 characters)
    pub username: String,
    /// Plain-text password (at least 8 characters)
    pub password: String,
}

impl RegisterUserRequest {
    /// Check field constraints, reporting every violation
    ///
    /// # Errors
    ///
    /// Returns an invalid input error listing each violated constraint
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            errors.push("A valid email address is required".to_owned());
        }

        let username_len = self.username.chars().count();
        if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&username_len) {
            errors.push(format!(
                "Username must be between {MIN_USERNAME_LEN} and {MAX_USERNAME_LEN} characters"
            ));
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }

        into_validation_result(errors)
    }
}

/// Login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Placeholder access token issued on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque token of the form `token_<id>_<unix seconds>`
    pub access_token: String,
    /// Always `bearer`
    pub token_type: String,
}

impl TokenResponse {
    /// Issue the placeholder token for a user at a given instant
    #[must_use]
    pub fn issue(user_id: i64, at: DateTime<Utc>) -> Self {
        Self {
            access_token: format!("token_{user_id}_{}", at.timestamp()),
            token_type: "bearer".into(),
        }
    }
}

// ================================================================================================
// Progress
// ================================================================================================

/// Progress entry payload
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressUpdate {
    /// Current weight in kilograms
    pub current_weight: f64,
    /// Current height in centimeters
    #[serde(default)]
    pub current_height: Option<f64>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl ProgressUpdate {
    /// Check field constraints, reporting every violation
    ///
    /// # Errors
    ///
    /// Returns an invalid input error listing each violated constraint
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();

        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&self.current_weight) {
            errors.push("Weight must be between 30 and 300 kg".to_owned());
        }

        if let Some(height) = self.current_height {
            if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height) {
                errors.push("Height must be between 100 and 250 cm".to_owned());
            }
        }

        if let Some(notes) = &self.notes {
            if notes.chars().count() > MAX_PROGRESS_NOTES_LEN {
                errors.push(format!(
                    "Notes must be at most {MAX_PROGRESS_NOTES_LEN} characters"
                ));
            }
        }

        into_validation_result(errors)
    }
}

/// Recorded progress entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    /// Row id
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Weight in kilograms
    pub current_weight: f64,
    /// Height in centimeters
    pub current_height: Option<f64>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Recording timestamp
    pub recorded_at: DateTime<Utc>,
}

// ================================================================================================
// Shared payloads
// ================================================================================================

/// Plain confirmation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Human-readable message
    pub message: String,
}

impl Message {
    /// Wrap a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `skip`/`limit` query parameters for list endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    /// Rows to skip
    pub skip: Option<i64>,
    /// Maximum rows to return
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Non-negative offset
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    /// Page size clamped to `0..=MAX_LIMIT`
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)
    }
}

// ================================================================================================
// Analytics views
// ================================================================================================

/// Averages over a set of stored plans
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    /// Mean BMI, two decimals
    pub bmi: Option<f64>,
    /// Mean daily calorie target, whole kcal
    pub daily_calories: Option<f64>,
    /// Mean BMR, whole kcal
    pub bmr: Option<f64>,
}

/// `/health-plans/analytics/summary` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Number of stored plans
    pub total_plans_generated: i64,
    /// Plan count per fitness goal
    pub goal_distribution: BTreeMap<String, i64>,
    /// Mean BMI, two decimals
    pub average_bmi: Option<f64>,
    /// Mean daily calorie target, whole kcal
    pub average_daily_calories: Option<f64>,
}

/// `/analytics/overview` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    /// Number of stored plans
    pub total_plans_generated: i64,
    /// Plans created since midnight UTC
    pub plans_today: i64,
    /// Plans created in the last seven days
    pub plans_this_week: i64,
    /// Plan count per fitness goal
    pub goal_distribution: BTreeMap<String, i64>,
    /// Plan count per gender
    pub gender_distribution: BTreeMap<String, i64>,
    /// Plan count per age group
    pub age_distribution: BTreeMap<String, i64>,
    /// Population averages
    pub average_metrics: AverageMetrics,
}

/// Averages over plans sharing one goal; present only when plans exist
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalAverages {
    /// Mean BMI, two decimals
    pub bmi: f64,
    /// Mean daily calorie target, whole kcal
    pub daily_calories: f64,
    /// Mean BMR, whole kcal
    pub bmr: f64,
}

/// `/analytics/goals/{goal}` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalAnalytics {
    /// Requested goal
    pub goal_type: String,
    /// Plans stored for the goal
    pub total_plans: i64,
    /// Averages, rendered as `{}` when there are no plans
    #[serde(serialize_with = "empty_object_when_none")]
    pub average_metrics: Option<GoalAverages>,
    /// Rule-based observations
    pub insights: Vec<String>,
}

/// Plans created on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Plans created that day
    pub count: i64,
}

/// `/analytics/trends` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendAnalytics {
    /// Plans per day, oldest first
    pub daily_trends: Vec<DailyCount>,
    /// Goal -> date -> plans
    pub goal_trends: BTreeMap<String, BTreeMap<String, i64>>,
    /// Window label
    pub period: String,
}

/// `/analytics/insights` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightList {
    /// Ordered observations
    pub insights: Vec<String>,
}

#[allow(clippy::ref_option)] // serde's serialize_with signature
fn empty_object_when_none<S: Serializer>(
    value: &Option<GoalAverages>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(averages) => averages.serialize(serializer),
        None => json!({}).serialize(serializer),
    }
}

fn into_validation_result(errors: Vec<String>) -> AppResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(
            AppError::invalid_input(format!("Invalid input: {}", errors.join(", ")))
                .with_details(json!({ "errors": errors })),
        )
    }
}
