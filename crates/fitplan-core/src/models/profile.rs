// ABOUTME: User profile models for health plan generation
// ABOUTME: Raw request input, validated immutable profile, and its fixed enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! User profile models
//!
//! A [`ProfileInput`] is what arrives over the wire: every field optional and
//! categorical fields as free text. [`ProfileInput::validate`] is the only way
//! to obtain a [`UserProfile`], and it reports every violated constraint at
//! once rather than stopping at the first.

use crate::constants::profile_limits::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const AGE_VIOLATION: &str = "Age must be between 13 and 120 years";
const HEIGHT_VIOLATION: &str = "Height must be between 100 and 250 cm";
const WEIGHT_VIOLATION: &str = "Weight must be between 30 and 300 kg";

/// A categorical profile field carried a value outside its enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field} '{value}': must be one of {expected}")]
pub struct ParseProfileFieldError {
    /// Field name as shown to users
    pub field: &'static str,
    /// Rejected value
    pub value: String,
    /// Comma-separated accepted values
    pub expected: &'static str,
}

/// Profile validation failure carrying one message per violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input: {}", .errors.join(", "))]
pub struct InvalidProfile {
    /// Ordered, non-empty list of violations
    pub errors: Vec<String>,
}

impl From<InvalidProfile> for AppError {
    fn from(error: InvalidProfile) -> Self {
        Self::invalid_profile(&error.errors)
    }
}

/// Gender used to select the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    /// Male equation
    Male,
    /// Female equation
    Female,
    /// Mean of the male and female equations
    Other,
}

impl Gender {
    /// Every accepted value, in declaration order
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = ParseProfileFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ParseProfileFieldError {
                field: "gender",
                value: s.to_owned(),
                expected: "male, female, other",
            }),
        }
    }
}

/// Weekly activity level, keyed into the activity multiplier table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or physical job
    ExtremelyActive,
}

impl ActivityLevel {
    /// Every accepted value, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly-active",
            Self::ModeratelyActive => "moderately-active",
            Self::VeryActive => "very-active",
            Self::ExtremelyActive => "extremely-active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseProfileFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly-active" => Ok(Self::LightlyActive),
            "moderately-active" => Ok(Self::ModeratelyActive),
            "very-active" => Ok(Self::VeryActive),
            "extremely-active" => Ok(Self::ExtremelyActive),
            _ => Err(ParseProfileFieldError {
                field: "activity level",
                value: s.to_owned(),
                expected: "sedentary, lightly-active, moderately-active, very-active, extremely-active",
            }),
        }
    }
}

/// Fitness goal, keyed into the goal adjustment and recommendation tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Calorie deficit
    WeightLoss,
    /// Calorie surplus
    WeightGain,
    /// Maintenance calories, body recomposition
    LeanBody,
}

impl FitnessGoal {
    /// Every accepted value, in declaration order
    pub const ALL: [Self; 3] = [Self::WeightLoss, Self::WeightGain, Self::LeanBody];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::WeightGain => "weight-gain",
            Self::LeanBody => "lean-body",
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = ParseProfileFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weight-loss" => Ok(Self::WeightLoss),
            "weight-gain" => Ok(Self::WeightGain),
            "lean-body" => Ok(Self::LeanBody),
            _ => Err(ParseProfileFieldError {
                field: "fitness goal",
                value: s.to_owned(),
                expected: "weight-loss, weight-gain, lean-body",
            }),
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

impl_display_as_str!(Gender, ActivityLevel, FitnessGoal);

/// Profile as submitted by a client, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Age in years
    #[serde(default)]
    pub age: Option<i64>,
    /// `male`, `female` or `other`
    #[serde(default)]
    pub gender: Option<String>,
    /// Height in centimeters
    #[serde(default)]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// One of the five activity levels
    #[serde(default)]
    pub activity_level: Option<String>,
    /// One of the three fitness goals
    #[serde(default)]
    pub fitness_goal: Option<String>,
}

impl ProfileInput {
    /// Build a fully populated input from typed values
    #[must_use]
    pub fn new(
        age: i64,
        gender: Gender,
        height: f64,
        weight: f64,
        activity_level: ActivityLevel,
        fitness_goal: FitnessGoal,
    ) -> Self {
        Self {
            age: Some(age),
            gender: Some(gender.as_str().to_owned()),
            height: Some(height),
            weight: Some(weight),
            activity_level: Some(activity_level.as_str().to_owned()),
            fitness_goal: Some(fitness_goal.as_str().to_owned()),
        }
    }

    /// Validate every field and produce an immutable [`UserProfile`]
    ///
    /// All checks run; the error lists violations in field order
    /// (age, height, weight, gender, activity level, fitness goal).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidProfile`] when at least one constraint is violated
    pub fn validate(&self) -> Result<UserProfile, InvalidProfile> {
        let mut errors = Vec::new();

        let age = self
            .age
            .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
            .and_then(|age| u32::try_from(age).ok());
        if age.is_none() {
            errors.push(AGE_VIOLATION.to_owned());
        }

        let height = within(self.height, MIN_HEIGHT_CM, MAX_HEIGHT_CM);
        if height.is_none() {
            errors.push(HEIGHT_VIOLATION.to_owned());
        }

        let weight = within(self.weight, MIN_WEIGHT_KG, MAX_WEIGHT_KG);
        if weight.is_none() {
            errors.push(WEIGHT_VIOLATION.to_owned());
        }

        let gender = parse_choice(self.gender.as_deref(), "Please select a gender", &mut errors);
        let activity_level = parse_choice(
            self.activity_level.as_deref(),
            "Please select an activity level",
            &mut errors,
        );
        let fitness_goal = parse_choice(
            self.fitness_goal.as_deref(),
            "Please select a fitness goal",
            &mut errors,
        );

        match (age, height, weight, gender, activity_level, fitness_goal) {
            (
                Some(age),
                Some(height_cm),
                Some(weight_kg),
                Some(gender),
                Some(activity_level),
                Some(fitness_goal),
            ) => Ok(UserProfile {
                age,
                gender,
                height_cm,
                weight_kg,
                activity_level,
                fitness_goal,
            }),
            _ => Err(InvalidProfile { errors }),
        }
    }
}

fn within(value: Option<f64>, min: f64, max: f64) -> Option<f64> {
    value.filter(|v| v.is_finite() && (min..=max).contains(v))
}

fn parse_choice<T>(raw: Option<&str>, missing: &str, errors: &mut Vec<String>) -> Option<T>
where
    T: FromStr<Err = ParseProfileFieldError>,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => {
            errors.push(missing.to_owned());
            None
        }
        Some(value) => value
            .parse()
            .map_err(|e: ParseProfileFieldError| errors.push(e.to_string()))
            .ok(),
    }
}

/// Validated, immutable user profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserProfile {
    age: u32,
    gender: Gender,
    #[serde(rename = "height")]
    height_cm: f64,
    #[serde(rename = "weight")]
    weight_kg: f64,
    activity_level: ActivityLevel,
    fitness_goal: FitnessGoal,
}

impl UserProfile {
    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Gender
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Activity level
    #[must_use]
    pub const fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Fitness goal
    #[must_use]
    pub const fn fitness_goal(&self) -> FitnessGoal {
        self.fitness_goal
    }
}
