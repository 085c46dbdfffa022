// ABOUTME: Static reference dataset for health plan generation
// ABOUTME: Typed tables (BMI bands, multipliers, goal splits, recommendations) validated once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Reference Dataset
//!
//! Every constant the engine consults lives here as an explicitly typed,
//! read-only table. [`ReferenceDataset::load`] builds the built-in tables and
//! validates them once; a malformed dataset is a startup failure, never a
//! request-time one.
//!
//! Each table keyed by goal or activity level carries its own named fallback
//! (see [`fallback`]). A missing key can only occur when a dataset is built by
//! hand with entries removed; the lookup then logs a warning and uses the
//! fallback instead of failing.

mod builtin;

use fitplan_core::models::{ActivityLevel, FitnessGoal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

/// Granularity of rounded BMI values; adjacent bands must be exactly this far apart
pub const BMI_RESOLUTION: f64 = 0.1;

const FLOAT_TOLERANCE: f64 = 1e-9;

/// Named fallbacks used when a lookup key is absent from its table
pub mod fallback {
    use super::MacroRatios;
    use fitplan_core::models::FitnessGoal;

    /// Activity multiplier when the activity level is unmapped
    pub const ACTIVITY_MULTIPLIER: f64 = 1.2;
    /// Calorie adjustment when the goal is unmapped
    pub const CALORIE_ADJUSTMENT: i32 = 0;
    /// Macro split when the goal is unmapped (30/45/25)
    pub const MACRO_RATIOS: MacroRatios = MacroRatios {
        protein: 0.30,
        carbs: 0.45,
        fat: 0.25,
    };
    /// Goal whose recommendation and timeline bundles stand in for a missing goal
    pub const RECOMMENDATION_GOAL: FitnessGoal = FitnessGoal::LeanBody;
    /// Category when no BMI band contains the value
    pub const BMI_CATEGORY: &str = "Unknown";
    /// Neutral display color for an unknown BMI category
    pub const BMI_COLOR: &str = "#718096";
}

/// Errors detected while validating a reference dataset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// No BMI bands were declared
    #[error("BMI category bands must not be empty")]
    EmptyBmiBands,
    /// A band has non-finite bounds or min above max
    #[error("BMI band {index} ('{category}') has invalid bounds {min}..={max}")]
    InvalidBand {
        /// Position in declaration order
        index: usize,
        /// Band label
        category: String,
        /// Declared lower bound
        min: f64,
        /// Declared upper bound
        max: f64,
    },
    /// Two adjacent bands leave a gap or overlap
    #[error("BMI band {index} must start at {expected_min} to follow the previous band, found {actual_min}")]
    NonContiguousBands {
        /// Position of the offending band
        index: usize,
        /// Previous band max plus one resolution step
        expected_min: f64,
        /// Declared lower bound
        actual_min: f64,
    },
    /// An activity multiplier is not a positive finite number
    #[error("Activity multiplier for {level} must be positive, found {value}")]
    InvalidMultiplier {
        /// Activity level key
        level: ActivityLevel,
        /// Declared multiplier
        value: f64,
    },
    /// Macro ratios for a goal are negative or do not sum to 1.0
    #[error("Macro ratios for {goal} must be non-negative and sum to 1.0, found sum {sum}")]
    InvalidRatios {
        /// Goal key
        goal: FitnessGoal,
        /// Sum of the three ratios
        sum: f64,
    },
    /// A table lacks the entry its fallback policy relies on
    #[error("Reference table '{table}' is missing its fallback entry for {goal}")]
    MissingFallback {
        /// Table name
        table: &'static str,
        /// Fallback key
        goal: FitnessGoal,
    },
}

/// One BMI category band, inclusive on both ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiBand {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
    /// Category label
    pub category: String,
    /// Display color (hex)
    pub color: String,
}

impl BmiBand {
    /// Whether the band contains the value
    #[must_use]
    pub fn contains(&self, bmi: f64) -> bool {
        bmi >= self.min && bmi <= self.max
    }
}

/// Protein/carbs/fat share of daily calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    /// Protein share (0.0-1.0)
    pub protein: f64,
    /// Carbohydrate share (0.0-1.0)
    pub carbs: f64,
    /// Fat share (0.0-1.0)
    pub fat: f64,
}

impl MacroRatios {
    /// Sum of the three shares
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Calorie adjustment and macro split for a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustment {
    /// Signed kcal added to TDEE
    pub calorie_adjustment: i32,
    /// Macro split
    pub ratios: MacroRatios,
    /// Short description
    pub description: String,
}

/// Hydration guidance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterIntakeReference {
    /// Recommendation for activity levels without an override
    pub base: String,
    /// Recommendation overrides by activity tier
    pub activity_overrides: BTreeMap<ActivityLevel, String>,
    /// General hydration factors
    pub factors: Vec<String>,
}

/// Sleep guidance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepReference {
    /// Recommended nightly duration
    pub duration: String,
    /// Sleep-quality practices
    pub quality: Vec<String>,
}

/// Exercise suggestions for a goal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecommendations {
    /// Cardio suggestions
    pub cardio: Vec<String>,
    /// Strength training suggestions
    pub strength: Vec<String>,
    /// Flexibility and recovery suggestions
    pub flexibility: Vec<String>,
}

/// Expected progress for a goal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEstimate {
    /// Safe rate of progress
    pub safe_rate: String,
    /// Typical duration before results
    pub typical_duration: String,
    /// Progress milestones
    pub milestones: Vec<String>,
}

/// Why a nutrient matters and where to get it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientReference {
    /// Nutrient name
    pub name: String,
    /// Food sources
    pub sources: Vec<String>,
    /// Health benefits
    pub benefits: String,
    /// Daily recommendation
    pub daily: String,
}

static EMPTY_ACTIVITY_RECOMMENDATIONS: ActivityRecommendations = ActivityRecommendations {
    cardio: Vec::new(),
    strength: Vec::new(),
    flexibility: Vec::new(),
};

static EMPTY_TIMELINE_ESTIMATE: TimelineEstimate = TimelineEstimate {
    safe_rate: String::new(),
    typical_duration: String::new(),
    milestones: Vec::new(),
};

/// Frozen reference tables consulted by the health metrics engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDataset {
    /// BMI bands in scan order
    pub bmi_bands: Vec<BmiBand>,
    /// TDEE multiplier per activity level
    pub activity_multipliers: BTreeMap<ActivityLevel, f64>,
    /// Calorie adjustment and macro split per goal
    pub goal_adjustments: BTreeMap<FitnessGoal, GoalAdjustment>,
    /// Hydration guidance
    pub water_intake: WaterIntakeReference,
    /// Sleep guidance
    pub sleep: SleepReference,
    /// Exercise suggestions per goal
    pub activity_recommendations: BTreeMap<FitnessGoal, ActivityRecommendations>,
    /// Progress expectations per goal
    pub timeline_estimates: BTreeMap<FitnessGoal, TimelineEstimate>,
    /// Nutrient importance reference, in display order
    pub nutrients: Vec<NutrientReference>,
    /// General health tips
    pub health_tips: Vec<String>,
}

impl ReferenceDataset {
    /// Built-in tables, unvalidated
    #[must_use]
    pub fn builtin() -> Self {
        builtin::dataset()
    }

    /// Build and validate the built-in tables
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the built-in tables are malformed
    pub fn load() -> Result<Self, DatasetError> {
        let dataset = Self::builtin();
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check structural invariants of the tables
    ///
    /// # Errors
    ///
    /// Returns the first [`DatasetError`] found
    pub fn validate(&self) -> Result<(), DatasetError> {
        self.validate_bmi_bands()?;

        for (&level, &value) in &self.activity_multipliers {
            if !value.is_finite() || value <= 0.0 {
                return Err(DatasetError::InvalidMultiplier { level, value });
            }
        }

        for (&goal, adjustment) in &self.goal_adjustments {
            let ratios = adjustment.ratios;
            let sum = ratios.sum();
            let negative = ratios.protein < 0.0 || ratios.carbs < 0.0 || ratios.fat < 0.0;
            if negative || (sum - 1.0).abs() > FLOAT_TOLERANCE {
                return Err(DatasetError::InvalidRatios { goal, sum });
            }
        }

        if !self
            .activity_recommendations
            .contains_key(&fallback::RECOMMENDATION_GOAL)
        {
            return Err(DatasetError::MissingFallback {
                table: "activity_recommendations",
                goal: fallback::RECOMMENDATION_GOAL,
            });
        }
        if !self
            .timeline_estimates
            .contains_key(&fallback::RECOMMENDATION_GOAL)
        {
            return Err(DatasetError::MissingFallback {
                table: "timeline_estimates",
                goal: fallback::RECOMMENDATION_GOAL,
            });
        }

        Ok(())
    }

    fn validate_bmi_bands(&self) -> Result<(), DatasetError> {
        if self.bmi_bands.is_empty() {
            return Err(DatasetError::EmptyBmiBands);
        }

        for (index, band) in self.bmi_bands.iter().enumerate() {
            if !band.min.is_finite() || !band.max.is_finite() || band.min > band.max {
                return Err(DatasetError::InvalidBand {
                    index,
                    category: band.category.clone(),
                    min: band.min,
                    max: band.max,
                });
            }
        }

        for (index, pair) in self.bmi_bands.windows(2).enumerate() {
            let expected_min = pair[0].max + BMI_RESOLUTION;
            if (pair[1].min - expected_min).abs() > FLOAT_TOLERANCE {
                return Err(DatasetError::NonContiguousBands {
                    index: index + 1,
                    expected_min,
                    actual_min: pair[1].min,
                });
            }
        }

        Ok(())
    }

    /// First band containing the value, in declared order
    #[must_use]
    pub fn bmi_band(&self, bmi: f64) -> Option<&BmiBand> {
        self.bmi_bands.iter().find(|band| band.contains(bmi))
    }

    /// TDEE multiplier for an activity level, falling back to 1.2
    #[must_use]
    pub fn activity_multiplier(&self, level: ActivityLevel) -> f64 {
        self.activity_multipliers
            .get(&level)
            .copied()
            .unwrap_or_else(|| {
                warn!(activity_level = %level, fallback = fallback::ACTIVITY_MULTIPLIER, "Activity level missing from multiplier table");
                fallback::ACTIVITY_MULTIPLIER
            })
    }

    /// Calorie adjustment for a goal, falling back to 0
    #[must_use]
    pub fn calorie_adjustment(&self, goal: FitnessGoal) -> i32 {
        self.goal_adjustments.get(&goal).map_or_else(
            || {
                warn!(fitness_goal = %goal, "Goal missing from adjustment table, using no adjustment");
                fallback::CALORIE_ADJUSTMENT
            },
            |adjustment| adjustment.calorie_adjustment,
        )
    }

    /// Macro split for a goal, falling back to 30/45/25
    #[must_use]
    pub fn macro_ratios(&self, goal: FitnessGoal) -> MacroRatios {
        self.goal_adjustments.get(&goal).map_or_else(
            || {
                warn!(fitness_goal = %goal, "Goal missing from adjustment table, using default macro split");
                fallback::MACRO_RATIOS
            },
            |adjustment| adjustment.ratios,
        )
    }

    /// Water intake text: the activity-tier override if any, else the base text
    #[must_use]
    pub fn water_intake(&self, level: ActivityLevel) -> &str {
        self.water_intake
            .activity_overrides
            .get(&level)
            .map_or(self.water_intake.base.as_str(), String::as_str)
    }

    /// Fixed sleep duration recommendation
    #[must_use]
    pub fn sleep_recommendation(&self) -> &str {
        &self.sleep.duration
    }

    /// Exercise bundle for a goal, falling back to the lean-body bundle
    #[must_use]
    pub fn activity_recommendations(&self, goal: FitnessGoal) -> &ActivityRecommendations {
        lookup_with_fallback(
            &self.activity_recommendations,
            goal,
            "activity_recommendations",
            &EMPTY_ACTIVITY_RECOMMENDATIONS,
        )
    }

    /// Timeline bundle for a goal, falling back to the lean-body bundle
    #[must_use]
    pub fn timeline_estimates(&self, goal: FitnessGoal) -> &TimelineEstimate {
        lookup_with_fallback(
            &self.timeline_estimates,
            goal,
            "timeline_estimates",
            &EMPTY_TIMELINE_ESTIMATE,
        )
    }
}

fn lookup_with_fallback<'a, T>(
    table: &'a BTreeMap<FitnessGoal, T>,
    goal: FitnessGoal,
    table_name: &'static str,
    empty: &'a T,
) -> &'a T {
    if let Some(entry) = table.get(&goal) {
        return entry;
    }

    warn!(table = table_name, fitness_goal = %goal, fallback = %fallback::RECOMMENDATION_GOAL, "Goal missing from reference table");
    table.get(&fallback::RECOMMENDATION_GOAL).unwrap_or(empty)
}
