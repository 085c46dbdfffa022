// ABOUTME: Health plan output records produced by the metrics engine
// ABOUTME: BMI result, headline metrics, macronutrient breakdown and the assembled plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use crate::reference::{ActivityRecommendations, NutrientReference, TimelineEstimate};
use chrono::{DateTime, Utc};
use fitplan_core::models::UserProfile;
use serde::{Deserialize, Serialize};

/// Energy density of protein and carbohydrates (kcal per gram)
pub const KCAL_PER_GRAM_PROTEIN: i32 = 4;
/// Energy density of carbohydrates (kcal per gram)
pub const KCAL_PER_GRAM_CARBS: i32 = 4;
/// Energy density of fat (kcal per gram)
pub const KCAL_PER_GRAM_FAT: i32 = 9;

/// Rounded BMI with its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal
    pub value: f64,
    /// Category label, `Unknown` outside every band
    pub category: String,
    /// Display color for the category
    pub color: String,
}

/// Headline body metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Body mass index
    pub bmi: BmiResult,
    /// Basal metabolic rate (kcal/day)
    pub bmr: i32,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: i32,
}

/// Target for a single macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTarget {
    /// Daily grams
    pub grams: i32,
    /// Share of daily calories (whole percent)
    pub percentage: i32,
}

/// Protein, carbohydrate and fat targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein target
    pub protein: MacroTarget,
    /// Carbohydrate target
    pub carbs: MacroTarget,
    /// Fat target
    pub fat: MacroTarget,
}

impl MacroBreakdown {
    /// Calories implied by the gram targets
    #[must_use]
    pub const fn total_calories(&self) -> i32 {
        self.protein.grams * KCAL_PER_GRAM_PROTEIN
            + self.carbs.grams * KCAL_PER_GRAM_CARBS
            + self.fat.grams * KCAL_PER_GRAM_FAT
    }

    /// Sum of the three rounded percentages; not reconciled to 100
    #[must_use]
    pub const fn percentage_sum(&self) -> i32 {
        self.protein.percentage + self.carbs.percentage + self.fat.percentage
    }
}

/// Complete personalized plan for one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPlan {
    /// Validated input profile
    #[serde(rename = "user_data")]
    pub user_data: UserProfile,
    /// BMI, BMR and TDEE
    pub metrics: HealthMetrics,
    /// Daily calorie target
    pub daily_calories: i32,
    /// Macronutrient targets
    pub macros: MacroBreakdown,
    /// Hydration recommendation
    pub water_intake: String,
    /// Sleep duration recommendation
    pub sleep_recommendation: String,
    /// Exercise suggestions for the goal
    pub activity_recommendations: ActivityRecommendations,
    /// Expected progress for the goal
    pub timeline_estimates: TimelineEstimate,
    /// Nutrient reference
    pub nutrients: Vec<NutrientReference>,
    /// General health tips
    pub health_tips: Vec<String>,
    /// Generation time (UTC)
    pub created_at: DateTime<Utc>,
}

impl HealthPlan {
    /// Whether two plans agree on everything except their timestamps
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        Self {
            created_at: other.created_at,
            ..self.clone()
        } == *other
    }
}
