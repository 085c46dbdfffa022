// ABOUTME: Health metrics pipeline: validation, BMI, BMR, TDEE, calorie target and macros
// ABOUTME: Pure functions over a validated profile and the reference dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Health metrics calculator
//!
//! Every stage is a pure function. Rounding is half away from zero
//! ([`f64::round`]) at each stage boundary, so later stages see the rounded
//! output of earlier ones.

use crate::plan::{
    BmiResult, HealthMetrics, HealthPlan, MacroBreakdown, MacroTarget, KCAL_PER_GRAM_CARBS,
    KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use crate::reference::{fallback, MacroRatios, ReferenceDataset};
use chrono::{DateTime, Utc};
use fitplan_core::models::{
    ActivityLevel, FitnessGoal, Gender, InvalidProfile, ProfileInput, UserProfile,
};
use tracing::debug;

/// Harris-Benedict coefficients: (constant, weight, height, age)
mod coefficients {
    pub const MALE: (f64, f64, f64, f64) = (88.362, 13.397, 4.799, 5.677);
    pub const FEMALE: (f64, f64, f64, f64) = (447.593, 9.247, 3.098, 4.330);
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

fn harris_benedict(
    (constant, per_kg, per_cm, per_year): (f64, f64, f64, f64),
    weight_kg: f64,
    height_cm: f64,
    age: u32,
) -> f64 {
    per_year.mul_add(
        -f64::from(age),
        per_cm.mul_add(height_cm, per_kg.mul_add(weight_kg, constant)),
    )
}

/// Body mass index rounded to one decimal, categorized by the dataset's bands
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64, dataset: &ReferenceDataset) -> BmiResult {
    let height_m = height_cm / 100.0;
    let value = round_to(weight_kg / (height_m * height_m), 1);

    dataset.bmi_band(value).map_or_else(
        || BmiResult {
            value,
            category: fallback::BMI_CATEGORY.to_owned(),
            color: fallback::BMI_COLOR.to_owned(),
        },
        |band| BmiResult {
            value,
            category: band.category.clone(),
            color: band.color.clone(),
        },
    )
}

/// Basal metabolic rate (Harris-Benedict), rounded to whole kcal
///
/// `Other` uses the mean of the male and female equations, taken before rounding.
#[must_use]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> i32 {
    let male = || harris_benedict(coefficients::MALE, weight_kg, height_cm, age);
    let female = || harris_benedict(coefficients::FEMALE, weight_kg, height_cm, age);

    let bmr = match gender {
        Gender::Male => male(),
        Gender::Female => female(),
        Gender::Other => (male() + female()) / 2.0,
    };

    bmr.round() as i32
}

/// Total daily energy expenditure
#[must_use]
pub fn calculate_tdee(bmr: i32, activity_level: ActivityLevel, dataset: &ReferenceDataset) -> i32 {
    (f64::from(bmr) * dataset.activity_multiplier(activity_level)).round() as i32
}

/// Daily calorie target for a goal; may be negative for extreme profiles
#[must_use]
pub fn calculate_daily_calories(tdee: i32, goal: FitnessGoal, dataset: &ReferenceDataset) -> i32 {
    tdee + dataset.calorie_adjustment(goal)
}

fn macro_target(daily_calories: i32, ratio: f64, kcal_per_gram: i32) -> MacroTarget {
    MacroTarget {
        grams: (f64::from(daily_calories) * ratio / f64::from(kcal_per_gram)).round() as i32,
        percentage: (ratio * 100.0).round() as i32,
    }
}

/// Macronutrient breakdown, each macro rounded independently
#[must_use]
pub fn calculate_macros(
    daily_calories: i32,
    goal: FitnessGoal,
    dataset: &ReferenceDataset,
) -> MacroBreakdown {
    let MacroRatios {
        protein,
        carbs,
        fat,
    } = dataset.macro_ratios(goal);

    MacroBreakdown {
        protein: macro_target(daily_calories, protein, KCAL_PER_GRAM_PROTEIN),
        carbs: macro_target(daily_calories, carbs, KCAL_PER_GRAM_CARBS),
        fat: macro_target(daily_calories, fat, KCAL_PER_GRAM_FAT),
    }
}

/// Assemble a plan for an already validated profile
#[must_use]
pub fn build_health_plan(
    profile: UserProfile,
    dataset: &ReferenceDataset,
    created_at: DateTime<Utc>,
) -> HealthPlan {
    let bmi = calculate_bmi(profile.weight_kg(), profile.height_cm(), dataset);
    let bmr = calculate_bmr(
        profile.weight_kg(),
        profile.height_cm(),
        profile.age(),
        profile.gender(),
    );
    let tdee = calculate_tdee(bmr, profile.activity_level(), dataset);
    let daily_calories = calculate_daily_calories(tdee, profile.fitness_goal(), dataset);
    let macros = calculate_macros(daily_calories, profile.fitness_goal(), dataset);

    debug!(
        bmi = bmi.value,
        bmr,
        tdee,
        daily_calories,
        fitness_goal = %profile.fitness_goal(),
        "Computed health metrics"
    );

    HealthPlan {
        user_data: profile,
        metrics: HealthMetrics { bmi, bmr, tdee },
        daily_calories,
        macros,
        water_intake: dataset.water_intake(profile.activity_level()).to_owned(),
        sleep_recommendation: dataset.sleep_recommendation().to_owned(),
        activity_recommendations: dataset
            .activity_recommendations(profile.fitness_goal())
            .clone(),
        timeline_estimates: dataset.timeline_estimates(profile.fitness_goal()).clone(),
        nutrients: dataset.nutrients.clone(),
        health_tips: dataset.health_tips.clone(),
        created_at,
    }
}

/// Validate raw input and generate a plan stamped with the given time
///
/// # Errors
///
/// Returns [`InvalidProfile`] listing every violated constraint
pub fn generate_health_plan_at(
    input: &ProfileInput,
    dataset: &ReferenceDataset,
    created_at: DateTime<Utc>,
) -> Result<HealthPlan, InvalidProfile> {
    let profile = input.validate()?;
    Ok(build_health_plan(profile, dataset, created_at))
}

/// Validate raw input and generate a plan stamped with the current time
///
/// # Errors
///
/// Returns [`InvalidProfile`] listing every violated constraint
pub fn generate_health_plan(
    input: &ProfileInput,
    dataset: &ReferenceDataset,
) -> Result<HealthPlan, InvalidProfile> {
    generate_health_plan_at(input, dataset, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> ReferenceDataset {
        ReferenceDataset::load().unwrap()
    }

    #[test]
    fn test_bmi_normal_weight() {
        let bmi = calculate_bmi(70.0, 170.0, &dataset());

        assert!((bmi.value - 24.2).abs() < 1e-9);
        assert_eq!(bmi.category, "Normal Weight");
        assert_eq!(bmi.color, "#48bb78");
    }

    #[test]
    fn test_bmi_category_uses_rounded_value() {
        // 18.46 rounds to 18.5, which sits in the normal band
        let height_cm = 180.0;
        let weight_kg = 18.46 * 1.8 * 1.8;
        let bmi = calculate_bmi(weight_kg, height_cm, &dataset());

        assert!((bmi.value - 18.5).abs() < 1e-9);
        assert_eq!(bmi.category, "Normal Weight");
    }

    #[test]
    fn test_bmi_above_all_bands_is_unknown() {
        let bmi = calculate_bmi(300.0, 50.0, &dataset());

        assert_eq!(bmi.category, "Unknown");
        assert_eq!(bmi.color, "#718096");
    }

    #[test]
    fn test_bmr_male() {
        // 88.362 + 1071.76 + 863.82 - 170.31 = 1853.632
        assert_eq!(calculate_bmr(80.0, 180.0, 30, Gender::Male), 1854);
    }

    #[test]
    fn test_bmr_female() {
        assert_eq!(calculate_bmr(70.0, 170.0, 30, Gender::Female), 1492);
    }

    #[test]
    fn test_bmr_other_is_mean_before_rounding() {
        // male 1671.672, female 1491.643, mean 1581.6575
        assert_eq!(calculate_bmr(70.0, 170.0, 30, Gender::Other), 1582);
    }

    #[test]
    fn test_tdee_sedentary() {
        assert_eq!(calculate_tdee(1853, ActivityLevel::Sedentary, &dataset()), 2224);
    }

    #[test]
    fn test_tdee_extremely_active() {
        assert_eq!(
            calculate_tdee(1800, ActivityLevel::ExtremelyActive, &dataset()),
            3420
        );
    }

    #[test]
    fn test_daily_calories_by_goal() {
        let dataset = dataset();

        assert_eq!(
            calculate_daily_calories(2224, FitnessGoal::WeightLoss, &dataset),
            1724
        );
        assert_eq!(
            calculate_daily_calories(2224, FitnessGoal::WeightGain, &dataset),
            2524
        );
        assert_eq!(
            calculate_daily_calories(2224, FitnessGoal::LeanBody, &dataset),
            2224
        );
    }

    #[test]
    fn test_macros_weight_loss() {
        let macros = calculate_macros(1724, FitnessGoal::WeightLoss, &dataset());

        assert_eq!(macros.protein.grams, 129);
        assert_eq!(macros.protein.percentage, 30);
        assert_eq!(macros.carbs.grams, 172);
        assert_eq!(macros.carbs.percentage, 40);
        assert_eq!(macros.fat.grams, 57);
        assert_eq!(macros.fat.percentage, 30);
    }

    #[test]
    fn test_unmapped_goal_uses_default_split() {
        let mut dataset = dataset();
        dataset.goal_adjustments.clear();

        let macros = calculate_macros(2000, FitnessGoal::WeightGain, &dataset);
        assert_eq!(macros.protein.percentage, 30);
        assert_eq!(macros.carbs.percentage, 45);
        assert_eq!(macros.fat.percentage, 25);
        assert_eq!(
            calculate_daily_calories(2000, FitnessGoal::WeightGain, &dataset),
            2000
        );
    }

    #[test]
    fn test_generate_plan_reports_every_violation() {
        let input = ProfileInput {
            age: Some(10),
            weight: Some(400.0),
            ..ProfileInput::new(
                30,
                Gender::Male,
                180.0,
                80.0,
                ActivityLevel::Sedentary,
                FitnessGoal::WeightLoss,
            )
        };

        let error = generate_health_plan(&input, &dataset()).unwrap_err();
        assert_eq!(
            error.errors,
            vec![
                "Age must be between 13 and 120 years".to_owned(),
                "Weight must be between 30 and 300 kg".to_owned(),
            ]
        );
    }

    #[test]
    fn test_generate_plan_end_to_end() {
        let input = ProfileInput::new(
            30,
            Gender::Male,
            180.0,
            80.0,
            ActivityLevel::ModeratelyActive,
            FitnessGoal::WeightGain,
        );

        let plan = generate_health_plan(&input, &dataset()).unwrap();

        assert_eq!(plan.metrics.bmr, 1854);
        // round(1854 * 1.55) = round(2873.7)
        assert_eq!(plan.metrics.tdee, 2874);
        assert_eq!(plan.daily_calories, 3174);
        assert_eq!(plan.water_intake, "3.5-4.5 liters per day");
        assert_eq!(plan.sleep_recommendation, "7-9 hours per night");
        assert_eq!(plan.timeline_estimates.safe_rate, "0.25-0.5 kg per week");
        assert_eq!(plan.nutrients.len(), 8);
        assert_eq!(plan.health_tips.len(), 15);
    }

    #[test]
    fn test_plan_serializes_with_api_field_names() {
        let input = ProfileInput::new(
            25,
            Gender::Female,
            165.0,
            60.0,
            ActivityLevel::LightlyActive,
            FitnessGoal::LeanBody,
        );
        let plan = generate_health_plan(&input, &dataset()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["user_data"]["gender"], "female");
        assert_eq!(json["user_data"]["activity_level"], "lightly-active");
        assert!(json["dailyCalories"].is_i64());
        assert!(json["timelineEstimates"]["safeRate"].is_string());
        assert!(json["metrics"]["bmi"]["category"].is_string());
    }
}
