// ABOUTME: Integration and property tests for the health metrics engine
// ABOUTME: Covers determinism, macro calorie reconciliation, fallbacks and validation ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use fitplan_core::models::{ActivityLevel, FitnessGoal, Gender, ProfileInput};
use fitplan_intelligence::{
    calculate_bmi, generate_health_plan, generate_health_plan_at, ReferenceDataset,
};
use proptest::prelude::*;

fn dataset() -> ReferenceDataset {
    ReferenceDataset::load().expect("built-in dataset is valid")
}

fn profile_strategy() -> impl Strategy<Value = ProfileInput> {
    (
        13_i64..=120,
        prop::sample::select(Gender::ALL.to_vec()),
        100.0_f64..=250.0,
        30.0_f64..=300.0,
        prop::sample::select(ActivityLevel::ALL.to_vec()),
        prop::sample::select(FitnessGoal::ALL.to_vec()),
    )
        .prop_map(|(age, gender, height, weight, activity, goal)| {
            ProfileInput::new(age, gender, height, weight, activity, goal)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_plan_generation_is_deterministic(input in profile_strategy()) {
        let dataset = dataset();
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap();

        let first = generate_health_plan_at(&input, &dataset, at).unwrap();
        let second = generate_health_plan_at(&input, &dataset, at).unwrap();
        prop_assert_eq!(&first, &second);

        let now = generate_health_plan(&input, &dataset).unwrap();
        prop_assert!(first.same_content(&now));
    }

    #[test]
    fn test_macro_grams_reconcile_with_calorie_target(input in profile_strategy()) {
        let plan = generate_health_plan(&input, &dataset()).unwrap();
        let drift = (plan.macros.total_calories() - plan.daily_calories).abs();

        // Each macro is rounded to half a gram: at most 2 + 2 + 4.5 kcal
        prop_assert!(drift <= 8, "drift {} for {} kcal", drift, plan.daily_calories);
    }

    #[test]
    fn test_percentages_sum_close_to_hundred(input in profile_strategy()) {
        let plan = generate_health_plan(&input, &dataset()).unwrap();
        let sum = plan.macros.percentage_sum();

        prop_assert!((98..=102).contains(&sum), "percentage sum {}", sum);
    }

    #[test]
    fn test_bmi_category_matches_band(weight in 30.0_f64..=300.0, height in 100.0_f64..=250.0) {
        let dataset = dataset();
        let bmi = calculate_bmi(weight, height, &dataset);

        match dataset.bmi_band(bmi.value) {
            Some(band) => {
                prop_assert!(bmi.value >= band.min && bmi.value <= band.max);
                prop_assert_eq!(&bmi.category, &band.category);
            }
            None => prop_assert_eq!(bmi.category.as_str(), "Unknown"),
        }
    }

    #[test]
    fn test_out_of_range_age_always_reported_first(age in prop_oneof![-50_i64..13, 121_i64..500]) {
        let input = ProfileInput {
            age: Some(age),
            ..ProfileInput::new(
                30,
                Gender::Female,
                165.0,
                60.0,
                ActivityLevel::Sedentary,
                FitnessGoal::LeanBody,
            )
        };

        let error = generate_health_plan(&input, &dataset()).unwrap_err();
        prop_assert_eq!(error.errors, vec!["Age must be between 13 and 120 years".to_owned()]);
    }
}

#[test]
fn test_reference_profile_headline_numbers() {
    let input = ProfileInput::new(
        30,
        Gender::Male,
        180.0,
        80.0,
        ActivityLevel::Sedentary,
        FitnessGoal::WeightLoss,
    );

    let plan = generate_health_plan(&input, &dataset()).unwrap();

    assert!((plan.metrics.bmi.value - 24.7).abs() < 1e-9);
    assert_eq!(plan.metrics.bmi.category, "Normal Weight");
    assert_eq!(plan.metrics.bmr, 1854);
    // round(1854 * 1.2) = round(2224.8)
    assert_eq!(plan.metrics.tdee, 2225);
    assert_eq!(plan.daily_calories, 1725);
    assert_eq!(plan.macros.protein.percentage, 30);
    assert_eq!(plan.water_intake, "2.7-3.7 liters per day");
}

#[test]
fn test_empty_input_lists_every_violation_in_order() {
    let error = generate_health_plan(&ProfileInput::default(), &dataset()).unwrap_err();

    assert_eq!(
        error.errors,
        vec![
            "Age must be between 13 and 120 years",
            "Height must be between 100 and 250 cm",
            "Weight must be between 30 and 300 kg",
            "Please select a gender",
            "Please select an activity level",
            "Please select a fitness goal",
        ]
    );
}

#[test]
fn test_unknown_enum_values_are_named() {
    let input = ProfileInput {
        gender: Some("robot".to_owned()),
        fitness_goal: Some("bulk".to_owned()),
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

    assert_eq!(error.errors.len(), 2);
    assert!(error.errors[0].starts_with("Invalid gender 'robot'"));
    assert!(error.errors[1].starts_with("Invalid fitness goal 'bulk'"));
}

#[test]
fn test_missing_goal_tables_fall_back_without_error() {
    let mut dataset = dataset();
    dataset.goal_adjustments.clear();
    dataset.activity_multipliers.clear();
    dataset.activity_recommendations.remove(&FitnessGoal::WeightLoss);
    dataset.timeline_estimates.remove(&FitnessGoal::WeightLoss);

    let input = ProfileInput::new(
        30,
        Gender::Male,
        180.0,
        80.0,
        ActivityLevel::VeryActive,
        FitnessGoal::WeightLoss,
    );
    let plan = generate_health_plan(&input, &dataset).unwrap();

    // multiplier falls back to 1.2, adjustment to 0
    assert_eq!(plan.metrics.tdee, 2225);
    assert_eq!(plan.daily_calories, 2225);
    assert_eq!(plan.macros.carbs.percentage, 45);
    assert_eq!(
        plan.timeline_estimates.safe_rate,
        "Maintain weight while improving body composition"
    );
    assert_eq!(
        plan.activity_recommendations,
        dataset.activity_recommendations[&FitnessGoal::LeanBody]
    );
}

#[test]
fn test_extreme_profile_keeps_unclamped_negative_targets() {
    // Oldest, shortest and lightest valid profile on a deficit goal
    let input = ProfileInput::new(
        120,
        Gender::Male,
        100.0,
        30.0,
        ActivityLevel::Sedentary,
        FitnessGoal::WeightLoss,
    );

    let plan = generate_health_plan(&input, &dataset()).unwrap();

    assert_eq!(plan.metrics.bmr, 289);
    assert_eq!(plan.metrics.tdee, 347);
    assert_eq!(plan.daily_calories, -153);
    assert_eq!(plan.macros.protein.grams, -11);
    assert_eq!(plan.macros.carbs.grams, -15);
    assert_eq!(plan.macros.fat.grams, -5);
}
