// ABOUTME: HTTP integration tests for analytics routes
// ABOUTME: Overview distributions, per-goal averages, trend windows and population insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use chrono::Utc;
use fitplan_core::models::{FitnessGoal, Gender, ProfileInput};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

async fn generate(app: &axum::Router, input: &ProfileInput) {
    let response = AxumTestRequest::post("/api/v1/health-plans/generate")
        .json(input)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
}

async fn get_json(app: &axum::Router, uri: &str) -> Value {
    let response = AxumTestRequest::get(uri).send(app.clone()).await;
    assert_eq!(response.status(), 200, "GET {uri}");
    response.json()
}

// ============================================================================
// GET /analytics/overview
// ============================================================================

#[tokio::test]
async fn test_overview_empty_database() {
    let (app, _resources) = common::create_test_app().await;

    let body = get_json(&app, "/api/v1/analytics/overview").await;

    assert_eq!(body["total_plans_generated"], 0);
    assert_eq!(body["plans_today"], 0);
    assert_eq!(body["plans_this_week"], 0);
    assert_eq!(body["goal_distribution"], json!({}));
    assert!(body["average_metrics"]["bmi"].is_null());
}

#[tokio::test]
async fn test_overview_distributions() {
    let (app, _resources) = common::create_test_app().await;

    generate(&app, &common::reference_profile()).await;
    generate(&app, &common::profile(19, Gender::Female, FitnessGoal::LeanBody)).await;
    generate(&app, &common::profile(70, Gender::Female, FitnessGoal::LeanBody)).await;

    let body = get_json(&app, "/api/v1/analytics/overview").await;

    assert_eq!(body["total_plans_generated"], 3);
    assert_eq!(body["plans_today"], 3);
    assert_eq!(body["plans_this_week"], 3);
    assert_eq!(
        body["goal_distribution"],
        json!({"lean-body": 2, "weight-loss": 1})
    );
    assert_eq!(body["gender_distribution"], json!({"female": 2, "male": 1}));
    assert_eq!(
        body["age_distribution"],
        json!({"18-24": 1, "25-34": 1, "65+": 1})
    );
    assert!(body["average_metrics"]["bmi"].is_number());
    assert!(body["average_metrics"]["daily_calories"].is_number());
    assert!(body["average_metrics"]["bmr"].is_number());
}

// ============================================================================
// GET /analytics/goals/:goal
// ============================================================================

#[tokio::test]
async fn test_goal_analytics_with_plans() {
    let (app, _resources) = common::create_test_app().await;
    generate(&app, &common::reference_profile()).await;

    let body = get_json(&app, "/api/v1/analytics/goals/weight-loss").await;

    assert_eq!(body["goal_type"], "weight-loss");
    assert_eq!(body["total_plans"], 1);
    assert_eq!(body["average_metrics"]["bmi"], 24.7);
    assert_eq!(body["average_metrics"]["daily_calories"], 1725.0);
    assert_eq!(body["average_metrics"]["bmr"], 1854.0);
    assert_eq!(
        body["insights"],
        json!(["Most users are targeting aggressive calorie deficits"])
    );
}

#[tokio::test]
async fn test_goal_analytics_without_plans_renders_empty_averages() {
    let (app, _resources) = common::create_test_app().await;
    generate(&app, &common::reference_profile()).await;

    let body = get_json(&app, "/api/v1/analytics/goals/weight-gain").await;

    assert_eq!(body["goal_type"], "weight-gain");
    assert_eq!(body["total_plans"], 0);
    assert_eq!(body["average_metrics"], json!({}));
    assert_eq!(body["insights"], json!([]));
}

#[tokio::test]
async fn test_goal_analytics_rejects_unknown_goal() {
    let (app, _resources) = common::create_test_app().await;

    let response = AxumTestRequest::get("/api/v1/analytics/goals/bulking")
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "Invalid goal type. Must be one of: weight-loss, weight-gain, lean-body"
    );
}

// ============================================================================
// GET /analytics/trends
// ============================================================================

#[tokio::test]
async fn test_trends_group_by_day_and_goal() {
    let (app, _resources) = common::create_test_app().await;
    generate(&app, &common::reference_profile()).await;
    generate(&app, &common::reference_profile()).await;
    generate(&app, &common::profile(30, Gender::Male, FitnessGoal::WeightGain)).await;

    let body = get_json(&app, "/api/v1/analytics/trends").await;
    let today = Utc::now().format("%Y-%m-%d").to_string();

    assert_eq!(body["period"], "last_30_days");
    assert_eq!(body["daily_trends"], json!([{"date": today, "count": 3}]));
    assert_eq!(body["goal_trends"]["weight-loss"][&today], 2);
    assert_eq!(body["goal_trends"]["weight-gain"][&today], 1);
}

#[tokio::test]
async fn test_trends_empty() {
    let (app, _resources) = common::create_test_app().await;

    let body = get_json(&app, "/api/v1/analytics/trends").await;

    assert_eq!(body["daily_trends"], json!([]));
    assert_eq!(body["goal_trends"], json!({}));
}

// ============================================================================
// GET /analytics/insights
// ============================================================================

#[tokio::test]
async fn test_insights_without_data() {
    let (app, _resources) = common::create_test_app().await;

    let body = get_json(&app, "/api/v1/analytics/insights").await;

    assert_eq!(body["insights"], json!(["No data available for insights"]));
}

#[tokio::test]
async fn test_insights_describe_population() {
    let (app, _resources) = common::create_test_app().await;
    generate(&app, &common::reference_profile()).await;

    let body = get_json(&app, "/api/v1/analytics/insights").await;

    assert_eq!(
        body["insights"],
        json!([
            "Most popular fitness goal: weight-loss (1 plans)",
            "Average user BMI is in healthy range, suggesting focus on maintenance",
            "Users are generally targeting aggressive calorie deficits",
            "Steady activity today - consistent user engagement"
        ])
    );
}
