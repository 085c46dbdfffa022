// ABOUTME: HTTP integration tests for health plan routes
// ABOUTME: Generation, validation failures, stored summaries, lookup, deletion and the summary view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use fitplan_core::models::{FitnessGoal, Gender, ProfileInput};
use fitplan_server::server::build_router;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::Arc;

const GENERATE: &str = "/api/v1/health-plans/generate";

async fn generate(app: &axum::Router, input: &ProfileInput) -> Value {
    let response = AxumTestRequest::post(GENERATE)
        .json(input)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    response.json()
}

// ============================================================================
// POST /health-plans/generate
// ============================================================================

#[tokio::test]
async fn test_generate_reference_profile() {
    let (app, _resources) = common::create_test_app().await;

    let body = generate(&app, &common::reference_profile()).await;

    assert_eq!(body["metrics"]["bmi"]["value"], 24.7);
    assert_eq!(body["metrics"]["bmi"]["category"], "Normal Weight");
    assert_eq!(body["metrics"]["bmr"], 1854);
    assert_eq!(body["metrics"]["tdee"], 2225);
    assert_eq!(body["dailyCalories"], 1725);
    assert_eq!(body["macros"]["protein"]["percentage"], 30);
    assert_eq!(body["waterIntake"], "2.7-3.7 liters per day");

    assert_eq!(body["user_data"]["age"], 30);
    assert_eq!(body["user_data"]["gender"], "male");
    assert_eq!(body["user_data"]["height"], 180.0);
    assert_eq!(body["user_data"]["fitness_goal"], "weight-loss");

    assert!(body["healthTips"].as_array().is_some_and(|t| !t.is_empty()));
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_generate_persists_summary_row() {
    let (app, resources) = common::create_test_app().await;

    generate(&app, &common::reference_profile()).await;

    let stored = resources.database.list_health_plans(0, 10).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].fitness_goal, "weight-loss");
    assert_eq!(stored[0].daily_calories, 1725);
    assert_eq!(stored[0].user_id, None);
}

#[tokio::test]
async fn test_generate_without_persistence_stores_nothing() {
    let resources = common::create_test_resources(false).await;
    let app = build_router(Arc::clone(&resources));

    generate(&app, &common::reference_profile()).await;

    let stored = resources.database.list_health_plans(0, 10).await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_generate_rejects_invalid_profile_with_every_violation() {
    let (app, resources) = common::create_test_app().await;

    let response = AxumTestRequest::post(GENERATE)
        .json(&json!({
            "age": 5,
            "gender": "male",
            "height": 90,
            "weight": 80,
            "activity_level": "sedentary",
            "fitness_goal": "bulk"
        }))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let errors = body["error"]["details"]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0], "Age must be between 13 and 120 years");
    assert_eq!(errors[1], "Height must be between 100 and 250 cm");
    assert!(errors[2].as_str().unwrap().contains("bulk"));

    let stored = resources.database.list_health_plans(0, 10).await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_generate_rejects_empty_object() {
    let (app, _resources) = common::create_test_app().await;

    let response = AxumTestRequest::post(GENERATE)
        .json(&json!({}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["details"]["errors"].as_array().map(Vec::len),
        Some(6)
    );
}

#[tokio::test]
async fn test_generate_rejects_malformed_json() {
    let (app, _resources) = common::create_test_app().await;

    let response = AxumTestRequest::post(GENERATE)
        .raw_json("{\"age\": 30,")
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_generate_rejects_wrongly_typed_field() {
    let (app, _resources) = common::create_test_app().await;

    let response = AxumTestRequest::post(GENERATE)
        .json(&json!({"age": "thirty"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
}

// ============================================================================
// GET /health-plans
// ============================================================================

#[tokio::test]
async fn test_list_health_plans_with_pagination() {
    let (app, _resources) = common::create_test_app().await;

    for goal in FitnessGoal::ALL {
        generate(&app, &common::profile(40, Gender::Female, goal)).await;
    }

    let response = AxumTestRequest::get("/api/v1/health-plans")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let all: Vec<Value> = response.json();
    assert_eq!(all.len(), 3);

    let response = AxumTestRequest::get("/api/v1/health-plans?skip=1&limit=1")
        .send(app)
        .await;
    let page: Vec<Value> = response.json();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["id"], all[1]["id"]);
}

// ============================================================================
// GET /health-plans/:id and DELETE /health-plans/:id
// ============================================================================

#[tokio::test]
async fn test_get_missing_plan_is_not_found() {
    let (app, _resources) = common::create_test_app().await;

    let response = AxumTestRequest::get("/api/v1/health-plans/999")
        .send(app)
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Health plan not found");
}

#[tokio::test]
async fn test_get_existing_plan_is_not_implemented() {
    let (app, resources) = common::create_test_app().await;
    generate(&app, &common::reference_profile()).await;
    let id = resources.database.list_health_plans(0, 1).await.unwrap()[0].id;

    let response = AxumTestRequest::get(&format!("/api/v1/health-plans/{id}"))
        .send(app)
        .await;

    assert_eq!(response.status(), 501);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "Retrieving stored health plans not yet implemented"
    );
}

#[tokio::test]
async fn test_delete_plan() {
    let (app, resources) = common::create_test_app().await;
    generate(&app, &common::reference_profile()).await;
    let id = resources.database.list_health_plans(0, 1).await.unwrap()[0].id;
    let uri = format!("/api/v1/health-plans/{id}");

    let response = AxumTestRequest::delete(&uri).send(app.clone()).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Health plan deleted successfully");

    let response = AxumTestRequest::delete(&uri).send(app).await;
    assert_eq!(response.status(), 404);
}

// ============================================================================
// GET /health-plans/analytics/summary
// ============================================================================

#[tokio::test]
async fn test_summary_empty() {
    let (app, _resources) = common::create_test_app().await;

    let response = AxumTestRequest::get("/api/v1/health-plans/analytics/summary")
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["total_plans_generated"], 0);
    assert_eq!(body["goal_distribution"], json!({}));
    assert!(body["average_bmi"].is_null());
}

#[tokio::test]
async fn test_summary_counts_goals() {
    let (app, _resources) = common::create_test_app().await;

    generate(&app, &common::reference_profile()).await;
    generate(&app, &common::reference_profile()).await;
    generate(&app, &common::profile(25, Gender::Male, FitnessGoal::WeightGain)).await;

    let response = AxumTestRequest::get("/api/v1/health-plans/analytics/summary")
        .send(app)
        .await;

    let body: Value = response.json();
    assert_eq!(body["total_plans_generated"], 3);
    assert_eq!(body["goal_distribution"]["weight-loss"], 2);
    assert_eq!(body["goal_distribution"]["weight-gain"], 1);
    assert!(body["average_bmi"].is_number());
    assert!(body["average_daily_calories"].is_number());
}
