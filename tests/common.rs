// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory databases, server resources and sample profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitplan_server`

use fitplan_core::models::{ActivityLevel, FitnessGoal, Gender, ProfileInput};
use fitplan_intelligence::ReferenceDataset;
use fitplan_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    resources::ServerResources,
    server::build_router,
};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration pointing at an in-memory database
pub fn test_config(persist_health_plans: bool) -> ServerConfig {
    let mut config = ServerConfig::from_lookup(|_| None).expect("default configuration");
    config.database.url = DatabaseUrl::Memory;
    config.database.persist_health_plans = persist_health_plans;
    config
}

/// Standard test database setup
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new(&DatabaseUrl::Memory)
        .await
        .expect("in-memory database")
}

/// Server resources backed by a fresh in-memory database
pub async fn create_test_resources(persist_health_plans: bool) -> Arc<ServerResources> {
    let database = create_test_database().await;
    let dataset = ReferenceDataset::load().expect("built-in dataset is valid");

    Arc::new(ServerResources::new(
        database,
        Arc::new(dataset),
        Arc::new(test_config(persist_health_plans)),
    ))
}

/// Full application router plus the resources behind it
pub async fn create_test_app() -> (axum::Router, Arc<ServerResources>) {
    let resources = create_test_resources(true).await;
    (build_router(Arc::clone(&resources)), resources)
}

/// Male, 30, 180 cm, 80 kg, sedentary, weight loss
pub fn reference_profile() -> ProfileInput {
    ProfileInput::new(
        30,
        Gender::Male,
        180.0,
        80.0,
        ActivityLevel::Sedentary,
        FitnessGoal::WeightLoss,
    )
}

/// Profile with a chosen age, gender and goal
pub fn profile(age: i64, gender: Gender, goal: FitnessGoal) -> ProfileInput {
    ProfileInput::new(age, gender, 170.0, 70.0, ActivityLevel::ModeratelyActive, goal)
}
