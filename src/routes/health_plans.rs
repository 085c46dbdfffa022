// ABOUTME: Health plan route handlers
// ABOUTME: Generates plans through the metrics engine and manages their stored summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Health plan routes
//!
//! `POST /health-plans/generate` is the core endpoint: the body is validated
//! into a profile, run through the engine, optionally persisted as a summary
//! row, and returned in full.

use super::json_body;
use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::models::{ListQuery, Message};
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use fitplan_core::models::ProfileInput;
use fitplan_intelligence::generate_health_plan;
use http::StatusCode;
use std::sync::Arc;

/// Health plan routes implementation
pub struct HealthPlanRoutes;

impl HealthPlanRoutes {
    /// Create all health plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health-plans/generate", post(Self::handle_generate))
            .route("/health-plans", get(Self::handle_list))
            .route(
                "/health-plans/analytics/summary",
                get(Self::handle_summary),
            )
            .route(
                "/health-plans/:id",
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /health-plans/generate
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<ProfileInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let input = json_body(payload)?;
        let plan = generate_health_plan(&input, &resources.dataset)?;

        let plan_id = if resources.config.database.persist_health_plans {
            Some(resources.database.create_health_plan(&plan, None).await?)
        } else {
            None
        };

        AppLogger::log_plan_generated(
            plan_id,
            plan.user_data.fitness_goal().as_str(),
            plan.daily_calories,
        );

        Ok((StatusCode::CREATED, Json(plan)).into_response())
    }

    /// Handle GET /health-plans
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let plans = resources
            .database
            .list_health_plans(query.offset(), query.limit())
            .await?;

        Ok(Json(plans).into_response())
    }

    /// Handle GET /health-plans/:id
    ///
    /// Only summaries are stored, so an existing plan cannot be rebuilt yet.
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(plan_id): Path<i64>,
    ) -> Result<Response, AppError> {
        if resources.database.get_health_plan(plan_id).await?.is_none() {
            return Err(AppError::not_found("Health plan"));
        }

        Err(AppError::not_implemented(
            "Retrieving stored health plans not yet implemented",
        ))
    }

    /// Handle DELETE /health-plans/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(plan_id): Path<i64>,
    ) -> Result<Response, AppError> {
        if !resources.database.delete_health_plan(plan_id).await? {
            return Err(AppError::not_found("Health plan"));
        }

        Ok(Json(Message::new("Health plan deleted successfully")).into_response())
    }

    /// Handle GET /health-plans/analytics/summary
    async fn handle_summary(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let summary = resources.database.health_plan_summary().await?;
        Ok(Json(summary).into_response())
    }
}
