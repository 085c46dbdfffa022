// ABOUTME: Analytics route handlers over stored health plan summaries
// ABOUTME: Overview, per-goal breakdown, 30-day trends and rule-based insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use crate::errors::AppError;
use crate::models::InsightList;
use crate::resources::ServerResources;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use fitplan_core::models::{FitnessGoal, ParseProfileFieldError};
use fitplan_intelligence::population_insights;
use std::sync::Arc;

/// Analytics routes implementation
pub struct AnalyticsRoutes;

impl AnalyticsRoutes {
    /// Create all analytics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/analytics/overview", get(Self::handle_overview))
            .route("/analytics/goals/:goal", get(Self::handle_goal))
            .route("/analytics/trends", get(Self::handle_trends))
            .route("/analytics/insights", get(Self::handle_insights))
            .with_state(resources)
    }

    /// Handle GET /analytics/overview
    async fn handle_overview(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let overview = resources.database.analytics_overview(Utc::now()).await?;
        Ok(Json(overview).into_response())
    }

    /// Handle GET /analytics/goals/:goal
    async fn handle_goal(
        State(resources): State<Arc<ServerResources>>,
        Path(goal): Path<String>,
    ) -> Result<Response, AppError> {
        let goal: FitnessGoal = goal.parse().map_err(|e: ParseProfileFieldError| {
            AppError::invalid_input(format!(
                "Invalid goal type. Must be one of: {}",
                e.expected
            ))
        })?;

        let analytics = resources.database.goal_analytics(goal).await?;
        Ok(Json(analytics).into_response())
    }

    /// Handle GET /analytics/trends
    async fn handle_trends(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let trends = resources.database.trend_analytics(Utc::now()).await?;
        Ok(Json(trends).into_response())
    }

    /// Handle GET /analytics/insights
    async fn handle_insights(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let stats = resources.database.plan_statistics(Utc::now()).await?;
        Ok(Json(InsightList {
            insights: population_insights(&stats),
        })
        .into_response())
    }
}
