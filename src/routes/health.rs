// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and database-backed readiness probes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Health check routes for service monitoring

use crate::constants::routes::{HEALTH, READY};
use crate::constants::service_names::API_DISPLAY_NAME;
use crate::resources::ServerResources;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(HEALTH, get(Self::handle_health))
            .route(READY, get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(json!({
            "status": "healthy",
            "message": format!("{API_DISPLAY_NAME} is running"),
            "version": env!("CARGO_PKG_VERSION"),
        }))
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.database.ping().await {
            Ok(()) => Json(json!({
                "status": "ready",
                "timestamp": Utc::now().to_rfc3339(),
            }))
            .into_response(),
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "not_ready",
                        "timestamp": Utc::now().to_rfc3339(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
