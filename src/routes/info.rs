// ABOUTME: Service information and reference data endpoints
// ABOUTME: Describes the API surface and exposes the dataset behind every plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use crate::constants::routes::API_V1;
use crate::constants::service_names::{API_DESCRIPTION, API_DISPLAY_NAME};
use crate::resources::ServerResources;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

/// Info routes implementation
pub struct InfoRoutes;

impl InfoRoutes {
    /// Unversioned `/api` service description
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api", get(Self::handle_api_info))
            .with_state(resources)
    }

    /// Versioned reference data routes, nested under the API prefix
    pub fn reference_routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/reference", get(Self::handle_reference))
            .with_state(resources)
    }

    async fn handle_api_info() -> Json<serde_json::Value> {
        Json(json!({
            "name": API_DISPLAY_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "description": API_DESCRIPTION,
            "endpoints": {
                "health_plans": format!("{API_V1}/health-plans"),
                "users": format!("{API_V1}/users"),
                "analytics": format!("{API_V1}/analytics"),
                "reference": format!("{API_V1}/reference"),
            }
        }))
    }

    async fn handle_reference(State(resources): State<Arc<ServerResources>>) -> Response {
        Json(resources.dataset.as_ref()).into_response()
    }
}
