// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for browser clients of the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use crate::config::environment::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings for the planner API
///
/// Origins come from `CORS_ALLOWED_ORIGINS`: `*` (or empty) allows any
/// origin, otherwise a comma-separated list is matched exactly. Entries that
/// are not valid header values are skipped.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://planner.example.com,https://admin.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.cors.allowed_origins))
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

fn allowed_origins(raw: &str) -> AllowOrigin {
    if raw.trim().is_empty() || raw.trim() == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}
