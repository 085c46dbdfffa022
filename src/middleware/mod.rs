// ABOUTME: HTTP middleware shared by every route group
// ABOUTME: Cross-origin resource sharing configuration driven by ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

pub mod cors;

// CORS configuration
pub use cors::setup_cors;
