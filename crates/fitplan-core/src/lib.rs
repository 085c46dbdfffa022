// ABOUTME: Core types and constants for the FitPlan health planning API
// ABOUTME: Foundation crate with error handling, profile models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

#![deny(unsafe_code)]

//! # FitPlan Core
//!
//! Foundation crate providing shared types for the FitPlan health planning
//! service. It changes rarely, so the engine and server crates can build on it
//! without recompiling it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: User profile input, validated profile and its enumerations
//! - **constants**: Validation bounds, service names and environment defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Profile models shared by the engine and the HTTP layer
pub mod models;

/// Application constants organized by domain
pub mod constants;
