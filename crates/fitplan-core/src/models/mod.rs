// ABOUTME: Core data models shared across the FitPlan workspace
// ABOUTME: Re-exports profile enumerations, raw profile input, and the validated profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

/// User profile enumerations, raw input and validation
pub mod profile;

pub use profile::{
    ActivityLevel, FitnessGoal, Gender, InvalidProfile, ParseProfileFieldError, ProfileInput,
    UserProfile,
};
