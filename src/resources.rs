// ABOUTME: Shared server state handed to every route handler
// ABOUTME: Bundles the database handle, the validated reference dataset and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use crate::config::environment::ServerConfig;
use crate::database::Database;
use fitplan_intelligence::ReferenceDataset;
use std::sync::Arc;

/// Resources shared across handlers behind an `Arc`
#[derive(Clone)]
pub struct ServerResources {
    /// `SQLite` persistence
    pub database: Database,
    /// Read-only reference tables used by the metrics engine
    pub dataset: Arc<ReferenceDataset>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle resources for the router
    #[must_use]
    pub fn new(
        database: Database,
        dataset: Arc<ReferenceDataset>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            database,
            dataset,
            config,
        }
    }
}
