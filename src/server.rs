// ABOUTME: HTTP server assembly and lifecycle
// ABOUTME: Builds the axum router with CORS, request-id and tracing layers, then serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Router assembly and serving
//!
//! Probes and `/api` live at the root; every domain route group is nested
//! under the versioned prefix.

use crate::config::environment::ServerConfig;
use crate::constants::routes::API_V1;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{AnalyticsRoutes, HealthPlanRoutes, HealthRoutes, InfoRoutes, UserRoutes};
use axum::Router;
use fitplan_intelligence::ReferenceDataset;
use std::future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    let api = Router::new()
        .merge(HealthPlanRoutes::routes(Arc::clone(&resources)))
        .merge(UserRoutes::routes(Arc::clone(&resources)))
        .merge(AnalyticsRoutes::routes(Arc::clone(&resources)))
        .merge(InfoRoutes::reference_routes(Arc::clone(&resources)));

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(InfoRoutes::routes(resources))
        .nest(API_V1, api)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
}

/// Load the dataset, open the database and bundle shared resources
///
/// # Errors
///
/// Returns an error if the reference dataset fails validation or the
/// database cannot be opened
pub async fn build_resources(config: ServerConfig) -> AppResult<Arc<ServerResources>> {
    let dataset = ReferenceDataset::load()
        .map_err(|e| AppError::config(format!("Invalid reference dataset: {e}")).with_source(e))?;
    let database = Database::new(&config.database.url).await?;

    Ok(Arc::new(ServerResources::new(
        database,
        Arc::new(dataset),
        Arc::new(config),
    )))
}

/// Serve the API until SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if startup fails or the listener cannot be bound
pub async fn run(config: ServerConfig) -> AppResult<()> {
    config.validate()?;
    let bind_address = config.bind_address();
    info!("{}", config.summary());

    let resources = build_resources(config).await?;
    let app = build_router(resources);

    let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
        AppError::config(format!("Failed to bind {bind_address}: {e}")).with_source(e)
    })?;
    info!(address = %bind_address, "FitPlan server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")).with_source(e))?;

    info!("FitPlan server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
