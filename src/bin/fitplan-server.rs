// ABOUTME: FitPlan API server binary
// ABOUTME: Parses CLI overrides, initializes logging and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # FitPlan Server Binary
//!
//! Configuration comes from the environment; `--http-port` and
//! `--database-url` override it.

use anyhow::Result;
use clap::Parser;
use fitplan_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    logging, server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitplan-server")]
#[command(about = "Fitness Health Planner API - personalized fitness and nutrition plans")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. `sqlite:./data/fitness_planner.db` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.http_port {
        config.http_port = port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url)?;
    }

    logging::init_from_env()?;
    info!(
        environment = %config.environment,
        port = config.http_port,
        "Starting FitPlan server"
    );

    if let Err(e) = server::run(config).await {
        error!(error = %e, "Server terminated with error");
        return Err(e.into());
    }

    Ok(())
}
