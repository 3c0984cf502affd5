// ABOUTME: HTTP server binary for the nutrition planner REST API
// ABOUTME: Loads environment configuration, initializes logging, and serves the /api routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutriplan API Server Binary
//!
//! Serves the BMI, calorie, meal plan, chart, health, and log endpoints.

use anyhow::Result;
use clap::Parser;
use nutriplan_server::{
    config::environment::ServerConfig, logging, resources::ServerResources, server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nutriplan-server")]
#[command(about = "Nutriplan API - BMI, calorie, and meal plan endpoints")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the AI response log directory
    #[arg(long)]
    log_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(log_dir) = args.log_dir {
        config.log_dir = log_dir.into();
    }

    logging::init_from_env()?;

    info!("Starting Nutriplan API");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config).await?);

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
