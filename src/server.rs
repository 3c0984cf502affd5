// ABOUTME: HTTP server assembly for the meal planner API using axum
// ABOUTME: Nests domain routers under /api, applies CORS, tracing, and body limits, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::middleware::{make_request_span, setup_cors, RecordResponse};
use crate::resources::ServerResources;
use crate::routes::{CalculatorRoutes, HealthRoutes, LogRoutes, MealPlanRoutes};
use axum::body::Body;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Maximum accepted request body size
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Mount point of every API route
pub const API_PREFIX: &str = "/api";

/// Build the complete router with middleware applied
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let api = Router::new()
        .merge(HealthRoutes::routes())
        .merge(CalculatorRoutes::routes())
        .merge(MealPlanRoutes::routes(Arc::clone(resources)))
        .merge(LogRoutes::routes(Arc::clone(resources)));

    // Layers wrap bottom-up: CORS runs first, then tracing, then the body limit
    Router::new()
        .nest(API_PREFIX, api)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span::<Body>)
                .on_response(RecordResponse),
        )
        .layer(setup_cors(&resources.config.cors))
}

/// Bind and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the port cannot be
/// bound, or the server fails while running
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let addr = resources
        .config
        .bind_addr()
        .map_err(|e| AppError::config(e.to_string()))?;

    let app = build_router(&resources);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Transport error: {e}")))?;
    info!("HTTP server (Axum) listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Transport error: {e}")))?;

    info!("HTTP server stopped");
    Ok(())
}

/// Resolve when the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
