// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports that the planner API process is up and serving requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check route for service monitoring

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "OK",
                "message": "Meal Planner API is running"
            }))
        }

        Router::new().route("/health", get(health_handler))
    }
}
