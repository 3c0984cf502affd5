// ABOUTME: AI response log read-back route handlers
// ABOUTME: Lists recent entries, keyword search results, and per-level counts for today's log file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::errors::AppResult;
use super::query_params;
use crate::logging::response_log::{DEFAULT_RECENT_LIMIT, DEFAULT_SEARCH_LIMIT};
use crate::resources::ServerResources;

/// Query string of `GET /api/logs`
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    /// Maximum entries to return
    pub limit: Option<usize>,
    /// Case-insensitive keyword; an empty value means no search
    pub search: Option<String>,
}

/// Log routes implementation
pub struct LogRoutes;

impl LogRoutes {
    /// Create the log read-back routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/logs", get(Self::list_logs))
            .route("/logs/stats", get(Self::log_stats))
            .with_state(resources)
    }

    async fn list_logs(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<LogQuery>, QueryRejection>,
    ) -> AppResult<Json<Value>> {
        let query = query_params(query)?;
        let log = &resources.response_log;
        let keyword = query.search.as_deref().map(str::trim).unwrap_or_default();

        let logs = if keyword.is_empty() {
            log.recent(query.limit.unwrap_or(DEFAULT_RECENT_LIMIT))
                .await?
        } else {
            log.search(keyword, query.limit.unwrap_or(DEFAULT_SEARCH_LIMIT))
                .await?
        };

        Ok(Json(json!({ "success": true, "logs": logs })))
    }

    async fn log_stats(State(resources): State<Arc<ServerResources>>) -> AppResult<Json<Value>> {
        let stats = resources.response_log.stats().await?;
        Ok(Json(json!({ "success": true, "stats": stats })))
    }
}
