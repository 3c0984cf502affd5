// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span used by the HTTP trace layer and records the response on it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::http::{HeaderMap, Request, Response};
use std::time::Duration;
use tower_http::trace::OnResponse;
use tracing::Span;
use uuid::Uuid;

/// Header carrying a caller-supplied request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID from the `x-request-id` header, or a fresh one
#[must_use]
pub fn request_id_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(
            || format!("req_{}", Uuid::new_v4().simple()),
            str::to_owned,
        )
}

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str, request_id: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Span factory for `TraceLayer::make_span_with`
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request_id_from_headers(request.headers());
    create_request_span(request.method().as_str(), request.uri().path(), &request_id)
}

/// `TraceLayer::on_response` hook filling `status_code` and `duration_ms`
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordResponse;

impl<B> OnResponse<B> for RecordResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status_code = response.status().as_u16();
        let duration_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);

        span.record("status_code", status_code);
        span.record("duration_ms", duration_ms);
        tracing::info!(parent: span, status_code, duration_ms, "request completed");
    }
}
