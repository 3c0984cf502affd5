// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides the CORS layer and request span construction for structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request span construction
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{
    create_request_span, make_request_span, request_id_from_headers, RecordResponse,
};
