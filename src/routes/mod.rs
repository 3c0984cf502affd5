// ABOUTME: Route module organization for the meal planner HTTP endpoints
// ABOUTME: Provides route definitions organized by domain plus shared request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the meal planner API
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the calculation engines or the meal plan service. Routers are merged and
//! nested under `/api` by [`crate::server`].

/// BMI and energy calculator routes
pub mod calculators;
/// Health check route
pub mod health;
/// AI response log read-back routes
pub mod logs;
/// Meal plan and meal chart routes
pub mod meal_plan;

pub use calculators::CalculatorRoutes;
pub use health::HealthRoutes;
pub use logs::LogRoutes;
pub use meal_plan::MealPlanRoutes;

use crate::errors::{AppError, AppResult};
use crate::logging::RequestMetadata;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::http::{header, HeaderMap};
use axum::Json;

/// Unwrap a JSON body, turning extractor rejections into `INVALID_INPUT`
///
/// # Errors
///
/// Returns `INVALID_INPUT` with the rejection text for malformed JSON,
/// missing fields, wrong types, or unknown enum values
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Unwrap a query string the same way [`json_body`] unwraps a body
///
/// # Errors
///
/// Returns `INVALID_INPUT` when a parameter has the wrong type
pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Response log metadata for an HTTP request
///
/// The client address comes from `x-forwarded-for` (first hop) or
/// `x-real-ip` when a proxy sets them.
#[must_use]
pub fn request_metadata(endpoint: &str, headers: &HeaderMap) -> RequestMetadata {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };

    let user_agent = header_str(header::USER_AGENT.as_str());
    let ip = header_str("x-forwarded-for")
        .and_then(|forwarded| {
            forwarded
                .split(',')
                .next()
                .map(|first| first.trim().to_owned())
        })
        .or_else(|| header_str("x-real-ip"));

    RequestMetadata::http(endpoint, user_agent, ip)
}
