// ABOUTME: Core types and constants for the nutrition planner service
// ABOUTME: Foundation crate with error handling, input limits, and wire-level domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types for the nutrition planner. It changes
//! rarely, so the HTTP server and the CLI can both depend on it without pulling
//! in the web stack (enable `http-response` for axum integration).
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the HTTP error body
//! - **constants**: Accepted input ranges checked at the HTTP and CLI boundary
//! - **models**: User profile, BMI and energy results, and the meal-plan document

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Accepted input ranges for anthropometric data
pub mod constants;

/// Core data models (`UserProfile`, `BmiResult`, `EnergyResult`, `MealPlan`)
pub mod models;
