// ABOUTME: Main library entry point for the nutrition planner service
// ABOUTME: Provides BMI and energy calculators, the LLM meal plan pipeline, and the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Server
//!
//! A nutrition planning service that walks a user through three steps:
//!
//! 1. **BMI**: body mass index, category, and a healthy weight band
//! 2. **Calories**: Mifflin-St Jeor BMR, activity-scaled TDEE, and a weight-loss target
//! 3. **Meal plan**: a seven-day Nepalese meal plan from a generative-text service,
//!    with a deterministic single-day fallback when the completion cannot be parsed
//!
//! ## Architecture
//!
//! - **Models/Errors**: wire types and `AppError`, re-exported from `nutriplan-core`
//! - **Intelligence**: pure calculation engines
//! - **LLM**: provider trait and an `OpenAI`-compatible client
//! - **Meal plan**: prompt construction, JSON extraction, fallback, and the service
//! - **Logging**: `tracing` setup and the JSON-lines AI response log
//! - **Routes/Server**: axum handlers nested under `/api`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan_server::intelligence::{calculate_bmi, calculate_energy};
//! use nutriplan_server::models::{ActivityLevel, Gender, UnitSystem, UserProfile, WeightHeight};
//!
//! fn main() -> Result<(), nutriplan_server::errors::AppError> {
//!     let measurements = WeightHeight::new(70.0, 175.0, UnitSystem::Metric)?;
//!     let bmi = calculate_bmi(&measurements);
//!
//!     let profile = UserProfile::new(measurements, 30, Gender::Male, ActivityLevel::ModeratelyActive)?;
//!     let energy = calculate_energy(&profile);
//!
//!     println!("BMI {} ({}), target {} kcal", bmi.bmi, bmi.category, energy.weight_loss_calories);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// BMI and energy calculation engines
pub mod intelligence;

/// Generative-text provider abstraction
pub mod llm;

/// Structured logging and the AI response log
pub mod logging;

/// Meal plan generation pipeline
pub mod meal_plan;

/// HTTP middleware
pub mod middleware;

/// Domain models
pub mod models;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly
pub mod server;
