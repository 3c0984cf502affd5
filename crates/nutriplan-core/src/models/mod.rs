// ABOUTME: Core data models for the nutrition planner API
// ABOUTME: Re-exports profile, calculation result, and meal-plan structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Wire-level structures shared by the HTTP server and the CLI. Field names
//! serialize in camelCase because the web client reads them that way.
//!
//! ## Core Models
//!
//! - `WeightHeight`: raw measurements tagged with their unit system
//! - `UserProfile`: metric-normalized attributes feeding the energy engine
//! - `BmiResult` / `EnergyResult`: outputs of the calculation engines
//! - `MealPlan`: daily targets plus a day-keyed map of `DayPlan`s

mod meal_plan;
mod profile;

// Profile domain
pub use profile::{ActivityLevel, Gender, UnitSystem, UserProfile, WeightHeight};

// Calculation results
pub use profile::{BmiCategory, BmiResult, EnergyResult, TargetWeightRange};

// Meal plan domain
pub use meal_plan::{DailyTargets, DailyTotal, DayPlan, Meal, MealPlan, MealSlot};
