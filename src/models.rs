// ABOUTME: Core data models re-exported from nutriplan-core
// ABOUTME: Re-exports UserProfile, BmiResult, EnergyResult, MealPlan and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The wire-level structures live in `nutriplan-core` so the CLI and the HTTP
//! server share one definition. This module keeps `crate::models::*` paths stable.

pub use nutriplan_core::models::*;
