// ABOUTME: Calculation engines for body composition and energy expenditure
// ABOUTME: Pure, stateless functions over validated metric or imperial measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Closed-form calculations feeding the planner wizard: BMI and healthy weight
//! band, then BMR/TDEE and a weight-loss calorie target. Nothing here performs
//! I/O or keeps state, so handlers call these functions directly.

/// BMI engine and rounding helpers
pub mod body_composition;
/// Mifflin-St Jeor energy expenditure engine
pub mod nutrition_calculator;
/// Published constants used by the engines
pub mod physiological_constants;

pub use body_composition::{calculate_bmi, classify_bmi, round_to};
pub use nutrition_calculator::{
    calculate_energy, calculate_energy_with_config, calculate_mifflin_st_jeor, calculate_tdee,
    ActivityFactorsConfig, BmrConfig,
};
