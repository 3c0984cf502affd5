// ABOUTME: BMI engine computing body mass index, category, and healthy weight band
// ABOUTME: Dispatches once on metric or imperial measurements and never re-validates input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body composition calculations
//!
//! Inputs are assumed validated by the caller (`WeightHeight::new` rejects
//! zero, negative, and non-finite values). Imperial input keeps the classic
//! `lb * 703 / in^2` formula instead of converting first.

use super::physiological_constants::bmi;
use crate::models::{BmiCategory, BmiResult, TargetWeightRange, WeightHeight};
use nutriplan_core::constants::units;

/// Classify an unrounded BMI value
///
/// Bands: below 18.5 underweight, 18.5 up to 25 normal, 25 up to 30
/// overweight, 30 and above obese.
#[must_use]
pub fn classify_bmi(value: f64) -> BmiCategory {
    if value < bmi::UNDERWEIGHT_THRESHOLD {
        BmiCategory::Underweight
    } else if value < bmi::OVERWEIGHT_THRESHOLD {
        BmiCategory::Normal
    } else if value < bmi::OBESE_THRESHOLD {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate BMI, category, and target weight band
#[must_use]
pub fn calculate_bmi(measurements: &WeightHeight) -> BmiResult {
    let (value, height_m) = match *measurements {
        WeightHeight::Metric { kg, cm } => {
            let height_m = cm / bmi::CM_PER_M;
            (kg / (height_m * height_m), height_m)
        }
        WeightHeight::Imperial { lb, inches } => (
            (lb * bmi::IMPERIAL_FACTOR) / (inches * inches),
            inches * units::M_PER_INCH,
        ),
    };

    let height_sq = height_m * height_m;

    BmiResult {
        bmi: round_to(value, 1),
        category: classify_bmi(value),
        target_weight_range: TargetWeightRange {
            lower: round_to(bmi::HEALTHY_LOWER * height_sq, 1),
            upper: round_to(bmi::HEALTHY_UPPER * height_sq, 1),
        },
        height_in_meters: round_to(height_m, 2),
    }
}

/// Round to a fixed number of decimal places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
