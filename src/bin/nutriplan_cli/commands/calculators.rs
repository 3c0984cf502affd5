// ABOUTME: BMI and calorie commands for nutriplan-cli
// ABOUTME: Runs the calculation engines on validated input and prints the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_server::{
    intelligence::{calculate_bmi, calculate_energy},
    models::{UserProfile, WeightHeight},
};
use tracing::debug;

use crate::helpers::display::{display_bmi, display_energy};

/// Print BMI, category, and healthy weight range
pub fn bmi(measurements: WeightHeight) {
    let result = calculate_bmi(&measurements);
    debug!(bmi = result.bmi, "BMI calculated");
    display_bmi(&result);
}

/// Print BMR, TDEE, and the weight-loss target
pub fn calories(profile: &UserProfile) {
    let result = calculate_energy(profile);
    debug!(tdee = result.tdee, "Energy calculated");
    display_energy(&result);
}
