// ABOUTME: Accepted input ranges for the planner's anthropometric data
// ABOUTME: Shared by the HTTP handlers and the CLI so both reject the same values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Input limits applied before any formula runs
pub mod limits {
    /// Largest accepted body weight (kg or lb)
    pub const MAX_WEIGHT: f64 = 1000.0;
    /// Largest accepted height (cm or in)
    pub const MAX_HEIGHT: f64 = 300.0;
    /// Youngest accepted age in years
    pub const MIN_AGE: u32 = 1;
    /// Oldest accepted age in years
    pub const MAX_AGE: u32 = 120;
    /// Smallest daily calorie target a plan may be requested for
    pub const MIN_DAILY_CALORIES: u32 = 500;
    /// Largest daily calorie target a plan may be requested for
    pub const MAX_DAILY_CALORIES: u32 = 10_000;
}

/// Unit conversion factors
pub mod units {
    /// Kilograms per pound (international avoirdupois pound)
    pub const KG_PER_LB: f64 = 0.453_592_37;
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Meters per inch
    pub const M_PER_INCH: f64 = 0.0254;
}
