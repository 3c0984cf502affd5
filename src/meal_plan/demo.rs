// ABOUTME: Bundled seven-day demo plan substituted when the generative service is unreachable
// ABOUTME: Loaded at compile time from data/demo_meal_plan.json
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::models::MealPlan;

/// Raw demo plan document
pub const DEMO_MEAL_PLAN_JSON: &str = include_str!("../../data/demo_meal_plan.json");

/// Parsed demo plan
///
/// # Errors
///
/// Returns `SERIALIZATION_ERROR` if the bundled document does not match the plan shape
pub fn demo_plan() -> AppResult<MealPlan> {
    Ok(serde_json::from_str(DEMO_MEAL_PLAN_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_plan_is_a_full_week() {
        let plan = demo_plan().unwrap();
        assert_eq!(plan.days.len(), MealPlan::FULL_WEEK);
        assert_eq!(plan.daily_targets.calories, 2000);
        for day in plan.days.values() {
            assert_eq!(day.daily_total, day.summed_total());
        }
    }
}
