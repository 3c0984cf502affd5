// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: Provides consistent display functions for calculator results and meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_server::models::{BmiResult, EnergyResult, MealSlot};
use serde_json::Value;
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Display BMI results
pub fn display_bmi(result: &BmiResult) {
    println!("\nBMI RESULTS");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   BMI: {:.1}", result.bmi);
    println!("   Category: {}", result.category);
    println!("   Height: {:.2} m", result.height_in_meters);
    println!(
        "   Healthy weight range: {:.1} - {:.1} kg",
        result.target_weight_range.lower, result.target_weight_range.upper
    );
}

/// Display energy expenditure results
pub fn display_energy(result: &EnergyResult) {
    println!("\nCALORIE NEEDS");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("   Activity level: {}", result.activity_level);
    println!("   BMR: {} kcal/day", result.bmr);
    println!("   TDEE: {} kcal/day", result.tdee);
    println!(
        "   Weight-loss target: {} kcal/day",
        result.weight_loss_calories
    );
}

fn slot_key(slot: MealSlot) -> &'static str {
    match slot {
        MealSlot::Breakfast => "breakfast",
        MealSlot::Lunch => "lunch",
        MealSlot::Snack => "snack",
        MealSlot::Dinner => "dinner",
    }
}

/// Display a plan document day by day
///
/// Works on untyped JSON so model output with unexpected fields still prints.
pub fn display_plan(plan: &Value) {
    println!("\nMEAL PLAN");
    println!("{}", "=".repeat(RULE_WIDTH));

    if let Some(targets) = plan.get("dailyTargets") {
        println!(
            "   Targets: {} kcal, protein {}, carbs {}, fats {}",
            targets.get("calories").unwrap_or(&Value::Null),
            targets.get("protein").unwrap_or(&Value::Null),
            targets.get("carbs").unwrap_or(&Value::Null),
            targets.get("fats").unwrap_or(&Value::Null),
        );
    }

    let Some(days) = plan.get("mealPlan").and_then(Value::as_object) else {
        println!("   (plan has no days)");
        return;
    };

    for (day, meals) in days {
        println!("\n{day}");
        println!("{}", "-".repeat(RULE_WIDTH));
        for slot in MealSlot::ALL {
            let key = slot_key(slot);
            if let Some(meal) = meals.get(key) {
                println!(
                    "   {key:<10} {} ({} kcal)",
                    meal.get("name").and_then(Value::as_str).unwrap_or("?"),
                    meal.get("calories").unwrap_or(&Value::Null),
                );
            }
        }
        if let Some(total) = meals.get("dailyTotal") {
            println!(
                "   {:<10} {} kcal",
                "total",
                total.get("calories").unwrap_or(&Value::Null)
            );
        }
    }
}

/// Notice that the plan is the single-day fallback
pub fn display_fallback_notice() {
    println!("\nNOTE: The generated response could not be parsed.");
    println!("      Showing a one-day plan scaled to your calorie target.");
}

/// Warning that the bundled demo plan replaced a failed generation
pub fn display_degraded_warning(reason: &str) {
    println!("\nWARNING: Meal plan generation failed ({reason}).");
    println!("         Showing the bundled demo plan instead.");
}

/// Confirmation that the chart was written
pub fn display_export(path: &Path) {
    println!("\nMeal chart saved to {}", path.display());
}
