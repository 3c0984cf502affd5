// ABOUTME: Deterministic single-day meal plan used when a completion cannot be parsed
// ABOUTME: Scales calories and macros proportionally from the calorie target and body weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fallback plan synthesizer
//!
//! Only `day1` is populated. Each meal gets a fixed share of the day:
//!
//! | Meal | Share |
//! |---|---|
//! | Breakfast | 25% |
//! | Lunch | 40% |
//! | Snack | 15% |
//! | Dinner | 20% |
//!
//! Daily macros come from the target: protein is 1.2 g per kg of body weight,
//! carbohydrate is half the calories at 4 kcal/g, and fat is a quarter of the
//! calories at 9 kcal/g. Meal values are rounded first and the day's total is
//! the sum of the rounded meals, so totals always match exactly.

use crate::intelligence::physiological_constants::{macros, meal_distribution};
use crate::models::{DailyTargets, DayPlan, Meal, MealPlan, MealSlot};
use std::collections::BTreeMap;

/// Daily amounts before they are split across meals
#[derive(Debug, Clone, Copy, PartialEq)]
struct DailyMacros {
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fats_g: f64,
}

impl DailyMacros {
    fn from_target(daily_calories: u32, weight_kg: f64) -> Self {
        let calories = f64::from(daily_calories);
        Self {
            calories,
            protein_g: macros::PROTEIN_G_PER_KG * weight_kg,
            carbs_g: calories * macros::CARB_CALORIE_SHARE / macros::KCAL_PER_G_CARB,
            fats_g: calories * macros::FAT_CALORIE_SHARE / macros::KCAL_PER_G_FAT,
        }
    }
}

/// Share of the day assigned to a meal
#[must_use]
pub const fn meal_share(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => meal_distribution::BREAKFAST,
        MealSlot::Lunch => meal_distribution::LUNCH,
        MealSlot::Snack => meal_distribution::SNACK,
        MealSlot::Dinner => meal_distribution::DINNER,
    }
}

/// Round a non-negative amount to a whole number
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// Dish template for a meal slot
const fn dish(slot: MealSlot) -> (&'static str, &'static str, &'static str, &'static str) {
    match slot {
        MealSlot::Breakfast => (
            "Sel Roti with Tea",
            "2 sel roti, 1 cup milk tea, 1 banana",
            "2 pieces, 1 cup, 1 medium",
            "Prepare sel roti traditionally, make milk tea, serve with banana",
        ),
        MealSlot::Lunch => (
            "Dal Bhat with Tarkari",
            "1 cup rice, 1 cup dal, mixed vegetables, pickle",
            "1 cup, 1 cup, 1 cup, 2 tbsp",
            "Cook rice, prepare dal with spices, steam vegetables, serve with pickle",
        ),
        MealSlot::Snack => (
            "Chiura with Yogurt",
            "1 cup chiura, 1/2 cup yogurt, 1 tsp sugar",
            "1 cup, 1/2 cup, 1 tsp",
            "Mix chiura with yogurt and sugar, serve chilled",
        ),
        MealSlot::Dinner => (
            "Momo with Soup",
            "8 pieces momo, vegetable soup, chutney",
            "8 pieces, 1 cup, 2 tbsp",
            "Steam momo, prepare soup, serve with chutney",
        ),
    }
}

fn synthesize_meal(slot: MealSlot, daily: &DailyMacros) -> Meal {
    let share = meal_share(slot);
    let (name, ingredients, portions, instructions) = dish(slot);
    Meal {
        name: name.to_owned(),
        ingredients: ingredients.to_owned(),
        portions: portions.to_owned(),
        calories: whole(daily.calories * share),
        protein: whole(daily.protein_g * share),
        carbs: whole(daily.carbs_g * share),
        fats: whole(daily.fats_g * share),
        instructions: instructions.to_owned(),
    }
}

/// Build the placeholder plan for a calorie target and body weight
#[must_use]
pub fn synthesize_plan(daily_calories: u32, weight_kg: f64) -> MealPlan {
    let daily = DailyMacros::from_target(daily_calories, weight_kg);

    let day = DayPlan::from_meals(
        synthesize_meal(MealSlot::Breakfast, &daily),
        synthesize_meal(MealSlot::Lunch, &daily),
        synthesize_meal(MealSlot::Snack, &daily),
        synthesize_meal(MealSlot::Dinner, &daily),
    );

    let mut days = BTreeMap::new();
    days.insert(MealPlan::day_key(1), day);

    MealPlan {
        daily_targets: DailyTargets {
            calories: daily_calories,
            protein: format!("{}g", whole(daily.protein_g)),
            carbs: format!("{}g", whole(daily.carbs_g)),
            fats: format!("{}g", whole(daily.fats_g)),
        },
        days,
    }
}
