// ABOUTME: Meal plan document models returned by the planner
// ABOUTME: MealPlan, DailyTargets, DayPlan, Meal, DailyTotal, and MealSlot definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the four meals in a planned day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Main midday meal
    Lunch,
    /// Afternoon snack
    Snack,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// Slots in the order they are eaten
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];
}

/// A single meal with its recipe and macros
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Dish name
    pub name: String,
    /// Ingredient list as free text
    pub ingredients: String,
    /// Portion sizes as free text
    pub portions: String,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fats: u32,
    /// Preparation steps
    pub instructions: String,
}

/// Per-day macro totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fats: u32,
}

/// Four meals plus their daily total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Breakfast
    pub breakfast: Meal,
    /// Lunch
    pub lunch: Meal,
    /// Snack
    pub snack: Meal,
    /// Dinner
    pub dinner: Meal,
    /// Totals across the four meals
    pub daily_total: DailyTotal,
}

impl DayPlan {
    /// Assemble a day whose total is the exact sum of its meals
    #[must_use]
    pub fn from_meals(breakfast: Meal, lunch: Meal, snack: Meal, dinner: Meal) -> Self {
        let mut day = Self {
            breakfast,
            lunch,
            snack,
            dinner,
            daily_total: DailyTotal::default(),
        };
        day.daily_total = day.summed_total();
        day
    }

    /// Meal served in the given slot
    #[must_use]
    pub const fn meal(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snack => &self.snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Sum of the four meals' macros, independent of the stored `daily_total`
    #[must_use]
    pub fn summed_total(&self) -> DailyTotal {
        MealSlot::ALL
            .iter()
            .map(|slot| self.meal(*slot))
            .fold(DailyTotal::default(), |acc, meal| DailyTotal {
                calories: acc.calories + meal.calories,
                protein: acc.protein + meal.protein,
                carbs: acc.carbs + meal.carbs,
                fats: acc.fats + meal.fats,
            })
    }
}

/// Daily calorie target and macro ranges shown above the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Target energy in kcal
    pub calories: u32,
    /// Protein target as free text (e.g. `"130-150g"`)
    pub protein: String,
    /// Carbohydrate target as free text
    pub carbs: String,
    /// Fat target as free text
    pub fats: String,
}

/// A planned week (or fewer days) of meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Calorie and macro targets
    pub daily_targets: DailyTargets,
    /// Day plans keyed `day1`..`day7`
    #[serde(rename = "mealPlan")]
    pub days: BTreeMap<String, DayPlan>,
}

impl MealPlan {
    /// Number of days in a full plan
    pub const FULL_WEEK: usize = 7;

    /// Key under which the `n`th day (1-based) is stored
    #[must_use]
    pub fn day_key(n: usize) -> String {
        format!("day{n}")
    }

    /// Reject calorie targets no plan should be built for
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when the target is outside 500-10000 kcal
    pub fn check_daily_calories(calories: u32) -> AppResult<u32> {
        if (limits::MIN_DAILY_CALORIES..=limits::MAX_DAILY_CALORIES).contains(&calories) {
            Ok(calories)
        } else {
            Err(AppError::value_out_of_range(format!(
                "dailyCalories must be between {} and {}",
                limits::MIN_DAILY_CALORIES,
                limits::MAX_DAILY_CALORIES
            )))
        }
    }
}
