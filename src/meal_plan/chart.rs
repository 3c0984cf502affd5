// ABOUTME: Meal chart document pairing a plan with the user details it was made for
// ABOUTME: Shared by the HTTP chart endpoint and the CLI JSON export file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;

use super::MealPlanRequest;
use crate::errors::{AppError, AppResult};

/// Exportable chart: `{userInfo, mealPlan, generatedAt}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealChart {
    /// Whatever the client describes the user with
    pub user_info: Value,
    /// The plan document, parsed or synthesized
    pub meal_plan: Value,
    /// ISO-8601 creation time
    pub generated_at: String,
}

impl MealChart {
    /// Stamp a chart with the current time
    #[must_use]
    pub fn new(user_info: Value, meal_plan: Value) -> Self {
        Self {
            user_info,
            meal_plan,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Chart describing the user with the request's profile and the given BMI
    #[must_use]
    pub fn for_request(request: &MealPlanRequest, bmi: f64, meal_plan: Value) -> Self {
        let profile = &request.profile;
        let user_info = json!({
            "age": profile.age,
            "gender": profile.gender,
            "weight": profile.weight_kg,
            "height": profile.height_cm,
            "activityLevel": profile.activity_level,
            "bmi": bmi,
            "dailyCalories": request.daily_calories,
            "dietaryPreferences": request.dietary_preferences,
            "allergies": request.allergies,
        });
        Self::new(user_info, meal_plan)
    }

    /// Write the chart as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be written
    pub async fn write_pretty(&self, path: &Path) -> AppResult<()> {
        let document = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, document).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", path.display())).with_source(e)
        })
    }
}
