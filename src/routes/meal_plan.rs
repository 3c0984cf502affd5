// ABOUTME: Meal plan generation and meal chart route handlers
// ABOUTME: Runs the LLM pipeline for a validated profile and stamps plans into exportable charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::calculators::ProfileInput;
use super::{json_body, request_metadata};
use crate::errors::{AppError, AppResult};
use crate::meal_plan::{MealChart, MealPlanOutcome, MealPlanRequest};
use crate::models::MealPlan;
use crate::resources::ServerResources;

/// Message returned when the upstream generation fails
pub const MEAL_PLAN_FAILURE: &str = "Failed to generate meal plan";

/// Message returned when a chart cannot be produced
pub const MEAL_CHART_FAILURE: &str = "Failed to generate meal chart";

/// Body of `POST /api/generate-meal-plan`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanBody {
    /// Anthropometric profile
    #[serde(flatten)]
    pub profile: ProfileInput,
    /// Target kcal per day
    pub daily_calories: u32,
    /// Free-text dietary preferences
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Ingredients to avoid
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl GenerateMealPlanBody {
    /// Validate and convert into a pipeline request
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for out-of-range measurements, age, or calories
    pub fn into_request(self) -> AppResult<MealPlanRequest> {
        let daily_calories = MealPlan::check_daily_calories(self.daily_calories)?;
        let profile = self.profile.into_profile()?;
        Ok(MealPlanRequest::new(profile, daily_calories)
            .with_preferences(self.dietary_preferences)
            .with_allergies(self.allergies))
    }
}

/// Body of `POST /api/generate-meal-chart`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealChartBody {
    /// Plan document to chart
    #[serde(default)]
    pub meal_plan: Value,
    /// Client-side user details
    #[serde(default)]
    pub user_info: Value,
}

/// Meal plan routes implementation
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create the meal plan and chart routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/generate-meal-plan", post(Self::generate_meal_plan))
            .route("/generate-meal-chart", post(Self::generate_meal_chart))
            .with_state(resources)
    }

    /// Generate a plan through the LLM pipeline
    ///
    /// Input problems are 400s. Any upstream failure is logged and reported
    /// as a 500 without the upstream detail.
    #[instrument(skip_all)]
    async fn generate_meal_plan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<GenerateMealPlanBody>, JsonRejection>,
    ) -> AppResult<Json<MealPlanOutcome>> {
        let request = json_body(payload)?.into_request()?;
        let metadata = request_metadata("/api/generate-meal-plan", &headers);

        match resources
            .meal_plans
            .generate_with_metadata(&request, metadata)
            .await
        {
            Ok(outcome) => {
                info!(outcome = outcome.kind(), "Meal plan delivered");
                Ok(Json(outcome))
            }
            Err(e) => {
                error!(error = %e, code = ?e.code, "Meal plan generation failed");
                Err(AppError::internal(MEAL_PLAN_FAILURE))
            }
        }
    }

    /// Pair a plan with the user details and a timestamp
    #[instrument(skip_all)]
    async fn generate_meal_chart(
        payload: Result<Json<MealChartBody>, JsonRejection>,
    ) -> AppResult<Json<Value>> {
        let body = json_body(payload)?;
        let chart = MealChart::new(body.user_info, body.meal_plan);

        serde_json::to_value(chart).map(Json).map_err(|e| {
            error!(error = %e, "Meal chart serialization failed");
            AppError::internal(MEAL_CHART_FAILURE)
        })
    }
}
