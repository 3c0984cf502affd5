// ABOUTME: BMI and calorie calculator route handlers
// ABOUTME: Validates anthropometric input at the boundary and delegates to the calculation engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::instrument;

use super::json_body;
use crate::errors::AppResult;
use crate::intelligence::{calculate_bmi, calculate_energy};
use crate::logging::AppLogger;
use crate::models::{
    ActivityLevel, BmiResult, EnergyResult, Gender, UnitSystem, UserProfile, WeightHeight,
};

/// Body of `POST /api/calculate-bmi`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRequest {
    /// Weight in kg (metric) or lb (imperial)
    pub weight: f64,
    /// Height in cm (metric) or inches (imperial)
    pub height: f64,
    /// Unit system, metric when omitted
    #[serde(default)]
    pub unit: UnitSystem,
}

/// Profile fields shared by the calorie and meal plan bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    /// Weight in kg (metric) or lb (imperial)
    pub weight: f64,
    /// Height in cm (metric) or inches (imperial)
    pub height: f64,
    /// Age in whole years
    pub age: u32,
    /// `male` or `female`
    pub gender: Gender,
    /// One of the four activity levels
    pub activity_level: ActivityLevel,
    /// Unit system, metric when omitted
    #[serde(default)]
    pub unit: UnitSystem,
}

impl ProfileInput {
    /// Validate and normalize to a metric profile
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for out-of-range weight, height, or age
    pub fn into_profile(self) -> AppResult<UserProfile> {
        let measurements = WeightHeight::new(self.weight, self.height, self.unit)?;
        UserProfile::new(measurements, self.age, self.gender, self.activity_level)
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Calculator routes implementation
pub struct CalculatorRoutes;

impl CalculatorRoutes {
    /// Create the BMI and calorie routes
    pub fn routes() -> Router {
        Router::new()
            .route("/calculate-bmi", post(Self::calculate_bmi))
            .route("/calculate-calories", post(Self::calculate_calories))
    }

    /// Compute BMI, category, and the healthy weight band
    #[instrument(skip(payload))]
    async fn calculate_bmi(
        payload: Result<Json<BmiRequest>, JsonRejection>,
    ) -> AppResult<Json<BmiResult>> {
        let start = Instant::now();
        let body = json_body(payload)?;
        let measurements = WeightHeight::new(body.weight, body.height, body.unit)?;

        let result = calculate_bmi(&measurements);
        AppLogger::log_calculation("bmi", elapsed_ms(start));
        Ok(Json(result))
    }

    /// Compute BMR, TDEE, and the weight-loss target
    #[instrument(skip(payload))]
    async fn calculate_calories(
        payload: Result<Json<ProfileInput>, JsonRejection>,
    ) -> AppResult<Json<EnergyResult>> {
        let start = Instant::now();
        let profile = json_body(payload)?.into_profile()?;

        let result = calculate_energy(&profile);
        AppLogger::log_calculation("calories", elapsed_ms(start));
        Ok(Json(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_input_accepts_client_shape() {
        let input: ProfileInput = serde_json::from_value(json!({
            "weight": 154,
            "height": 69,
            "age": 30,
            "gender": "male",
            "activityLevel": "moderately active",
            "unit": "imperial"
        }))
        .unwrap();
        let profile = input.into_profile().unwrap();
        assert!((profile.weight_kg - 69.853).abs() < 0.001);
        assert!((profile.height_cm - 175.26).abs() < 1e-9);
    }

    #[test]
    fn test_profile_input_rejects_unknown_activity() {
        let result = serde_json::from_value::<ProfileInput>(json!({
            "weight": 70,
            "height": 175,
            "age": 30,
            "gender": "male",
            "activityLevel": "couch potato"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_bmi_request_defaults_to_metric() {
        let body: BmiRequest =
            serde_json::from_value(json!({"weight": 70, "height": 175})).unwrap();
        assert_eq!(body.unit, UnitSystem::Metric);
    }
}
