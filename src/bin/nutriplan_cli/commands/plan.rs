// ABOUTME: Meal plan command for nutriplan-cli
// ABOUTME: Generates a plan through the LLM pipeline, degrades to the demo plan, and exports a JSON chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_server::{
    config::ServerConfig,
    errors::{AppError, AppResult},
    intelligence::{calculate_bmi, calculate_energy},
    llm::OpenAiCompatibleProvider,
    logging::{RequestMetadata, ResponseLog},
    meal_plan::{MealChart, MealPlanRequest, MealPlanService, PlanOrDemo},
    models::{MealPlan, UserProfile, WeightHeight},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::helpers::display::{
    display_degraded_warning, display_export, display_fallback_notice, display_plan,
};

/// Options collected from the command line
pub struct PlanOptions {
    /// Measurements as entered, for the BMI shown in the chart
    pub measurements: WeightHeight,
    /// Metric profile
    pub profile: UserProfile,
    /// Explicit calorie target
    pub calories: Option<u32>,
    /// Dietary preferences
    pub preferences: Vec<String>,
    /// Allergies
    pub allergies: Vec<String>,
    /// Chart output path
    pub output: Option<PathBuf>,
    /// Response log directory
    pub log_dir: Option<PathBuf>,
}

/// Explicit target if given, otherwise the profile's weight-loss target
fn daily_calories(profile: &UserProfile, explicit: Option<u32>) -> AppResult<u32> {
    let calories = match explicit {
        Some(calories) => calories,
        None => u32::try_from(calculate_energy(profile).weight_loss_calories).map_err(|_| {
            AppError::value_out_of_range("Weight-loss target is negative; pass --calories")
        })?,
    };
    MealPlan::check_daily_calories(calories)
}

/// Generate, display, and optionally export a meal plan
pub async fn generate(options: PlanOptions) -> AppResult<()> {
    let daily_calories = daily_calories(&options.profile, options.calories)?;

    let config = ServerConfig::from_env().map_err(|e| AppError::config(e.to_string()))?;
    let provider = OpenAiCompatibleProvider::new(config.llm.provider_config())?;
    let mut service = MealPlanService::new(Arc::new(provider)).with_model(config.llm.model);
    if let Some(dir) = options.log_dir {
        service = service.with_response_log(Arc::new(ResponseLog::new(dir).await?));
    }

    let request = MealPlanRequest::new(options.profile, daily_calories)
        .with_preferences(options.preferences)
        .with_allergies(options.allergies);

    info!(daily_calories, model = service.model(), "Requesting meal plan");
    let resolved = service
        .generate_or_demo(&request, RequestMetadata::cli("plan"))
        .await?;
    match &resolved {
        PlanOrDemo::Generated(outcome) if outcome.is_fallback() => display_fallback_notice(),
        PlanOrDemo::Generated(_) => {}
        PlanOrDemo::Demo { cause, .. } => display_degraded_warning(&cause.message),
    }

    let plan = resolved.to_value()?;
    display_plan(&plan);

    if let Some(path) = options.output {
        let bmi = calculate_bmi(&options.measurements);
        MealChart::for_request(&request, bmi.bmi, plan)
            .write_pretty(&path)
            .await?;
        display_export(&path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_server::errors::ErrorCode;
    use nutriplan_server::models::{ActivityLevel, Gender, UnitSystem};

    fn profile() -> UserProfile {
        let m = WeightHeight::new(70.0, 175.0, UnitSystem::Metric).unwrap();
        UserProfile::new(m, 30, Gender::Male, ActivityLevel::ModeratelyActive).unwrap()
    }

    #[test]
    fn test_defaults_to_weight_loss_target() {
        assert_eq!(daily_calories(&profile(), None).unwrap(), 2056);
    }

    #[test]
    fn test_explicit_target_wins() {
        assert_eq!(daily_calories(&profile(), Some(1800)).unwrap(), 1800);
    }

    #[test]
    fn test_explicit_target_out_of_range() {
        let error = daily_calories(&profile(), Some(100)).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }
}
