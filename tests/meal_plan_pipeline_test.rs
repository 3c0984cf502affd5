// ABOUTME: Integration tests for the meal plan generation pipeline against stub providers
// ABOUTME: Verifies prompt construction, parsed and fallback outcomes, error propagation, and response logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, sample_plan_json, sample_profile, StubProvider};
use nutriplan_server::errors::ErrorCode;
use nutriplan_server::llm::MessageRole;
use nutriplan_server::logging::{RequestMetadata, ResponseLog};
use nutriplan_server::meal_plan::demo::demo_plan;
use nutriplan_server::meal_plan::{
    MealChart, MealPlanOutcome, MealPlanRequest, MealPlanService, PlanOrDemo, DEFAULT_TEMPERATURE,
};
use nutriplan_server::models::{MealPlan, MealSlot};
use std::sync::Arc;
use tempfile::TempDir;

fn request(daily_calories: u32) -> MealPlanRequest {
    MealPlanRequest::new(sample_profile(), daily_calories)
        .with_preferences(vec!["vegetarian".to_owned(), "low oil".to_owned()])
        .with_allergies(vec!["peanuts".to_owned()])
}

#[tokio::test]
async fn test_single_completion_with_expected_prompt() {
    init_test_logging();
    let provider = StubProvider::well_formed();
    let service = MealPlanService::new(Arc::clone(&provider) as _).with_model("test-model");

    service.generate(&request(1800)).await.unwrap();

    assert_eq!(provider.call_count(), 1);
    let chat = provider.last_request().unwrap();
    assert_eq!(chat.model.as_deref(), Some("test-model"));
    assert_eq!(chat.temperature, Some(DEFAULT_TEMPERATURE));
    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[0].role, MessageRole::System);
    assert!(chat.messages[0].content.contains("Nepalese"));

    let user = &chat.messages[1];
    assert_eq!(user.role, MessageRole::User);
    assert!(user.content.contains("30-year-old male"));
    assert!(user.content.contains("moderately active"));
    assert!(user.content.contains("Target daily calories: 1800"));
    assert!(user.content.contains("vegetarian, low oil"));
    assert!(user.content.contains("Allergies: peanuts"));
    assert!(user.content.contains("\"day7\""));
}

#[tokio::test]
async fn test_prompt_defaults_for_empty_lists() {
    init_test_logging();
    let provider = StubProvider::well_formed();
    let service = MealPlanService::new(Arc::clone(&provider) as _);

    service
        .generate(&MealPlanRequest::new(sample_profile(), 2000))
        .await
        .unwrap();

    let chat = provider.last_request().unwrap();
    assert_eq!(chat.model.as_deref(), Some("stub-model"));
    let user = &chat.messages[1].content;
    assert!(user.contains("Dietary preferences: Traditional Nepalese cuisine"));
    assert!(user.contains("Allergies: None"));
}

#[tokio::test]
async fn test_parsed_outcome_passes_document_through() {
    init_test_logging();
    let service = MealPlanService::new(StubProvider::well_formed());

    let outcome = service.generate(&request(2000)).await.unwrap();

    assert!(!outcome.is_fallback());
    assert_eq!(outcome.kind(), "parsed");
    assert_eq!(outcome, MealPlanOutcome::Parsed(sample_plan_json(2000)));
}

#[tokio::test]
async fn test_unexpected_shape_is_still_parsed() {
    init_test_logging();
    let service =
        MealPlanService::new(StubProvider::text("Sure! {\"note\": \"not a plan\"} Hope it helps"));

    let outcome = service.generate(&request(2000)).await.unwrap();

    assert_eq!(outcome.kind(), "parsed");
    assert_eq!(outcome.to_value().unwrap()["note"], "not a plan");
}

#[tokio::test]
async fn test_malformed_completion_synthesizes_plan() {
    init_test_logging();
    let service = MealPlanService::new(StubProvider::malformed());

    let outcome = service.generate(&request(2000)).await.unwrap();

    let MealPlanOutcome::Synthesized(plan) = outcome else {
        panic!("expected a synthesized plan");
    };
    assert_eq!(plan.daily_targets.calories, 2000);
    assert_eq!(plan.daily_targets.protein, "84g");
    assert_eq!(plan.days.len(), 1);

    let day = &plan.days[&MealPlan::day_key(1)];
    let calories: Vec<u32> = MealSlot::ALL
        .iter()
        .map(|slot| day.meal(*slot).calories)
        .collect();
    assert_eq!(calories, vec![500, 800, 300, 400]);
    assert_eq!(day.daily_total, day.summed_total());
}

#[tokio::test]
async fn test_completion_without_any_braces_synthesizes_plan() {
    init_test_logging();
    let service = MealPlanService::new(StubProvider::text("I cannot help with that."));

    let outcome = service.generate(&request(1500)).await.unwrap();

    assert!(outcome.is_fallback());
    assert_eq!(outcome.to_value().unwrap()["dailyTargets"]["calories"], 1500);
}

#[tokio::test]
async fn test_provider_failure_propagates_without_retry() {
    init_test_logging();
    let provider = StubProvider::failing();
    let service = MealPlanService::new(Arc::clone(&provider) as _);

    let error = service.generate(&request(2000)).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_generation_is_recorded_in_response_log() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let log = Arc::new(ResponseLog::new(dir.path()).await.unwrap());
    let service =
        MealPlanService::new(StubProvider::malformed()).with_response_log(Arc::clone(&log));

    service
        .generate_with_metadata(&request(2000), RequestMetadata::cli("plan"))
        .await
        .unwrap();

    let entries = log.recent(10).await.unwrap();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry["level"], "info");
    assert_eq!(entry["message"], "AI Response Generated");
    assert_eq!(entry["data"]["request"]["method"], "CLI");
    assert_eq!(entry["data"]["request"]["body"]["dailyCalories"], 2000);
    assert_eq!(entry["data"]["response"]["success"], true);
    assert_eq!(entry["data"]["response"]["outcome"], "synthesized");
    assert!(entry["data"]["response"]["processingTime"]
        .as_str()
        .unwrap()
        .ends_with("ms"));
}

#[tokio::test]
async fn test_failure_is_recorded_as_error() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let log = Arc::new(ResponseLog::new(dir.path()).await.unwrap());
    let service =
        MealPlanService::new(StubProvider::failing()).with_response_log(Arc::clone(&log));

    assert!(service.generate(&request(2000)).await.is_err());

    let stats = log.stats().await.unwrap();
    assert_eq!(stats.total_logs, 1);
    assert_eq!(stats.error_count, 1);
    let error = &stats.recent_errors[0];
    assert_eq!(error["message"], "AI Response Error");
    assert_eq!(error["data"]["response"]["success"], false);
    assert!(error["data"]["response"]["error"]["message"]
        .as_str()
        .unwrap()
        .contains("stub upstream is down"));
}

#[tokio::test]
async fn test_demo_plan_is_a_full_week() {
    let plan = demo_plan().unwrap();

    assert_eq!(plan.days.len(), MealPlan::FULL_WEEK);
    for n in 1..=MealPlan::FULL_WEEK {
        let day = &plan.days[&MealPlan::day_key(n)];
        assert_eq!(day.daily_total, day.summed_total());
    }
}

// ============================================================================
// Degraded mode and chart export
// ============================================================================

#[tokio::test]
async fn test_provider_failure_substitutes_demo_plan() {
    init_test_logging();
    let provider = StubProvider::failing();
    let service = MealPlanService::new(Arc::clone(&provider) as _);

    let resolved = service
        .generate_or_demo(&request(2000), RequestMetadata::cli("plan"))
        .await
        .unwrap();

    assert!(resolved.is_demo());
    assert_eq!(provider.call_count(), 1);
    match &resolved {
        PlanOrDemo::Demo { plan, cause } => {
            assert_eq!(plan, &demo_plan().unwrap());
            assert_eq!(cause.code, ErrorCode::ExternalServiceUnavailable);
            assert!(cause.message.contains("stub upstream is down"));
        }
        PlanOrDemo::Generated(_) => panic!("expected the demo plan"),
    }
    let value = resolved.to_value().unwrap();
    assert_eq!(
        value["mealPlan"].as_object().unwrap().len(),
        MealPlan::FULL_WEEK
    );
}

#[tokio::test]
async fn test_reachable_provider_skips_demo_plan() {
    init_test_logging();
    let service = MealPlanService::new(StubProvider::malformed());

    let resolved = service
        .generate_or_demo(&request(2000), RequestMetadata::cli("plan"))
        .await
        .unwrap();

    assert!(!resolved.is_demo());
    match resolved {
        PlanOrDemo::Generated(outcome) => assert!(outcome.is_fallback()),
        PlanOrDemo::Demo { .. } => panic!("expected a generated plan"),
    }
}

#[tokio::test]
async fn test_exported_chart_parses_back() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chart.json");
    let service = MealPlanService::new(StubProvider::failing());
    let req = request(1800);

    let plan = service
        .generate_or_demo(&req, RequestMetadata::cli("plan"))
        .await
        .unwrap()
        .to_value()
        .unwrap();
    MealChart::for_request(&req, 22.9, plan)
        .write_pretty(&path)
        .await
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n  \"userInfo\""));
    let chart: MealChart = serde_json::from_str(&text).unwrap();
    assert_eq!(chart.user_info["age"], 30);
    assert_eq!(chart.user_info["gender"], "male");
    assert_eq!(chart.user_info["bmi"], 22.9);
    assert_eq!(chart.user_info["dailyCalories"], 1800);
    assert_eq!(chart.user_info["allergies"][0], "peanuts");
    assert_eq!(
        chart.meal_plan["mealPlan"].as_object().unwrap().len(),
        MealPlan::FULL_WEEK
    );
    assert!(chrono::DateTime::parse_from_rfc3339(&chart.generated_at).is_ok());
}

#[tokio::test]
async fn test_chart_export_to_missing_directory_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("chart.json");
    let chart = MealChart::for_request(&request(2000), 22.9, serde_json::json!({}));

    let error = chart.write_pretty(&path).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
}
