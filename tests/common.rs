// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides stub LLM providers, sample profiles, and server resource construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutriplan_server`
//!
//! The stub provider stands in for the generative-text service so the
//! pipeline and routes can be exercised deterministically.

use async_trait::async_trait;
use nutriplan_server::{
    config::ServerConfig,
    errors::{AppError, ErrorCode},
    llm::{ChatRequest, ChatResponse, LlmProvider},
    logging::ResponseLog,
    models::{ActivityLevel, Gender, UnitSystem, UserProfile, WeightHeight},
    resources::ServerResources,
};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Stub Provider
// ============================================================================

enum StubBehavior {
    Reply(String),
    Fail(ErrorCode, String),
}

/// Provider returning canned text or a canned failure, recording every request
pub struct StubProvider {
    behavior: StubBehavior,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubProvider {
    /// Reply with fixed text
    pub fn text(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            behavior: StubBehavior::Reply(reply.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Reply with prose wrapped around a valid seven-day plan
    pub fn well_formed() -> Arc<Self> {
        Self::text(format!(
            "Here is your personalized plan:\n```json\n{}\n```\nEnjoy your meals!",
            serde_json::to_string_pretty(&sample_plan_json(2000)).unwrap()
        ))
    }

    /// Reply with text that contains no parseable object
    pub fn malformed() -> Arc<Self> {
        Self::text("{ \"dailyTargets\": { calories: 2000, \"mealPlan\": [ oops")
    }

    /// Fail every request as an unreachable upstream
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            behavior: StubBehavior::Fail(
                ErrorCode::ExternalServiceUnavailable,
                "stub upstream is down".to_owned(),
            ),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Number of completion calls received
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.behavior {
            StubBehavior::Reply(text) => Ok(ChatResponse {
                content: text.clone(),
                model: request
                    .model
                    .clone()
                    .unwrap_or_else(|| "stub-model".to_owned()),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            StubBehavior::Fail(code, message) => Err(AppError::new(*code, message.clone())),
        }
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// 70 kg, 175 cm, 30-year-old male, moderately active
pub fn sample_profile() -> UserProfile {
    let measurements = WeightHeight::new(70.0, 175.0, UnitSystem::Metric).unwrap();
    UserProfile::new(measurements, 30, Gender::Male, ActivityLevel::ModeratelyActive).unwrap()
}

fn sample_meal(name: &str, calories: u32) -> Value {
    json!({
        "name": name,
        "ingredients": "rice, lentils, vegetables",
        "portions": "1 cup each",
        "calories": calories,
        "protein": 20,
        "carbs": 60,
        "fats": 10,
        "instructions": "Cook and serve"
    })
}

/// Seven-day plan document in the requested shape
pub fn sample_plan_json(daily_calories: u32) -> Value {
    let quarter = daily_calories / 4;
    let mut days = serde_json::Map::new();
    for n in 1..=7 {
        days.insert(
            format!("day{n}"),
            json!({
                "breakfast": sample_meal("Sel Roti with Tea", quarter),
                "lunch": sample_meal("Dal Bhat", quarter),
                "snack": sample_meal("Chiura with Yogurt", quarter),
                "dinner": sample_meal("Momo with Soup", daily_calories - 3 * quarter),
                "dailyTotal": { "calories": daily_calories, "protein": 80, "carbs": 240, "fats": 40 }
            }),
        );
    }
    json!({
        "dailyTargets": {
            "calories": daily_calories,
            "protein": "80-100g",
            "carbs": "220-260g",
            "fats": "40-60g"
        },
        "mealPlan": days
    })
}

/// Request body for `POST /api/generate-meal-plan`
pub fn meal_plan_body(daily_calories: u32) -> Value {
    json!({
        "weight": 70,
        "height": 175,
        "age": 30,
        "gender": "male",
        "activityLevel": "moderately active",
        "dailyCalories": daily_calories,
        "dietaryPreferences": ["vegetarian"],
        "allergies": ["peanuts"]
    })
}

// ============================================================================
// Server Resources
// ============================================================================

/// Resources wired to a stub provider and a log in `log_dir`
pub async fn create_test_resources(
    provider: Arc<StubProvider>,
    log_dir: &Path,
) -> Arc<ServerResources> {
    init_test_logging();
    let config = ServerConfig {
        log_dir: log_dir.to_path_buf(),
        ..ServerConfig::default()
    };
    let response_log = ResponseLog::new(log_dir).await.unwrap();
    Arc::new(ServerResources::new(
        Arc::new(config),
        provider,
        Arc::new(response_log),
    ))
}
