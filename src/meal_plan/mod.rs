// ABOUTME: Meal plan generation pipeline from prompt construction to parsed or synthesized plan
// ABOUTME: One awaited completion per request, JSON extraction, proportional fallback, and response logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Generation
//!
//! [`MealPlanService::generate`] runs one request through these stages:
//!
//! 1. Build the system and user prompts ([`prompt`])
//! 2. Await a single completion from the [`LlmProvider`] with no retry
//! 3. Extract the JSON object from the completion ([`parser`])
//! 4. If nothing parses, synthesize a single-day plan ([`fallback`])
//!
//! A provider failure is returned to the caller. An unparseable completion
//! is not an error: the caller gets [`MealPlanOutcome::Synthesized`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutriplan_server::config::ServerConfig;
//! use nutriplan_server::llm::OpenAiCompatibleProvider;
//! use nutriplan_server::meal_plan::{MealPlanRequest, MealPlanService};
//! use nutriplan_server::models::{ActivityLevel, Gender, UnitSystem, UserProfile, WeightHeight};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), nutriplan_server::errors::AppError> {
//! let config = ServerConfig::default();
//! let provider = Arc::new(OpenAiCompatibleProvider::new(config.llm.provider_config())?);
//! let service = MealPlanService::new(provider);
//!
//! let measurements = WeightHeight::new(70.0, 175.0, UnitSystem::Metric)?;
//! let profile = UserProfile::new(measurements, 30, Gender::Male, ActivityLevel::Sedentary)?;
//! let outcome = service.generate(&MealPlanRequest::new(profile, 2000)).await?;
//! println!("{}", outcome.kind());
//! # Ok(())
//! # }
//! ```

/// Exportable meal chart document
pub mod chart;
/// Bundled demo plan for degraded mode
pub mod demo;
/// Proportional single-day fallback plan
pub mod fallback;
/// JSON extraction from free-text completions
pub mod parser;
/// Prompt construction
pub mod prompt;

pub use chart::MealChart;

use crate::errors::{AppError, AppResult};
use crate::llm::{ChatRequest, LlmProvider};
use crate::logging::{AiResponseRecord, AppLogger, RequestMetadata, ResponseLog};
use crate::models::{MealPlan, UserProfile};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

/// Sampling temperature for plan generation
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Inputs for one plan generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    /// Metric profile of the user
    pub profile: UserProfile,
    /// Target kcal per day
    pub daily_calories: u32,
    /// Free-text dietary preferences
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Ingredients to avoid
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl MealPlanRequest {
    /// Request with no preferences or allergies
    #[must_use]
    pub const fn new(profile: UserProfile, daily_calories: u32) -> Self {
        Self {
            profile,
            daily_calories,
            dietary_preferences: Vec::new(),
            allergies: Vec::new(),
        }
    }

    /// Set dietary preferences
    #[must_use]
    pub fn with_preferences(mut self, preferences: Vec<String>) -> Self {
        self.dietary_preferences = preferences;
        self
    }

    /// Set allergies
    #[must_use]
    pub fn with_allergies(mut self, allergies: Vec<String>) -> Self {
        self.allergies = allergies;
        self
    }
}

/// Plan returned by the pipeline, tagged by where it came from
///
/// Serializes untagged so clients receive the plan document itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MealPlanOutcome {
    /// JSON extracted from the model's completion, passed through verbatim
    Parsed(Value),
    /// Deterministic single-day plan built because the completion did not parse
    Synthesized(MealPlan),
}

impl MealPlanOutcome {
    /// Whether this is the synthesized fallback
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Synthesized(_))
    }

    /// Short tag for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Parsed(_) => "parsed",
            Self::Synthesized(_) => "synthesized",
        }
    }

    /// Plan document as JSON
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` if the synthesized plan cannot be serialized
    pub fn to_value(&self) -> AppResult<Value> {
        match self {
            Self::Parsed(value) => Ok(value.clone()),
            Self::Synthesized(plan) => Ok(serde_json::to_value(plan)?),
        }
    }
}

/// Plan for a run that must still show something when the upstream fails
#[derive(Debug)]
pub enum PlanOrDemo {
    /// Plan from the pipeline, parsed or synthesized
    Generated(MealPlanOutcome),
    /// Bundled demo plan substituted for a failed completion request
    Demo {
        /// The bundled seven-day plan
        plan: MealPlan,
        /// Why the completion request failed
        cause: AppError,
    },
}

impl PlanOrDemo {
    /// Whether the demo plan was substituted
    #[must_use]
    pub const fn is_demo(&self) -> bool {
        matches!(self, Self::Demo { .. })
    }

    /// Plan document as JSON
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` if a typed plan cannot be serialized
    pub fn to_value(&self) -> AppResult<Value> {
        match self {
            Self::Generated(outcome) => outcome.to_value(),
            Self::Demo { plan, .. } => Ok(serde_json::to_value(plan)?),
        }
    }
}

/// Interpret a completion: parsed JSON if possible, otherwise the fallback
#[must_use]
pub fn interpret_completion(text: &str, request: &MealPlanRequest) -> MealPlanOutcome {
    if let Some(value) = parser::extract_json(text) {
        return MealPlanOutcome::Parsed(value);
    }

    warn!(
        completion_len = text.len(),
        daily_calories = request.daily_calories,
        "Completion did not contain a parseable plan, using fallback"
    );
    MealPlanOutcome::Synthesized(fallback::synthesize_plan(
        request.daily_calories,
        request.profile.weight_kg,
    ))
}

/// Meal plan generation service
#[derive(Clone)]
pub struct MealPlanService {
    provider: Arc<dyn LlmProvider>,
    model: Option<String>,
    temperature: f32,
    response_log: Option<Arc<ResponseLog>>,
}

impl MealPlanService {
    /// Service using the provider's default model
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            response_log: None,
        }
    }

    /// Override the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Record every generation in the response log
    #[must_use]
    pub fn with_response_log(mut self, response_log: Arc<ResponseLog>) -> Self {
        self.response_log = Some(response_log);
        self
    }

    /// Model requests are sent to
    #[must_use]
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Generate a plan
    ///
    /// # Errors
    ///
    /// Returns the provider's error when the completion request fails
    pub async fn generate(&self, request: &MealPlanRequest) -> AppResult<MealPlanOutcome> {
        self.generate_with_metadata(request, RequestMetadata::default())
            .await
    }

    /// Generate a plan, recording the caller in the response log
    ///
    /// # Errors
    ///
    /// Returns the provider's error when the completion request fails
    #[instrument(
        skip(self, request, metadata),
        fields(
            provider = self.provider.name(),
            daily_calories = request.daily_calories,
            endpoint = %metadata.endpoint,
        )
    )]
    pub async fn generate_with_metadata(
        &self,
        request: &MealPlanRequest,
        metadata: RequestMetadata,
    ) -> AppResult<MealPlanOutcome> {
        let start = Instant::now();

        let chat = ChatRequest::new(prompt::build_messages(request))
            .with_model(self.model())
            .with_temperature(self.temperature);

        let result = self
            .provider
            .complete(&chat)
            .await
            .map(|response| interpret_completion(&response.content, request));

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(outcome) => {
                AppLogger::log_meal_plan(outcome.kind(), request.daily_calories, duration_ms);
            }
            Err(e) => error!(error = %e, duration_ms, "Meal plan generation failed"),
        }

        self.record(metadata, request, &result, duration_ms).await;
        result
    }

    /// Generate a plan, substituting the bundled demo plan if the provider fails
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` only if the bundled demo plan is corrupt
    pub async fn generate_or_demo(
        &self,
        request: &MealPlanRequest,
        metadata: RequestMetadata,
    ) -> AppResult<PlanOrDemo> {
        match self.generate_with_metadata(request, metadata).await {
            Ok(outcome) => Ok(PlanOrDemo::Generated(outcome)),
            Err(cause) => {
                warn!(error = %cause, "Meal plan generation failed, using demo plan");
                Ok(PlanOrDemo::Demo {
                    plan: demo::demo_plan()?,
                    cause,
                })
            }
        }
    }

    async fn record(
        &self,
        metadata: RequestMetadata,
        request: &MealPlanRequest,
        result: &AppResult<MealPlanOutcome>,
        duration_ms: u64,
    ) {
        let Some(response_log) = &self.response_log else {
            return;
        };

        let body = serde_json::to_value(request).unwrap_or(Value::Null);
        let mut record = AiResponseRecord::new(metadata, body);
        record.processing_time_ms = Some(duration_ms);
        match result {
            Ok(outcome) => {
                record.outcome = Some(outcome.kind().to_owned());
                record.response = outcome.to_value().ok();
            }
            Err(e) => record.error = Some(e.to_string()),
        }

        if let Err(e) = response_log.log_ai_response(&record).await {
            warn!(error = %e, "Failed to append AI response log entry");
        } else {
            info!(outcome = ?record.outcome, "AI response recorded");
        }
    }
}
