// ABOUTME: Centralized resource container for dependency injection in the HTTP server
// ABOUTME: Holds the configuration, meal plan service, and AI response log shared across handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Handlers receive `State<Arc<ServerResources>>`. Everything inside is built
//! once at startup; requests share no other mutable state.

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::llm::{LlmProvider, OpenAiCompatibleProvider};
use crate::logging::ResponseLog;
use crate::meal_plan::MealPlanService;
use std::sync::Arc;
use tracing::info;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Meal plan pipeline
    pub meal_plans: Arc<MealPlanService>,
    /// Append-only AI response log
    pub response_log: Arc<ResponseLog>,
}

impl ServerResources {
    /// Assemble resources around an existing provider and log
    ///
    /// The meal plan service uses the model named in the configuration and
    /// records every generation in `response_log`.
    #[must_use]
    pub fn new(
        config: Arc<ServerConfig>,
        provider: Arc<dyn LlmProvider>,
        response_log: Arc<ResponseLog>,
    ) -> Self {
        let meal_plans = MealPlanService::new(provider)
            .with_model(config.llm.model.clone())
            .with_response_log(Arc::clone(&response_log));

        Self {
            config,
            meal_plans: Arc::new(meal_plans),
            response_log,
        }
    }

    /// Build the production resources from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the log
    /// directory cannot be created
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let provider = OpenAiCompatibleProvider::new(config.llm.provider_config())?;
        let response_log = ResponseLog::new(config.log_dir.clone()).await?;

        info!(
            provider = provider.name(),
            model = %config.llm.model,
            log_dir = %response_log.dir().display(),
            "Server resources initialized"
        );

        Ok(Self::new(
            Arc::new(config),
            Arc::new(provider),
            Arc::new(response_log),
        ))
    }
}
