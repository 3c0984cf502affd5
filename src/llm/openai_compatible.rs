// ABOUTME: OpenAI-compatible chat-completions provider used for meal-plan generation
// ABOUTME: Works against api.openai.com by default or any endpoint speaking the same API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Provider
//!
//! Sends one non-streaming `POST {base_url}/chat/completions` per request.
//!
//! ## Configuration
//!
//! [`OpenAiCompatibleConfig`] is built from the server environment by
//! `LlmConfig::provider_config`. The API key is optional for local servers
//! such as Ollama.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nutriplan_server::llm::{
//!     ChatMessage, ChatRequest, LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider,
//! };
//! use nutriplan_server::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig {
//!         api_key: Some("sk-...".to_owned()),
//!         ..OpenAiCompatibleConfig::default()
//!     })?;
//!     let request = ChatRequest::new(vec![
//!         ChatMessage::user("Name three Nepalese breakfast dishes."),
//!     ]);
//!     let response = provider.complete(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::errors::{AppError, ErrorCode};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Default base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model for meal-plan generation
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection timeout
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default request timeout (a 7-day plan is a long completion)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Service label used in error messages
const SERVICE_LABEL: &str = "OpenAI";

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// OpenAI-compatible API request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

/// Message structure for OpenAI-compatible API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// OpenAI-compatible API response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    model: String,
}

/// Choice in response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

/// Message in response
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// Usage statistics in response
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Error response structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <https://api.openai.com/v1>)
    pub base_url: String,
    /// API key (optional for local servers)
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for OpenAiCompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            default_model: DEFAULT_MODEL.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        if config.api_key.is_none() {
            warn!(
                base_url = %config.base_url,
                "No API key configured; requests will fail unless the endpoint is unauthenticated"
            );
        }

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// Add the bearer header when a key is configured
    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }

    /// Map a transport failure onto an error code
    fn transport_error(&self, e: &reqwest::Error) -> AppError {
        if e.is_connect() {
            AppError::external_unavailable(
                SERVICE_LABEL,
                format!("Cannot connect to {}", self.config.base_url),
            )
        } else if e.is_timeout() {
            AppError::external_unavailable(
                SERVICE_LABEL,
                format!(
                    "Request timed out after {}s",
                    self.config.request_timeout_secs
                ),
            )
        } else {
            AppError::external_service(SERVICE_LABEL, format!("Failed to connect: {e}"))
        }
    }

    /// Parse error response from API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let message = error_response.error.message;
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 | 403 => AppError::new(
                    ErrorCode::ExternalAuthFailed,
                    format!("API authentication failed: {message}"),
                ),
                429 => AppError::new(
                    ErrorCode::ExternalRateLimited,
                    Self::extract_rate_limit_message(&message),
                ),
                400 => AppError::external_service(
                    SERVICE_LABEL,
                    format!("API validation error: {message}"),
                ),
                404 => AppError::external_service(
                    SERVICE_LABEL,
                    format!("Model or endpoint not found: {message}"),
                ),
                500..=599 => AppError::external_unavailable(
                    SERVICE_LABEL,
                    format!("Service unavailable: {message}"),
                ),
                _ => AppError::external_service(SERVICE_LABEL, format!("{error_type} - {message}")),
            }
        } else {
            match status.as_u16() {
                401 | 403 => AppError::new(
                    ErrorCode::ExternalAuthFailed,
                    format!("API authentication failed ({status})"),
                ),
                500..=599 => AppError::external_unavailable(
                    SERVICE_LABEL,
                    format!("Upstream is not responding ({status})"),
                ),
                _ => AppError::external_service(
                    SERVICE_LABEL,
                    format!(
                        "API error ({}): {}",
                        status,
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            }
        }
    }

    /// Extract a user-friendly rate limit message from an `OpenAI` error
    fn extract_rate_limit_message(message: &str) -> String {
        let lowered = message.to_lowercase();
        if let Some(retry_pos) = lowered.find("try again in ") {
            let after_prefix = &lowered[retry_pos + "try again in ".len()..];
            let end_pos = after_prefix
                .find(|c: char| !c.is_ascii_digit() && c != '.')
                .unwrap_or(after_prefix.len());
            if let Ok(seconds) = after_prefix[..end_pos].parse::<f64>() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let seconds_int = seconds.ceil() as u64;
                return format!("LLM rate limit reached. Please try again in {seconds_int} seconds.");
            }
        }
        "LLM rate limit reached. Please wait a moment and try again.".to_owned()
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            stream: false,
        };

        debug!(
            messages = openai_request.messages.len(),
            "Sending chat completion request"
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Content-Type", "application/json")
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {}: {}", self.config.base_url, e);
                self.transport_error(&e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {}", e);
            AppError::external_service(SERVICE_LABEL, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse API response: {}", e);
            AppError::external_service(SERVICE_LABEL, format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE_LABEL, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received response: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model,
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}
