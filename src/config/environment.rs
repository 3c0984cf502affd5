// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads bind address, log directory, CORS origins, and LLM settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! All settings come from environment variables; there is no config file.
//! Unset variables fall back to defaults suitable for local development.

use crate::llm::OpenAiCompatibleConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default directory for the AI response log
pub const DEFAULT_LOG_DIR: &str = "./logs";

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse leniently, defaulting to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Whether this is a production deployment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `["*"]` allows any
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether any origin is allowed
    #[must_use]
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
        }
    }
}

/// Generative-text service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// `OpenAI`-compatible base URL
    pub base_url: String,
    /// Bearer token; never logged
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model used for meal plans
    pub model: String,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        let defaults = OpenAiCompatibleConfig::default();
        Self {
            base_url: defaults.base_url,
            api_key: None,
            model: defaults.default_model,
            request_timeout_secs: defaults.request_timeout_secs,
        }
    }
}

impl LlmConfig {
    /// Provider configuration derived from these settings
    #[must_use]
    pub fn provider_config(&self) -> OpenAiCompatibleConfig {
        OpenAiCompatibleConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            default_model: self.model.clone(),
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Directory for the AI response log
    pub log_dir: PathBuf,
    /// CORS settings
    pub cors: CorsConfig,
    /// Generative-text service settings
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            cors: CorsConfig::default(),
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable (`PORT`, `HTTP_PORT`,
    /// `LLM_REQUEST_TIMEOUT_SECS`) is set but not a valid number
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let defaults = Self::default();

        let http_port = match env::var("PORT").or_else(|_| env::var("HTTP_PORT")) {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            Err(_) => defaults.http_port,
        };

        let request_timeout_secs = match env::var("LLM_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid LLM_REQUEST_TIMEOUT_SECS value: {raw}"))?,
            Err(_) => defaults.llm.request_timeout_secs,
        };

        let config = Self {
            host: env_var_or("HOST", DEFAULT_HOST),
            http_port,
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            log_dir: PathBuf::from(env_var_or("LOG_DIR", DEFAULT_LOG_DIR)),
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or("CORS_ALLOWED_ORIGINS", "*")),
            },
            llm: LlmConfig {
                base_url: env_var_or("OPENAI_BASE_URL", &defaults.llm.base_url),
                api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
                model: env_var_or("MEAL_PLAN_MODEL", &defaults.llm.model),
                request_timeout_secs,
            },
        };

        Ok(config)
    }

    /// Socket address to bind
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid HOST value: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.http_port))
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Meal Planner Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Log Directory: {}\n\
             - CORS Origins: {}\n\
             - LLM Endpoint: {}\n\
             - LLM Model: {}\n\
             - LLM API Key: {}\n\
             - LLM Timeout: {}s",
            self.host,
            self.http_port,
            self.environment,
            self.log_dir.display(),
            self.cors.allowed_origins.join(", "),
            self.llm.base_url,
            self.llm.model,
            if self.llm.api_key.is_some() {
                "Configured"
            } else {
                "Missing"
            },
            self.llm.request_timeout_secs
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000, https://plan.example.com,,"),
            vec!["http://localhost:3000", "https://plan.example.com"]
        );
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PRODUCTION"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_hides_api_key() {
        let mut config = ServerConfig::default();
        config.llm.api_key = Some("sk-very-secret".to_owned());

        let summary = config.summary();
        assert!(!summary.contains("sk-very-secret"));
        assert!(summary.contains("LLM API Key: Configured"));
        assert!(summary.contains("5000"));
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr().unwrap().port(), DEFAULT_HTTP_PORT);

        let bad = ServerConfig {
            host: "not-an-ip".to_owned(),
            ..ServerConfig::default()
        };
        assert!(bad.bind_addr().is_err());
    }
}
