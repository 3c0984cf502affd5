// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes the environment-driven server configuration used by both binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the meal planner server
//!
//! Everything is read from environment variables at startup. See
//! [`environment::ServerConfig::from_env`] for the full list.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, LlmConfig, ServerConfig};
