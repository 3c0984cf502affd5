// ABOUTME: Append-only JSON-lines log of AI responses with date-stamped files
// ABOUTME: Supports read-back by recency, case-insensitive keyword search, and level counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # AI Response Log
//!
//! Each call appends one line to `ai-responses-YYYY-MM-DD.log` (UTC date) in the
//! configured directory:
//!
//! ```json
//! {"timestamp":"2025-06-01T10:00:00.000Z","level":"info","message":"AI Response Generated","data":{...}}
//! ```
//!
//! Entries are mirrored to `tracing` at the same level. Reads only look at
//! today's file; lines that are not valid JSON come back as `{"raw": "<line>"}`.

use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::errors::{AppError, AppResult};

/// Default number of entries returned by [`ResponseLog::recent`]
pub const DEFAULT_RECENT_LIMIT: usize = 50;

/// Default number of entries returned by [`ResponseLog::search`]
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

/// Number of error entries kept in [`LogStats::recent_errors`]
const RECENT_ERRORS_KEPT: usize = 5;

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal operation
    Info,
    /// Degraded but handled
    Warn,
    /// Failed operation
    Error,
}

impl LogLevel {
    /// Wire name of this level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the log file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO-8601 UTC timestamp with millisecond precision
    pub timestamp: String,
    /// Severity
    pub level: LogLevel,
    /// Short description
    pub message: String,
    /// Structured payload, `null` when absent
    pub data: Value,
}

/// Caller details recorded alongside an AI response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetadata {
    /// HTTP route or CLI command that triggered the generation
    pub endpoint: String,
    /// HTTP method (`POST` for the API, `CLI` for the terminal)
    pub method: String,
    /// Client user agent, if known
    pub user_agent: Option<String>,
    /// Client address, if known
    pub ip: Option<String>,
}

impl RequestMetadata {
    /// Metadata for an HTTP request
    #[must_use]
    pub fn http(endpoint: &str, user_agent: Option<String>, ip: Option<String>) -> Self {
        Self {
            endpoint: endpoint.to_owned(),
            method: "POST".to_owned(),
            user_agent,
            ip,
        }
    }

    /// Metadata for a CLI invocation
    #[must_use]
    pub fn cli(command: &str) -> Self {
        Self {
            endpoint: command.to_owned(),
            method: "CLI".to_owned(),
            user_agent: Some(format!("nutriplan-cli/{}", env!("CARGO_PKG_VERSION"))),
            ip: None,
        }
    }
}

/// Request half of an AI response record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiRequestSummary {
    /// Route or command
    pub endpoint: String,
    /// HTTP method or `CLI`
    pub method: String,
    /// Request payload
    pub body: Value,
    /// When the request arrived
    pub timestamp: String,
}

/// Structured record of one generation, written as the `data` of a log entry
#[derive(Debug, Clone)]
pub struct AiResponseRecord {
    /// What was asked
    pub request: AiRequestSummary,
    /// Caller details
    pub metadata: RequestMetadata,
    /// Response payload (the plan) on success
    pub response: Option<Value>,
    /// Outcome tag such as `parsed` or `synthesized`
    pub outcome: Option<String>,
    /// Wall-clock time spent generating
    pub processing_time_ms: Option<u64>,
    /// Failure message when the generation failed
    pub error: Option<String>,
}

impl AiResponseRecord {
    /// Start a record for a request received now
    #[must_use]
    pub fn new(metadata: RequestMetadata, body: Value) -> Self {
        Self {
            request: AiRequestSummary {
                endpoint: metadata.endpoint.clone(),
                method: metadata.method.clone(),
                body,
                timestamp: now_timestamp(),
            },
            metadata,
            response: None,
            outcome: None,
            processing_time_ms: None,
            error: None,
        }
    }

    /// Whether the generation failed
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Render the record as the entry's `data` payload
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "request": self.request,
            "response": {
                "success": !self.is_error(),
                "outcome": self.outcome,
                "data": self.response,
                "processingTime": self.processing_time_ms.map(|ms| format!("{ms}ms")),
                "error": self.error.as_ref().map(|message| json!({ "message": message })),
            },
            "metadata": {
                "userAgent": self.metadata.user_agent.as_deref().unwrap_or("unknown"),
                "ip": self.metadata.ip.as_deref().unwrap_or("unknown"),
            }
        })
    }
}

/// Counts per level for today's file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStats {
    /// Every line in the file
    pub total_logs: usize,
    /// Lines at `error`
    pub error_count: usize,
    /// Lines at `warn`
    pub warning_count: usize,
    /// Lines at `info`
    pub info_count: usize,
    /// Lines at `debug`
    pub debug_count: usize,
    /// Last few error entries, oldest first
    pub recent_errors: Vec<Value>,
}

/// Date-stamped JSON-lines log
pub struct ResponseLog {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl ResponseLog {
    /// Open (and create if needed) the log directory
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the directory cannot be created
    pub async fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create log directory {}: {e}",
                dir.display()
            ))
            .with_source(e)
        })?;

        debug!(dir = %dir.display(), "Response log ready");

        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory holding the log files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a given UTC date
    #[must_use]
    pub fn file_name_for(date: NaiveDate) -> String {
        format!("ai-responses-{}.log", date.format("%Y-%m-%d"))
    }

    /// Path of today's file
    #[must_use]
    pub fn current_file(&self) -> PathBuf {
        self.dir
            .join(Self::file_name_for(Utc::now().date_naive()))
    }

    /// Append one entry and mirror it to `tracing`
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be opened or written
    pub async fn log(&self, level: LogLevel, message: &str, data: Option<Value>) -> AppResult<()> {
        let entry = LogEntry {
            timestamp: now_timestamp(),
            level,
            message: message.to_owned(),
            data: data.unwrap_or(Value::Null),
        };

        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        mirror_to_tracing(&entry);

        let path = self.current_file();
        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| {
                AppError::storage(format!("Failed to open {}: {e}", path.display())).with_source(e)
            })?;
        file.write_all(line.as_bytes()).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", path.display())).with_source(e)
        })?;
        file.flush()
            .await
            .map_err(|e| AppError::storage(format!("Failed to flush log: {e}")).with_source(e))?;

        Ok(())
    }

    /// Append an `info` entry
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` on write failure
    pub async fn info(&self, message: &str, data: Option<Value>) -> AppResult<()> {
        self.log(LogLevel::Info, message, data).await
    }

    /// Append a `warn` entry
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` on write failure
    pub async fn warn(&self, message: &str, data: Option<Value>) -> AppResult<()> {
        self.log(LogLevel::Warn, message, data).await
    }

    /// Append an `error` entry
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` on write failure
    pub async fn error(&self, message: &str, data: Option<Value>) -> AppResult<()> {
        self.log(LogLevel::Error, message, data).await
    }

    /// Append a `debug` entry
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` on write failure
    pub async fn debug(&self, message: &str, data: Option<Value>) -> AppResult<()> {
        self.log(LogLevel::Debug, message, data).await
    }

    /// Append an AI response record, at `error` when the generation failed
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` on write failure
    pub async fn log_ai_response(&self, record: &AiResponseRecord) -> AppResult<()> {
        if record.is_error() {
            self.error("AI Response Error", Some(record.to_value()))
                .await
        } else {
            self.info("AI Response Generated", Some(record.to_value()))
                .await
        }
    }

    /// Last `limit` entries of today's file, oldest first
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file exists but cannot be read
    pub async fn recent(&self, limit: usize) -> AppResult<Vec<Value>> {
        let lines = self.read_lines().await?;
        Ok(tail(&lines, limit).iter().map(|l| parse_line(l)).collect())
    }

    /// Last `limit` entries whose raw line contains `keyword`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file exists but cannot be read
    pub async fn search(&self, keyword: &str, limit: usize) -> AppResult<Vec<Value>> {
        let needle = keyword.to_lowercase();
        let lines = self.read_lines().await?;
        let matches: Vec<&String> = lines
            .iter()
            .filter(|line| line.to_lowercase().contains(&needle))
            .collect();
        Ok(tail(&matches, limit).iter().map(|l| parse_line(l)).collect())
    }

    /// Level counts and the most recent errors for today's file
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file exists but cannot be read
    pub async fn stats(&self) -> AppResult<LogStats> {
        let lines = self.read_lines().await?;
        let mut stats = LogStats {
            total_logs: lines.len(),
            ..LogStats::default()
        };

        let mut errors = Vec::new();
        for line in &lines {
            let entry = parse_line(line);
            match entry.get("level").and_then(Value::as_str) {
                Some("error") => {
                    stats.error_count += 1;
                    errors.push(entry);
                }
                Some("warn") => stats.warning_count += 1,
                Some("info") => stats.info_count += 1,
                Some("debug") => stats.debug_count += 1,
                _ => {}
            }
        }

        let skip = errors.len().saturating_sub(RECENT_ERRORS_KEPT);
        stats.recent_errors = errors.into_iter().skip(skip).collect();

        Ok(stats)
    }

    /// Non-empty lines of today's file; a missing file reads as empty
    async fn read_lines(&self) -> AppResult<Vec<String>> {
        let path = self.current_file();
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_owned)
                .collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(
                AppError::storage(format!("Failed to read {}: {e}", path.display()))
                    .with_source(e),
            ),
        }
    }
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn tail<T>(items: &[T], limit: usize) -> &[T] {
    &items[items.len().saturating_sub(limit)..]
}

fn parse_line(line: &str) -> Value {
    serde_json::from_str(line).unwrap_or_else(|_| json!({ "raw": line }))
}

fn mirror_to_tracing(entry: &LogEntry) {
    let message = entry.message.as_str();
    match entry.level {
        LogLevel::Debug => debug!(target: "ai_responses", data = %entry.data, "{message}"),
        LogLevel::Info => info!(target: "ai_responses", "{message}"),
        LogLevel::Warn => warn!(target: "ai_responses", data = %entry.data, "{message}"),
        LogLevel::Error => error!(target: "ai_responses", data = %entry.data, "{message}"),
    }
}
