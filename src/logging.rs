// ABOUTME: Logging configuration and structured logging setup for the analyzer and CLI
// ABOUTME: Configures log levels, formatters, and stderr output plus game event helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter

//! Structured logging configuration
//!
//! Logs always go to stderr so that JSON written to stdout by the CLI stays
//! machine-readable.

use std::env;
use std::io;

use anyhow::Result;
use hunter_core::models::{ClassificationResult, Monster};
use serde_json::json;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Service name reported in startup logs
pub const SERVICE_NAME: &str = "calorie-hunter";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span information for tracing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminal use
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unknown is pretty
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Compact, |value| LogFormat::from_str_lossy(&value));

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Same configuration at a different level
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter: `RUST_LOG` if set, else the configured level
    fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG")
            .map_or_else(
                |_| EnvFilter::new(&self.level),
                |env_directive| EnvFilter::new(&env_directive),
            )
            // Rayon worker noise
            .add_directive(
                "rayon=warn"
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            )
            // Keep our application logs at desired level
            .add_directive(
                format!("calorie_hunter={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| Level::INFO.into()),
            )
            .add_directive(
                format!("hunter_cli={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| Level::INFO.into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();

        Ok(())
    }

    fn log_startup_info(&self) {
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Game-specific logging utilities
pub struct GameLogger;

impl GameLogger {
    /// Log the outcome of one classification
    pub fn log_classification(owner_id: &str, food_name: &str, result: &ClassificationResult) {
        info!(
            owner.id = %owner_id,
            food.name = %food_name,
            food.class = ?result.food_class,
            classify.outcome = %result.result_type(),
            classify.corruption = %result.corruption_score,
            classify.fast_food = %result.is_fast_food,
            "Food classified"
        );
    }

    /// Log a legendary spawn, which needs a raid to defeat
    pub fn log_legendary_spawn(monster: &Monster) {
        warn!(
            owner.id = %monster.owner_id,
            monster.id = %monster.id,
            monster.name = %monster.name,
            monster.max_hp = %monster.max_hp,
            "Legendary monster spawned"
        );
    }

    /// Log a batch run summary
    pub fn log_batch_summary(owner_id: &str, total: usize, monsters: usize, duration_ms: u64) {
        let summary = json!({
            "total": total,
            "monsters": monsters,
            "items": total.saturating_sub(monsters),
        });
        info!(
            owner.id = %owner_id,
            batch.duration_ms = %duration_ms,
            batch.summary = %summary,
            "Batch classified"
        );
    }

    /// Log rejected input
    pub fn log_rejected_input(owner_id: &str, food_name: &str, reason: &str) {
        warn!(
            owner.id = %owner_id,
            food.name = %food_name,
            reason = %reason,
            "Nutrition facts rejected"
        );
    }
}
