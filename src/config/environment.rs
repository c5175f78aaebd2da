// ABOUTME: Environment configuration for deployment mode, CLI output and profile validation limits
// ABOUTME: Parses FASTWELL_* environment variables and rejects unparseable or inverted ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::str::FromStr;

use fastwell_core::errors::{AppError, AppResult};
use fastwell_core::models::ProfileLimits;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::logging::LoggingConfig;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Automated tests
    Testing,
    /// Production deployment
    Production,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Testing => write!(f, "testing"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON
    Json,
    /// Human-readable text
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Parse from string with fallback to pretty
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Default CLI output format
    pub output_format: OutputFormat,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Bounds applied by profile validation
    pub profile_limits: ProfileLimits,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a `FASTWELL_PROFILE_*` value cannot be
    /// parsed or the resulting limits are inconsistent
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let output_format = env::var("FASTWELL_OUTPUT_FORMAT")
            .map(|value| OutputFormat::from_str_or_default(&value))
            .unwrap_or_default();

        let config = Self {
            environment,
            output_format,
            logging: LoggingConfig::from_env(),
            profile_limits: profile_limits_from_env()?,
        };

        config.validate()?;
        debug!(
            environment = %config.environment,
            output_format = %config.output_format,
            "engine configuration loaded"
        );
        Ok(config)
    }

    /// Check internal consistency
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for inverted or non-positive ranges
    pub fn validate(&self) -> AppResult<()> {
        let limits = &self.profile_limits;

        if limits.min_age > limits.max_age {
            return Err(AppError::config_invalid(format!(
                "profile age range is inverted: {} > {}",
                limits.min_age, limits.max_age
            )));
        }
        validate_float_range("height", limits.min_height_cm, limits.max_height_cm)?;
        validate_float_range("weight", limits.min_weight_kg, limits.max_weight_kg)?;

        if self.environment.is_production() && self.logging.level == "trace" {
            warn!("trace logging enabled in production");
        }

        Ok(())
    }
}

fn validate_float_range(name: &str, min: f64, max: f64) -> AppResult<()> {
    if !min.is_finite() || !max.is_finite() || min <= 0.0 {
        return Err(AppError::config_invalid(format!(
            "profile {name} bounds must be finite and positive"
        )));
    }
    if min > max {
        return Err(AppError::config_invalid(format!(
            "profile {name} range is inverted: {min} > {max}"
        )));
    }
    Ok(())
}

fn profile_limits_from_env() -> AppResult<ProfileLimits> {
    let mut limits = ProfileLimits::default();

    if let Some(value) = env_override("FASTWELL_PROFILE_MIN_AGE")? {
        limits.min_age = value;
    }
    if let Some(value) = env_override("FASTWELL_PROFILE_MAX_AGE")? {
        limits.max_age = value;
    }
    if let Some(value) = env_override("FASTWELL_PROFILE_MIN_HEIGHT_CM")? {
        limits.min_height_cm = value;
    }
    if let Some(value) = env_override("FASTWELL_PROFILE_MAX_HEIGHT_CM")? {
        limits.max_height_cm = value;
    }
    if let Some(value) = env_override("FASTWELL_PROFILE_MIN_WEIGHT_KG")? {
        limits.min_weight_kg = value;
    }
    if let Some(value) = env_override("FASTWELL_PROFILE_MAX_WEIGHT_KG")? {
        limits.max_weight_kg = value;
    }

    Ok(limits)
}

fn env_override<T: FromStr>(key: &str) -> AppResult<Option<T>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::config_invalid(format!("Invalid {key}: {raw}"))),
        Err(_) => Ok(None),
    }
}
