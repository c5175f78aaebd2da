// ABOUTME: Profile file loading and start date parsing for fastwell-cli
// ABOUTME: Reads profile JSON from disk and validates it against the configured limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use fastwell::errors::{AppError, AppResult};
use fastwell::models::{ProfileLimits, UserProfile};
use serde_json::json;
use tracing::debug;

/// Read, parse and validate a profile
pub fn load_profile(path: &Path, limits: &ProfileLimits) -> AppResult<UserProfile> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_details(json!({ "path": path.display().to_string() })))?;
    let profile: UserProfile = serde_json::from_str(&raw)?;
    profile.validate(limits)?;

    debug!(%profile, "profile loaded");
    Ok(profile)
}

/// Parse an optional `YYYY-MM-DD` start date; midnight UTC, or now when absent
pub fn parse_start_date(start: Option<&str>) -> AppResult<DateTime<Utc>> {
    let Some(raw) = start else {
        return Ok(Utc::now());
    };

    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| {
            AppError::invalid_format(format!("invalid start date '{raw}', expected YYYY-MM-DD"))
                .with_field("start")
                .with_source(e)
        })
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
}
