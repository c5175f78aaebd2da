// ABOUTME: Engine commands for fastwell-cli: check, plan, advise and assess
// ABOUTME: Loads and validates the profile, runs the engine and renders the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use fastwell::config::{EngineConfig, OutputFormat};
use fastwell::errors::AppError;
use fastwell::intelligence::{generate_plan_starting, recommendations, safety_check};
use fastwell::models::{FastingPlan, PlanSafetyResult, UserProfile};
use fastwell::services::OnboardingService;
use tracing::info;

use crate::helpers::display::{
    display_assessment, display_plan, display_recommendations, display_safety, print_json,
};
use crate::helpers::profile::{load_profile, parse_start_date};

/// Run the safety check and print the verdict
///
/// A blocked verdict is printed, not treated as a failure.
pub fn check(profile_path: &Path, config: &EngineConfig, format: OutputFormat) -> Result<()> {
    let profile = load_profile(profile_path, &config.profile_limits)?;
    let verdict = safety_check(&profile);
    info!(verdict = ?verdict.reason_codes(), "safety check complete");

    match format {
        OutputFormat::Json => print_json(&verdict),
        OutputFormat::Pretty => {
            display_safety(&verdict);
            Ok(())
        }
    }
}

/// Generate and print a plan; fails when the profile is blocked
pub fn plan(
    profile_path: &Path,
    start: Option<&str>,
    config: &EngineConfig,
    format: OutputFormat,
) -> Result<()> {
    let profile = load_profile(profile_path, &config.profile_limits)?;
    let plan = screened_plan(&profile, start)?;

    match format {
        OutputFormat::Json => print_json(&plan),
        OutputFormat::Pretty => {
            display_plan(&plan);
            Ok(())
        }
    }
}

/// Print fitness advisories for the profile's plan; fails when blocked
pub fn advise(profile_path: &Path, config: &EngineConfig, format: OutputFormat) -> Result<()> {
    let profile = load_profile(profile_path, &config.profile_limits)?;
    let plan = screened_plan(&profile, None)?;
    let advisories = recommendations(&profile, &plan);

    match format {
        OutputFormat::Json => print_json(&advisories),
        OutputFormat::Pretty => {
            display_recommendations(&advisories);
            Ok(())
        }
    }
}

/// Run the onboarding assessment; fails when blocked
pub fn assess(
    profile_path: &Path,
    start: Option<&str>,
    config: &EngineConfig,
    format: OutputFormat,
) -> Result<()> {
    let profile = load_profile(profile_path, &config.profile_limits)?;
    let start_date = parse_start_date(start)?;

    let service = OnboardingService::with_limits(config.profile_limits);
    let assessment = service.assess_at(&profile, start_date)?;

    match format {
        OutputFormat::Json => print_json(&assessment),
        OutputFormat::Pretty => {
            display_assessment(&assessment);
            Ok(())
        }
    }
}

fn screened_plan(profile: &UserProfile, start: Option<&str>) -> Result<FastingPlan> {
    if let PlanSafetyResult::Blocked { reason } = safety_check(profile) {
        return Err(AppError::plan_blocked(reason.code()).into());
    }
    let start_date = parse_start_date(start)?;
    Ok(generate_plan_starting(profile, start_date))
}
