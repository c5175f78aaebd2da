// ABOUTME: Shared test utilities and profile fixtures for integration tests
// ABOUTME: Provides quiet test logging and the reference profiles used across suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fastwell`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use fastwell::models::{
    ActivityLevel, DietPreference, FastingGoal, HealthCondition, Sex, SleepQuality, StressLevel,
    UserProfile,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed plan start date so plans compare structurally
pub fn fixed_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 7, 0, 0).unwrap()
}

/// 30y male, 175 cm, 90 kg (BMI ~29.4), sedentary, fat loss, omnivore
pub fn overweight_fat_loss_profile() -> UserProfile {
    UserProfile::new(30, Sex::Male, 175.0, 90.0)
        .with_activity_level(ActivityLevel::Sedentary)
        .with_goal(FastingGoal::FatLoss)
        .with_diet(DietPreference::Omnivore)
}

/// 30y male, 170 cm, 95 kg (BMI ~32.9), intense, fat loss
pub fn obese_intense_profile() -> UserProfile {
    UserProfile::new(30, Sex::Male, 170.0, 95.0)
        .with_activity_level(ActivityLevel::Intense)
        .with_goal(FastingGoal::FatLoss)
}

/// 40y female, 165 cm, 60 kg (BMI ~22.0), maintenance, no conditions
pub fn healthy_profile() -> UserProfile {
    UserProfile::new(40, Sex::Female, 165.0, 60.0).with_goal(FastingGoal::Maintenance)
}

/// 70y male, 170 cm, 70 kg, metabolic reset
pub fn elderly_metabolic_profile() -> UserProfile {
    UserProfile::new(70, Sex::Male, 170.0, 70.0).with_goal(FastingGoal::MetabolicReset)
}

/// 30y female, 165 cm, 62 kg (BMI ~22.8), maintenance, high stress and poor sleep
pub fn stressed_maintenance_profile() -> UserProfile {
    UserProfile::new(30, Sex::Female, 165.0, 62.0)
        .with_goal(FastingGoal::Maintenance)
        .with_stress(StressLevel::High)
        .with_sleep(SleepQuality::Poor)
}

/// Healthy profile carrying the given conditions
pub fn profile_with_conditions(conditions: &[HealthCondition]) -> UserProfile {
    conditions
        .iter()
        .fold(healthy_profile(), |profile, condition| {
            profile.with_condition(*condition)
        })
}

/// Every combination of the categorical profile fields over a spread of body sizes
pub fn profile_grid() -> Vec<UserProfile> {
    let bodies = [
        (25, Sex::Female, 150.0, 40.0),
        (30, Sex::Male, 175.0, 90.0),
        (45, Sex::Female, 165.0, 60.0),
        (70, Sex::Male, 170.0, 70.0),
        (35, Sex::Male, 170.0, 120.0),
        (85, Sex::Female, 155.0, 45.0),
    ];

    let mut grid = Vec::new();
    for (age, sex, height, weight) in bodies {
        for activity in ActivityLevel::all() {
            for goal in FastingGoal::all() {
                for stress in [StressLevel::Normal, StressLevel::High] {
                    for sleep in [SleepQuality::Normal, SleepQuality::Poor] {
                        for conditions in [&[][..], &[HealthCondition::Diabetes][..]] {
                            let mut profile = UserProfile::new(age, sex, height, weight)
                                .with_activity_level(*activity)
                                .with_goal(*goal)
                                .with_stress(stress)
                                .with_sleep(sleep);
                            for condition in conditions {
                                profile = profile.with_condition(*condition);
                            }
                            grid.push(profile);
                        }
                    }
                }
            }
        }
    }
    grid
}
