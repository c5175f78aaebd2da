// ABOUTME: Core data models for the Fastwell fasting plan engine
// ABOUTME: Re-exports UserProfile, FastingPreset, FastingPlan, PlanSafetyResult and Recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Inputs are owned by the profile store, outputs by the plan store. The
//! engine reads a `UserProfile` snapshot and returns fresh values; it never
//! mutates either side.
//!
//! ## Core Models
//!
//! - `UserProfile`: body metrics, goal, diet, health conditions, stress and sleep
//! - `FastingPreset`: named fasting schedule with fixed fasting hours
//! - `FastingPlan` / `Milestone`: generated plan and its checkpoint schedule
//! - `PlanSafetyResult`: safe, caution or blocked verdict with reason codes
//! - `Recommendation`: prioritized fitness advisory

mod plan;
mod preset;
mod profile;
mod recommendation;
mod safety;

pub use plan::{FastingPlan, Milestone, MilestoneKind};
pub use preset::FastingPreset;
pub use profile::{
    ActivityLevel, DietPreference, FastingGoal, HealthCondition, ProfileLimits, Sex,
    SleepQuality, StressLevel, UserProfile,
};
pub use recommendation::{Recommendation, RecommendationKind, RecommendationPriority};
pub use safety::{PlanSafetyResult, SafetyReason};
