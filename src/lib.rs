// ABOUTME: Main library entry point for the Fastwell fasting plan engine
// ABOUTME: Safety screening, plan generation and fitness advisories over a user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fastwell
//!
//! A deterministic rule engine that screens a user profile for fasting
//! contraindications, generates a personalized fasting plan and derives
//! companion fitness advisories.
//!
//! ## Architecture
//!
//! - **Models**: profile, presets, plans, safety verdicts and advisories
//!   (re-exported from `fastwell-core`)
//! - **Intelligence**: the three pure engine components
//! - **Services**: the onboarding facade that chains them
//! - **Config**: environment-driven settings for the CLI and services
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use fastwell::intelligence::{generate_plan, recommendations, safety_check};
//! use fastwell::models::{FastingGoal, Sex, UserProfile};
//!
//! let profile = UserProfile::new(30, Sex::Female, 165.0, 70.0).with_goal(FastingGoal::FatLoss);
//!
//! let verdict = safety_check(&profile);
//! assert!(verdict.allows_plan());
//!
//! let plan = generate_plan(&profile);
//! let advice = recommendations(&profile, &plan);
//! assert!(!advice.is_empty());
//! ```

pub use fastwell_core::{constants, errors, models};

/// Environment-driven configuration
pub mod config;

/// Safety checker, plan calculator and fitness advisor
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Orchestration over the intelligence components
pub mod services;
