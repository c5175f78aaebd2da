// ABOUTME: Fasting intelligence: safety screening, plan generation, and fitness advisories
// ABOUTME: Pure synchronous functions over an immutable profile snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The decision logic of the engine. Every function here is synchronous,
//! deterministic and side-effect free apart from `tracing` events, so calls
//! may run concurrently without coordination.
//!
//! Typical control flow: [`safety_checker::safety_check`] first, then
//! [`plan_calculator::generate_plan`] when not blocked, then
//! [`fitness_advisor::recommendations`] for supplementary advisories.

/// Companion fitness advisories
pub mod fitness_advisor;
/// Fasting plan generation pipeline
pub mod plan_calculator;
/// Pre-plan safety screening
pub mod safety_checker;

pub use fitness_advisor::{recommendations, weekly_exercise_target};
pub use plan_calculator::{generate_plan, generate_plan_starting};
pub use safety_checker::safety_check;
