// ABOUTME: Core types and constants for the Fastwell fasting plan engine
// ABOUTME: Foundation crate with error handling, constants, and the profile/plan data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fastwell Core
//!
//! Foundation crate providing shared types and constants for the Fastwell
//! fasting plan engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Physiological rule-table constants and profile validation limits
//! - **models**: `UserProfile`, `FastingPlan`, `Milestone`, `PlanSafetyResult`, `Recommendation`

/// Unified error handling system with standard error codes
pub mod errors;

/// Rule-table constants organized by domain
pub mod constants;

/// Core data models (profile, plan, safety verdict, recommendations)
pub mod models;
