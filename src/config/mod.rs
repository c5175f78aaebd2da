// ABOUTME: Configuration module root for the Fastwell engine and CLI
// ABOUTME: All settings come from environment variables with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! Rule-table constants (calorie floor, BMI cut points, minimum duration)
//! are compile-time values in `fastwell_core::constants`; only boundary
//! settings are configurable here.

/// Environment-driven engine configuration
pub mod environment;

pub use environment::{EngineConfig, Environment, OutputFormat};
