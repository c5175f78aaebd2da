// ABOUTME: Service layer composing the intelligence components into user-facing flows
// ABOUTME: Currently the onboarding assessment facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Onboarding assessment: validate, screen, plan, advise
pub mod onboarding;

pub use onboarding::{OnboardingService, PlanAssessment};
