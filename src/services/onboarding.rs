// ABOUTME: Onboarding assessment facade chaining validation, safety check, plan and advisories
// ABOUTME: A blocked safety verdict surfaces as a PlanBlocked error carrying the reason code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use fastwell_core::errors::{AppError, AppResult};
use fastwell_core::models::{
    FastingPlan, PlanSafetyResult, ProfileLimits, Recommendation, UserProfile,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::intelligence::{generate_plan_starting, recommendations, safety_check};

/// Outcome of a successful onboarding assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAssessment {
    /// Safety verdict (`safe` or `caution`)
    pub safety: PlanSafetyResult,
    /// Generated plan
    pub plan: FastingPlan,
    /// Fitness advisories for the plan, critical first
    pub recommendations: Vec<Recommendation>,
}

/// Runs the full onboarding flow for a profile
#[derive(Debug, Clone, Default)]
pub struct OnboardingService {
    limits: ProfileLimits,
}

impl OnboardingService {
    /// Service using the default profile limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Service using caller-supplied profile limits
    #[must_use]
    pub const fn with_limits(limits: ProfileLimits) -> Self {
        Self { limits }
    }

    /// Assess a profile with a plan starting now
    ///
    /// # Errors
    ///
    /// See [`Self::assess_at`]
    pub fn assess(&self, profile: &UserProfile) -> AppResult<PlanAssessment> {
        self.assess_at(profile, Utc::now())
    }

    /// Assess a profile with a fixed plan start date
    ///
    /// # Errors
    ///
    /// - `ValueOutOfRange` if the profile fails validation
    /// - `PlanBlocked` if the safety check finds a contraindication
    pub fn assess_at(
        &self,
        profile: &UserProfile,
        start_date: DateTime<Utc>,
    ) -> AppResult<PlanAssessment> {
        profile.validate(&self.limits)?;

        let safety = safety_check(profile);
        if let PlanSafetyResult::Blocked { reason } = safety {
            warn!(reason = reason.code(), "onboarding blocked by safety check");
            return Err(AppError::plan_blocked(reason.code()));
        }

        let plan = generate_plan_starting(profile, start_date);
        let recommendations = recommendations(profile, &plan);

        info!(
            preset = %plan.recommended_preset,
            duration_weeks = plan.duration_weeks,
            cautions = ?safety.reason_codes(),
            recommendations = recommendations.len(),
            "onboarding assessment complete"
        );

        Ok(PlanAssessment {
            safety,
            plan,
            recommendations,
        })
    }
}
