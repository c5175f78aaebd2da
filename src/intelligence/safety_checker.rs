// ABOUTME: Pre-plan safety screening of declared health conditions and physiological state
// ABOUTME: Contraindications block the plan; everything else accumulates ordered caution codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Safety checker
//!
//! Evaluation order is fixed and significant:
//!
//! 1. Contraindications block outright. Eating-disorder history is checked
//!    before pregnancy and caution reasons are never computed once blocked.
//! 2. Caution reasons accumulate in this order: diabetes, thyroid, heart
//!    disease, medication, elderly, underweight, high stress with poor sleep.
//! 3. No reasons means `Safe`.

use fastwell_core::constants::body;
use fastwell_core::models::{
    HealthCondition, PlanSafetyResult, SafetyReason, SleepQuality, StressLevel, UserProfile,
};
use tracing::debug;

/// Contraindications in precedence order
const BLOCKING_CONDITIONS: [(HealthCondition, SafetyReason); 2] = [
    (HealthCondition::EatingDisorder, SafetyReason::EatingDisorder),
    (HealthCondition::Pregnant, SafetyReason::Pregnant),
];

/// Conditions that warrant a caution, in reporting order
const CAUTION_CONDITIONS: [(HealthCondition, SafetyReason); 4] = [
    (HealthCondition::Diabetes, SafetyReason::Diabetes),
    (HealthCondition::Thyroid, SafetyReason::Thyroid),
    (HealthCondition::HeartDisease, SafetyReason::Heart),
    (HealthCondition::Medication, SafetyReason::Medication),
];

/// Screen a profile before generating a plan
///
/// Total for any profile: never fails, never has side effects beyond a
/// debug log line.
#[must_use]
pub fn safety_check(profile: &UserProfile) -> PlanSafetyResult {
    if let Some(reason) = blocking_reason(profile) {
        debug!(reason = reason.code(), "plan blocked by contraindication");
        return PlanSafetyResult::Blocked { reason };
    }

    let reasons = caution_reasons(profile);
    if reasons.is_empty() {
        PlanSafetyResult::Safe
    } else {
        debug!(count = reasons.len(), "plan allowed with cautions");
        PlanSafetyResult::Caution { reasons }
    }
}

fn blocking_reason(profile: &UserProfile) -> Option<SafetyReason> {
    BLOCKING_CONDITIONS
        .iter()
        .find(|(condition, _)| profile.has_condition(*condition))
        .map(|(_, reason)| *reason)
}

fn caution_reasons(profile: &UserProfile) -> Vec<SafetyReason> {
    let mut reasons: Vec<SafetyReason> = CAUTION_CONDITIONS
        .iter()
        .filter(|(condition, _)| profile.has_condition(*condition))
        .map(|(_, reason)| *reason)
        .collect();

    if profile.is_elderly() {
        reasons.push(SafetyReason::Elderly);
    }
    if profile.bmi() < body::UNDERWEIGHT_BMI {
        reasons.push(SafetyReason::Underweight);
    }
    // Either one alone only reduces intensity; together they warrant a caution
    if profile.stress_level == StressLevel::High && profile.sleep_quality == SleepQuality::Poor {
        reasons.push(SafetyReason::StressSleep);
    }

    reasons
}
