// ABOUTME: Integration tests for the pre-plan safety checker
// ABOUTME: Covers blocking precedence, caution ordering, and the safe verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fastwell::intelligence::safety_check;
use fastwell::models::{
    HealthCondition, PlanSafetyResult, SafetyReason, Sex, SleepQuality, StressLevel, UserProfile,
};

use common::{
    elderly_metabolic_profile, healthy_profile, init_test_logging, profile_grid,
    profile_with_conditions,
};

#[test]
fn test_healthy_profile_is_safe() {
    init_test_logging();
    assert_eq!(safety_check(&healthy_profile()), PlanSafetyResult::Safe);
}

#[test]
fn test_diabetes_and_thyroid_caution_in_order() {
    init_test_logging();
    let profile = profile_with_conditions(&[HealthCondition::Thyroid, HealthCondition::Diabetes]);

    let verdict = safety_check(&profile);
    assert_eq!(
        verdict,
        PlanSafetyResult::Caution {
            reasons: vec![SafetyReason::Diabetes, SafetyReason::Thyroid],
        }
    );
    assert_eq!(verdict.reason_codes(), vec!["diabetes", "thyroid"]);
}

#[test]
fn test_eating_disorder_short_circuits_cautions() {
    init_test_logging();
    let profile =
        profile_with_conditions(&[HealthCondition::EatingDisorder, HealthCondition::Diabetes]);

    assert_eq!(
        safety_check(&profile),
        PlanSafetyResult::Blocked {
            reason: SafetyReason::EatingDisorder,
        }
    );
}

#[test]
fn test_eating_disorder_wins_over_pregnancy() {
    let profile =
        profile_with_conditions(&[HealthCondition::Pregnant, HealthCondition::EatingDisorder]);

    let verdict = safety_check(&profile);
    assert!(verdict.is_blocked());
    assert_eq!(verdict.reason_codes(), vec!["eating_disorder"]);
}

#[test]
fn test_pregnancy_blocks() {
    let profile = profile_with_conditions(&[HealthCondition::Pregnant, HealthCondition::Medication])
        .with_stress(StressLevel::High)
        .with_sleep(SleepQuality::Poor);

    assert_eq!(
        safety_check(&profile),
        PlanSafetyResult::Blocked {
            reason: SafetyReason::Pregnant,
        }
    );
}

#[test]
fn test_full_caution_order() {
    // Elderly, underweight, stressed and sleeping poorly with every elevated condition
    let profile = UserProfile::new(72, Sex::Female, 170.0, 50.0)
        .with_condition(HealthCondition::Medication)
        .with_condition(HealthCondition::HeartDisease)
        .with_condition(HealthCondition::Thyroid)
        .with_condition(HealthCondition::Diabetes)
        .with_stress(StressLevel::High)
        .with_sleep(SleepQuality::Poor);

    assert_eq!(
        safety_check(&profile).reason_codes(),
        vec![
            "diabetes",
            "thyroid",
            "heart",
            "medication",
            "elderly",
            "underweight",
            "stress_sleep"
        ]
    );
}

#[test]
fn test_elderly_caution() {
    assert_eq!(
        safety_check(&elderly_metabolic_profile()).reason_codes(),
        vec!["elderly"]
    );
}

#[test]
fn test_age_64_is_not_elderly() {
    let profile = UserProfile::new(64, Sex::Male, 170.0, 70.0);
    assert!(safety_check(&profile).is_safe());
}

#[test]
fn test_underweight_threshold() {
    // 53.4 kg at 170 cm is BMI ~18.48
    let under = UserProfile::new(30, Sex::Female, 170.0, 53.4);
    assert_eq!(safety_check(&under).reason_codes(), vec!["underweight"]);

    // 53.6 kg at 170 cm is BMI ~18.55
    let normal = UserProfile::new(30, Sex::Female, 170.0, 53.6);
    assert!(safety_check(&normal).is_safe());
}

#[test]
fn test_stress_or_sleep_alone_is_safe() {
    let stressed = healthy_profile().with_stress(StressLevel::High);
    let tired = healthy_profile().with_sleep(SleepQuality::Poor);

    assert!(safety_check(&stressed).is_safe());
    assert!(safety_check(&tired).is_safe());

    let both = stressed.with_sleep(SleepQuality::Poor);
    assert_eq!(safety_check(&both).reason_codes(), vec!["stress_sleep"]);
}

#[test]
fn test_eating_disorder_always_blocks() {
    for profile in profile_grid() {
        let profile = profile.with_condition(HealthCondition::EatingDisorder);
        assert_eq!(
            safety_check(&profile),
            PlanSafetyResult::Blocked {
                reason: SafetyReason::EatingDisorder,
            },
            "profile: {profile}"
        );
    }
}

#[test]
fn test_pregnancy_always_blocks_without_eating_disorder() {
    for profile in profile_grid() {
        let profile = profile.with_condition(HealthCondition::Pregnant);
        assert_eq!(
            safety_check(&profile),
            PlanSafetyResult::Blocked {
                reason: SafetyReason::Pregnant,
            }
        );
    }
}

#[test]
fn test_blocked_and_caution_allow_plan_flags() {
    let blocked = safety_check(&profile_with_conditions(&[HealthCondition::Pregnant]));
    let caution = safety_check(&profile_with_conditions(&[HealthCondition::Diabetes]));

    assert!(!blocked.allows_plan());
    assert!(caution.allows_plan());
    assert!(!caution.is_safe());
}

#[test]
fn test_verdict_serializes_with_status_tag() {
    let caution = safety_check(&profile_with_conditions(&[HealthCondition::HeartDisease]));
    let json = serde_json::to_value(&caution).unwrap();

    assert_eq!(json["status"], "caution");
    assert_eq!(json["reasons"][0], "heart");
}

#[test]
fn test_every_condition_changes_the_verdict() {
    for condition in HealthCondition::all() {
        let verdict = safety_check(&profile_with_conditions(&[*condition]));
        assert_ne!(verdict, PlanSafetyResult::Safe, "{condition:?}");
        assert_eq!(verdict.reason_codes().len(), 1, "{condition:?}");
    }
}
