// ABOUTME: Integration tests for fasting plan generation
// ABOUTME: Covers preset selection, duration, protein, calorie math, weekly loss and milestones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Plan calculator tests
//!
//! Reference numbers for the 30y male, 175 cm, 90 kg, sedentary profile:
//! - BMR = 900 + 1093.75 - 150 + 5 = 1848.75
//! - TDEE = 1848.75 x 1.2 = 2218.5
//! - daily target = 2218 - 625 = 1593

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fastwell::intelligence::plan_calculator::{
    calculate_calorie_deficit, calculate_daily_calorie_target, calculate_protein_per_kg,
    calculate_protein_target, estimate_weekly_loss, generate_milestones, generate_plan,
    generate_plan_starting, recommend_duration, recommend_preset,
};
use fastwell::models::{
    ActivityLevel, DietPreference, FastingGoal, FastingPreset, HealthCondition, MilestoneKind,
    Sex, SleepQuality, StressLevel, UserProfile,
};

use common::{
    elderly_metabolic_profile, fixed_start, healthy_profile, init_test_logging,
    obese_intense_profile, overweight_fat_loss_profile, profile_grid,
    stressed_maintenance_profile,
};

fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_overweight_fat_loss_plan() {
    init_test_logging();
    let profile = overweight_fat_loss_profile();
    let plan = generate_plan_starting(&profile, fixed_start());

    assert_eq!(plan.recommended_preset, FastingPreset::Sixteen8);
    assert_eq!(plan.duration_weeks, 10);
    assert_eq!(plan.calorie_deficit, 625);
    assert_eq!(plan.daily_calorie_target, 1593);
    assert!(approx_eq(plan.protein_per_kg, 1.3, 1e-9));
    assert_eq!(plan.protein_target_grams, 117);
    assert!(approx_eq(plan.expected_weekly_loss_kg, 0.608_18, 1e-4));
    assert!(approx_eq(plan.carb_fiber_ratio, 8.0, f64::EPSILON));
    assert!(plan.is_active);
    assert_eq!(plan.start_date, fixed_start());
}

#[test]
fn test_obese_intense_plan() {
    init_test_logging();
    let plan = generate_plan_starting(&obese_intense_profile(), fixed_start());

    assert_eq!(plan.recommended_preset, FastingPreset::Eighteen6);
    assert_eq!(plan.duration_weeks, 12);
    assert_eq!(plan.calorie_deficit, 750);
    // TDEE = (950 + 1062.5 - 150 + 5) x 1.725 = 3221.4375
    assert_eq!(plan.daily_calorie_target, 3221 - 750);
    // Intense 1.6 + 0.1 is capped at 1.6
    assert!(approx_eq(plan.protein_per_kg, 1.6, 1e-9));
    assert_eq!(plan.protein_target_grams, 152);
    // 750 x 7 / 7700 + 6 x 0.01
    assert!(approx_eq(plan.expected_weekly_loss_kg, 0.741_82, 1e-4));
}

#[test]
fn test_elderly_metabolic_reset_gets_sixteen8() {
    let profile = elderly_metabolic_profile();
    assert_eq!(recommend_preset(&profile), FastingPreset::Sixteen8);

    let younger = UserProfile::new(40, Sex::Male, 170.0, 70.0).with_goal(FastingGoal::MetabolicReset);
    assert_eq!(recommend_preset(&younger), FastingPreset::Twenty4);
}

#[test]
fn test_stressed_maintenance_plan() {
    let profile = stressed_maintenance_profile();
    let plan = generate_plan_starting(&profile, fixed_start());

    assert_eq!(plan.duration_weeks, 6);
    assert_eq!(plan.calorie_deficit, 0);
    // TDEE = (620 + 1031.25 - 150 - 161) x 1.2 = 1608.3
    assert_eq!(plan.daily_calorie_target, 1608);
    assert!(approx_eq(plan.expected_weekly_loss_kg, 0.0, f64::EPSILON));
    assert_eq!(plan.recommended_preset, FastingPreset::Sixteen8);
}

// ============================================================================
// Preset selection
// ============================================================================

#[test]
fn test_safety_cap_clamps_to_sixteen8() {
    let profile = obese_intense_profile().with_condition(HealthCondition::Diabetes);
    assert!(profile.needs_reduced_intensity());
    assert_eq!(recommend_preset(&profile), FastingPreset::Sixteen8);
}

#[test]
fn test_stress_downgrades_metabolic_reset() {
    let profile = UserProfile::new(40, Sex::Male, 170.0, 70.0)
        .with_goal(FastingGoal::MetabolicReset)
        .with_sleep(SleepQuality::Poor);
    assert_eq!(recommend_preset(&profile), FastingPreset::Sixteen8);
}

#[test]
fn test_reduced_intensity_never_exceeds_sixteen_hours() {
    for profile in profile_grid() {
        if profile.needs_reduced_intensity() {
            let preset = recommend_preset(&profile);
            assert!(preset.fasting_hours() <= 16, "profile: {profile}");
        }
    }
}

// ============================================================================
// Duration
// ============================================================================

#[test]
fn test_duration_by_goal_and_bmi() {
    assert_eq!(recommend_duration(&overweight_fat_loss_profile()), 10);
    assert_eq!(recommend_duration(&obese_intense_profile()), 12);
    assert_eq!(
        recommend_duration(&healthy_profile().with_goal(FastingGoal::FatLoss)),
        8
    );
    assert_eq!(recommend_duration(&healthy_profile()), 8);
    assert_eq!(recommend_duration(&elderly_metabolic_profile()), 6);
}

#[test]
fn test_duration_stress_reduction_floors_at_four() {
    let profile = elderly_metabolic_profile().with_stress(StressLevel::High);
    // 6 - 2 = 4
    assert_eq!(recommend_duration(&profile), 4);

    let obese_stressed = obese_intense_profile().with_sleep(SleepQuality::Poor);
    assert_eq!(recommend_duration(&obese_stressed), 10);
}

#[test]
fn test_duration_never_below_four() {
    for profile in profile_grid() {
        assert!(recommend_duration(&profile) >= 4);
    }
}

// ============================================================================
// Protein
// ============================================================================

#[test]
fn test_protein_per_kg_by_activity() {
    let base = healthy_profile();
    assert!(approx_eq(calculate_protein_per_kg(&base), 1.2, 1e-9));
    assert!(approx_eq(
        calculate_protein_per_kg(&base.clone().with_activity_level(ActivityLevel::Active)),
        1.4,
        1e-9
    ));
    assert!(approx_eq(
        calculate_protein_per_kg(&base.with_activity_level(ActivityLevel::Intense)),
        1.6,
        1e-9
    ));
}

#[test]
fn test_protein_fat_loss_bump_and_cap() {
    let active = healthy_profile()
        .with_activity_level(ActivityLevel::Active)
        .with_goal(FastingGoal::FatLoss);
    assert!(approx_eq(calculate_protein_per_kg(&active), 1.5, 1e-9));

    let intense = active.with_activity_level(ActivityLevel::Intense);
    assert!(approx_eq(calculate_protein_per_kg(&intense), 1.6, 1e-9));
}

#[test]
fn test_protein_target_diet_multiplier() {
    let profile = UserProfile::new(70, Sex::Male, 175.0, 70.0)
        .with_goal(FastingGoal::FatLoss)
        .with_diet(DietPreference::Vegan);
    let per_kg = calculate_protein_per_kg(&profile);

    // 70 x 1.3 x 1.2 = 109.2
    assert!(approx_eq(per_kg, 1.3, 1e-9));
    assert_eq!(calculate_protein_target(&profile, per_kg), 109);

    let vegetarian = profile.with_diet(DietPreference::Vegetarian);
    // 70 x 1.3 x 1.1 = 100.1
    assert_eq!(calculate_protein_target(&vegetarian, per_kg), 100);
}

// ============================================================================
// Calories
// ============================================================================

#[test]
fn test_deficit_by_goal() {
    assert_eq!(calculate_calorie_deficit(&overweight_fat_loss_profile()), 625);
    assert_eq!(calculate_calorie_deficit(&obese_intense_profile()), 750);
    assert_eq!(
        calculate_calorie_deficit(&healthy_profile().with_goal(FastingGoal::FatLoss)),
        500
    );
    assert_eq!(calculate_calorie_deficit(&healthy_profile()), 0);
    assert_eq!(calculate_calorie_deficit(&elderly_metabolic_profile()), 500);
}

#[test]
fn test_high_stress_deficit_truncates() {
    let profile = overweight_fat_loss_profile().with_stress(StressLevel::High);
    // 625 x 0.75 = 468.75
    assert_eq!(calculate_calorie_deficit(&profile), 468);

    let obese = obese_intense_profile().with_stress(StressLevel::High);
    // 750 x 0.75 = 562.5
    assert_eq!(calculate_calorie_deficit(&obese), 562);
}

#[test]
fn test_daily_target_floor() {
    // BMR = 400 + 937.5 - 400 - 161 = 776.5, TDEE = 931.8
    let small = UserProfile::new(80, Sex::Female, 150.0, 40.0).with_goal(FastingGoal::MetabolicReset);
    assert_eq!(calculate_daily_calorie_target(&small, 500), 1200);
    assert_eq!(calculate_daily_calorie_target(&small, 0), 1200);
}

#[test]
fn test_daily_target_never_below_floor() {
    for profile in profile_grid() {
        let plan = generate_plan_starting(&profile, fixed_start());
        assert!(plan.daily_calorie_target >= 1200, "profile: {profile}");
    }
}

// ============================================================================
// Weekly loss
// ============================================================================

#[test]
fn test_weekly_loss_zero_without_deficit() {
    for preset in FastingPreset::all() {
        assert!(approx_eq(estimate_weekly_loss(0, *preset), 0.0, f64::EPSILON));
    }
}

#[test]
fn test_weekly_loss_fasting_bonus() {
    let base = 500.0 * 7.0 / 7700.0;
    assert!(approx_eq(
        estimate_weekly_loss(500, FastingPreset::Sixteen8),
        base + 0.04,
        1e-9
    ));
    assert!(approx_eq(
        estimate_weekly_loss(500, FastingPreset::Omad),
        base + 0.11,
        1e-9
    ));
    assert!(approx_eq(
        estimate_weekly_loss(500, FastingPreset::Custom),
        base + 0.04,
        1e-9
    ));
}

// ============================================================================
// Milestones
// ============================================================================

#[test]
fn test_milestones_for_ten_weeks() {
    let milestones = generate_milestones(10, FastingGoal::FatLoss, 0.608_181_8);

    let weeks: Vec<u32> = milestones.iter().map(|m| m.week_number).collect();
    assert_eq!(weeks, vec![1, 2, 4, 8, 10]);

    let ids: Vec<u32> = milestones.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);

    assert_eq!(milestones[2].kind, MilestoneKind::FirstResults);
    assert_eq!(milestones[2].description_arg.as_deref(), Some("2.4"));
    assert_eq!(milestones[3].kind, MilestoneKind::ClinicallySignificant);
    assert_eq!(milestones[3].description_arg.as_deref(), Some("4.9"));
    assert_eq!(milestones[4].kind, MilestoneKind::PlanComplete);
    assert_eq!(milestones[4].title, "Plan Complete");
    assert!(milestones[4].description_arg.is_none());
}

#[test]
fn test_milestones_for_eight_weeks() {
    let milestones = generate_milestones(8, FastingGoal::Maintenance, 0.0);

    let weeks: Vec<u32> = milestones.iter().map(|m| m.week_number).collect();
    assert_eq!(weeks, vec![1, 2, 4, 8]);

    let kinds: Vec<MilestoneKind> = milestones.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MilestoneKind::Adaptation,
            MilestoneKind::MetabolicShift,
            MilestoneKind::FirstResults,
            MilestoneKind::PlanComplete,
        ]
    );
    assert_eq!(milestones[3].id, 3);

    // A healthy maintenance profile lands on the 8-week schedule end to end
    let plan = generate_plan_starting(&healthy_profile(), fixed_start());
    assert_eq!(plan.duration_weeks, 8);
    let plan_kinds: Vec<MilestoneKind> = plan.milestones.iter().map(|m| m.kind).collect();
    assert_eq!(plan_kinds, kinds);
}

#[test]
fn test_milestones_final_week_not_duplicated() {
    let twelve = generate_milestones(12, FastingGoal::FatLoss, 0.74);
    let weeks: Vec<u32> = twelve.iter().map(|m| m.week_number).collect();
    assert_eq!(weeks, vec![1, 2, 4, 8, 12]);
    assert_eq!(twelve.last().unwrap().kind, MilestoneKind::PlanComplete);

    let four = generate_milestones(4, FastingGoal::Maintenance, 0.0);
    let weeks: Vec<u32> = four.iter().map(|m| m.week_number).collect();
    assert_eq!(weeks, vec![1, 2, 4]);
}

#[test]
fn test_milestones_include_consolidation_for_long_plans() {
    let milestones = generate_milestones(16, FastingGoal::FatLoss, 0.5);
    let kinds: Vec<MilestoneKind> = milestones.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MilestoneKind::Adaptation,
            MilestoneKind::MetabolicShift,
            MilestoneKind::FirstResults,
            MilestoneKind::ClinicallySignificant,
            MilestoneKind::Consolidation,
            MilestoneKind::PlanComplete,
        ]
    );
}

#[test]
fn test_milestones_strictly_increasing_and_end_at_duration() {
    for profile in profile_grid() {
        let plan = generate_plan_starting(&profile, fixed_start());
        assert!(!plan.milestones.is_empty());
        assert!(plan
            .milestones
            .windows(2)
            .all(|pair| pair[0].week_number < pair[1].week_number));
        assert_eq!(
            plan.milestones.last().unwrap().week_number,
            plan.duration_weeks
        );
    }
}

// ============================================================================
// Determinism and lifecycle
// ============================================================================

#[test]
fn test_generation_is_idempotent() {
    let profile = overweight_fat_loss_profile();
    let first = generate_plan_starting(&profile, fixed_start());
    let second = generate_plan_starting(&profile, fixed_start());
    assert_eq!(first, second);

    // generate_plan differs only in start date
    let mut now_plan = generate_plan(&profile);
    now_plan.start_date = fixed_start();
    assert_eq!(now_plan, first);
}

#[test]
fn test_plan_lifecycle_helpers() {
    let plan = generate_plan_starting(&overweight_fat_loss_profile(), fixed_start());

    assert_eq!(plan.end_date(), fixed_start() + chrono::Duration::weeks(10));
    assert_eq!(plan.week_number_at(fixed_start()), 1);
    assert_eq!(
        plan.week_number_at(fixed_start() + chrono::Duration::days(22)),
        4
    );
    assert!(plan.is_complete_at(plan.end_date()));

    let next = plan.next_milestone(4).unwrap();
    assert_eq!(next.week_number, 8);
    assert_eq!(plan.reached_milestones(4).len(), 3);
}
