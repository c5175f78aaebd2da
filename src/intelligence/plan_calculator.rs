// ABOUTME: Fasting plan generation: preset, duration, protein and calorie targets, loss estimate, milestones
// ABOUTME: Pure and deterministic; safety caps mirror the safety checker's policy without calling it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan calculator
//!
//! `generate_plan` runs the pipeline in order:
//!
//! 1. [`recommend_preset`]: goal-based pick, clamped to the safety cap, then
//!    downgraded to 16:8 under high stress or poor sleep
//! 2. [`recommend_duration`]: goal and BMI based, shortened under stress/sleep
//! 3. [`calculate_protein_per_kg`] / [`calculate_protein_target`]
//! 4. [`calculate_calorie_deficit`] / [`calculate_daily_calorie_target`]
//! 5. [`estimate_weekly_loss`]: calorie math plus a fasting-window bonus
//! 6. [`generate_milestones`]
//!
//! # Energy math
//!
//! - BMR: Mifflin-St Jeor (see `UserProfile::bmr`)
//! - TDEE: BMR x activity multiplier (1.2 / 1.55 / 1.725)
//! - 1 kg of body fat is taken as 7700 kcal
//! - The daily target never drops below 1200 kcal

use chrono::{DateTime, Utc};
use fastwell_core::constants::{body, energy, plan};
use fastwell_core::models::{
    FastingGoal, FastingPlan, FastingPreset, Milestone, MilestoneKind, StressLevel, UserProfile,
};
use tracing::{debug, instrument};

/// Generate a plan starting now
///
/// The returned plan is active. Two calls with the same profile differ only
/// in `start_date`.
#[must_use]
pub fn generate_plan(profile: &UserProfile) -> FastingPlan {
    generate_plan_starting(profile, Utc::now())
}

/// Generate a plan with a caller-supplied start date
///
/// Fully deterministic: identical inputs give identical plans.
#[must_use]
#[instrument(skip_all, fields(goal = ?profile.goal, activity = ?profile.activity_level))]
pub fn generate_plan_starting(profile: &UserProfile, start_date: DateTime<Utc>) -> FastingPlan {
    let recommended_preset = recommend_preset(profile);
    let duration_weeks = recommend_duration(profile);

    let protein_per_kg = calculate_protein_per_kg(profile);
    let protein_target_grams = calculate_protein_target(profile, protein_per_kg);

    let calorie_deficit = calculate_calorie_deficit(profile);
    let daily_calorie_target = calculate_daily_calorie_target(profile, calorie_deficit);

    let expected_weekly_loss_kg = estimate_weekly_loss(calorie_deficit, recommended_preset);
    let milestones = generate_milestones(duration_weeks, profile.goal, expected_weekly_loss_kg);

    debug!(
        preset = %recommended_preset,
        duration_weeks,
        daily_calorie_target,
        calorie_deficit,
        protein_target_grams,
        "fasting plan generated"
    );

    FastingPlan {
        recommended_preset,
        duration_weeks,
        daily_calorie_target,
        calorie_deficit,
        protein_target_grams,
        protein_per_kg,
        carb_fiber_ratio: plan::DEFAULT_CARB_FIBER_RATIO,
        expected_weekly_loss_kg,
        milestones,
        start_date,
        is_active: true,
    }
}

/// Recommend a fasting preset
///
/// Order matters: goal-based pick, then the safety cap (16:8 when reduced
/// intensity is needed, otherwise OMAD), then the stress/sleep downgrade.
#[must_use]
pub fn recommend_preset(profile: &UserProfile) -> FastingPreset {
    let max_allowed = if profile.needs_reduced_intensity() {
        FastingPreset::Sixteen8
    } else {
        FastingPreset::Omad
    };

    let base = match profile.goal {
        FastingGoal::FatLoss if profile.bmi() >= body::OBESE_BMI => FastingPreset::Eighteen6,
        FastingGoal::FatLoss | FastingGoal::Maintenance => FastingPreset::Sixteen8,
        FastingGoal::MetabolicReset if profile.is_elderly() => FastingPreset::Sixteen8,
        FastingGoal::MetabolicReset => FastingPreset::Twenty4,
    };

    let mut preset = base;
    if preset.is_more_intense_than(max_allowed) {
        debug!(from = %preset, to = %max_allowed, "preset clamped to safety cap");
        preset = max_allowed;
    }

    if profile.has_stress_or_poor_sleep() && preset.is_more_intense_than(FastingPreset::Sixteen8) {
        debug!(from = %preset, "preset downgraded for stress or poor sleep");
        preset = FastingPreset::Sixteen8;
    }

    preset
}

/// Recommend a plan length in weeks (never below 4)
#[must_use]
pub fn recommend_duration(profile: &UserProfile) -> u32 {
    let bmi = profile.bmi();
    let base: u32 = match profile.goal {
        FastingGoal::FatLoss if bmi >= body::OBESE_BMI => 12,
        FastingGoal::FatLoss if bmi >= body::OVERWEIGHT_BMI => 10,
        FastingGoal::FatLoss | FastingGoal::Maintenance => 8,
        FastingGoal::MetabolicReset => 6,
    };

    if profile.has_stress_or_poor_sleep() {
        base.saturating_sub(plan::STRESS_SLEEP_DURATION_REDUCTION)
            .max(plan::MIN_DURATION_WEEKS)
    } else {
        base
    }
}

/// Daily protein per kg of body weight
///
/// Activity baseline, raised to 1.2 for elderly users, plus 0.1 for fat
/// loss capped at 1.6.
#[must_use]
pub fn calculate_protein_per_kg(profile: &UserProfile) -> f64 {
    let mut per_kg = profile.activity_level.base_protein_per_kg();

    if profile.is_elderly() {
        per_kg = per_kg.max(plan::ELDERLY_MIN_PROTEIN_PER_KG);
    }
    if profile.goal == FastingGoal::FatLoss {
        per_kg = (per_kg + plan::FAT_LOSS_PROTEIN_BONUS).min(plan::MAX_PROTEIN_PER_KG);
    }

    per_kg
}

/// Daily protein target in grams, adjusted for diet bioavailability
#[must_use]
pub fn calculate_protein_target(profile: &UserProfile, protein_per_kg: f64) -> u32 {
    (profile.weight_kg * protein_per_kg * profile.diet_preference.protein_multiplier())
        .round()
        .max(0.0) as u32
}

/// Daily calorie deficit in kcal
///
/// Reduced to 75% under high stress, truncating toward zero.
#[must_use]
pub fn calculate_calorie_deficit(profile: &UserProfile) -> u32 {
    let bmi = profile.bmi();
    let base: u32 = match profile.goal {
        FastingGoal::FatLoss if bmi >= body::OBESE_BMI => 750,
        FastingGoal::FatLoss if bmi >= body::OVERWEIGHT_BMI => 625,
        FastingGoal::FatLoss | FastingGoal::MetabolicReset => 500,
        FastingGoal::Maintenance => 0,
    };

    if profile.stress_level == StressLevel::High {
        (f64::from(base) * energy::HIGH_STRESS_DEFICIT_FACTOR) as u32
    } else {
        base
    }
}

/// Daily intake target: truncated TDEE minus the deficit, floored at 1200 kcal
#[must_use]
pub fn calculate_daily_calorie_target(profile: &UserProfile, calorie_deficit: u32) -> u32 {
    let tdee = profile.tdee() as i64;
    let target = tdee - i64::from(calorie_deficit);
    let floor = i64::from(energy::MIN_DAILY_CALORIES);

    if target < floor {
        debug!(target, floor, "daily calorie target raised to floor");
        energy::MIN_DAILY_CALORIES
    } else {
        u32::try_from(target).unwrap_or(u32::MAX)
    }
}

/// Expected loss in kg/week
///
/// `deficit x 7 / 7700` plus 0.01 kg for every fasting hour beyond 12.
/// Zero when there is no deficit.
#[must_use]
pub fn estimate_weekly_loss(calorie_deficit: u32, preset: FastingPreset) -> f64 {
    if calorie_deficit == 0 {
        return 0.0;
    }

    let from_deficit = f64::from(calorie_deficit) * energy::DAYS_PER_WEEK / energy::KCAL_PER_KG_FAT;
    let bonus_hours = preset
        .fasting_hours()
        .saturating_sub(energy::FASTING_BONUS_BASELINE_HOURS);

    f64::from(bonus_hours).mul_add(energy::FASTING_BONUS_KG_PER_HOUR, from_deficit)
}

/// Scheduled checkpoints before the final week, with the loss multiplier used
/// for their description argument
const SCHEDULE: [(u32, MilestoneKind, Option<f64>); 5] = [
    (1, MilestoneKind::Adaptation, None),
    (2, MilestoneKind::MetabolicShift, None),
    (4, MilestoneKind::FirstResults, Some(4.0)),
    (8, MilestoneKind::ClinicallySignificant, Some(8.0)),
    (12, MilestoneKind::Consolidation, None),
];

/// Build the milestone schedule
///
/// Scheduled checkpoints strictly before `duration_weeks` are kept, then a
/// final "Plan Complete" milestone lands on `duration_weeks`. Ids are assigned
/// sequentially from 0.
#[must_use]
pub fn generate_milestones(
    duration_weeks: u32,
    goal: FastingGoal,
    weekly_loss_kg: f64,
) -> Vec<Milestone> {
    debug!(?goal, duration_weeks, "building milestone schedule");

    let mut milestones: Vec<Milestone> = SCHEDULE
        .iter()
        .filter(|(week, _, _)| *week < duration_weeks)
        .zip(0_u32..)
        .map(|((week, kind, loss_weeks), id)| {
            let arg = loss_weeks.map(|weeks| format!("{:.1}", weekly_loss_kg * weeks));
            Milestone::new(id, *week, *kind, arg)
        })
        .collect();

    let final_id = u32::try_from(milestones.len()).unwrap_or(u32::MAX);
    milestones.push(Milestone::new(
        final_id,
        duration_weeks,
        MilestoneKind::PlanComplete,
        None,
    ));

    milestones
}
