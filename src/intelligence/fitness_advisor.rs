// ABOUTME: Companion fitness advisories derived from a profile and its generated plan
// ABOUTME: Emits prioritized, keyed recommendations sorted critical-first with stable ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fastwell_core::constants::plan;
use fastwell_core::models::{
    ActivityLevel, FastingPlan, Recommendation, RecommendationKind, RecommendationPriority,
    UserProfile,
};

/// Weekly exercise target as `(sessions, minutes_per_session)`
#[must_use]
pub const fn weekly_exercise_target(profile: &UserProfile) -> (u32, u32) {
    match profile.activity_level {
        ActivityLevel::Sedentary => (3, 30),
        ActivityLevel::Active => (4, 45),
        ActivityLevel::Intense => (5, 60),
    }
}

/// Fitness advisories for a profile on the given plan
///
/// Sorted by priority (critical first); equal priorities keep generation
/// order: resistance training, exercise timing, post-workout protein,
/// sarcopenia prevention, fasted walking, hydration, weekly target.
#[must_use]
pub fn recommendations(profile: &UserProfile, plan: &FastingPlan) -> Vec<Recommendation> {
    use RecommendationKind as Kind;
    use RecommendationPriority as Priority;

    let mut advisories = Vec::with_capacity(7);

    if plan.calorie_deficit > 0 {
        advisories.push(Recommendation::new(
            Kind::ResistanceTraining,
            Priority::Critical,
            Vec::new(),
        ));
    }

    advisories.push(Recommendation::new(
        Kind::ExerciseTiming,
        Priority::Important,
        Vec::new(),
    ));

    let protein_per_meal = plan.protein_target_grams / plan::PROTEIN_MEALS_PER_DAY;
    advisories.push(Recommendation::new(
        Kind::PostWorkoutProtein,
        Priority::Important,
        vec![protein_per_meal],
    ));

    if profile.is_elderly() {
        advisories.push(Recommendation::new(
            Kind::SarcopeniaPrevention,
            Priority::Critical,
            Vec::new(),
        ));
    }

    advisories.push(Recommendation::new(
        Kind::FastedWalking,
        Priority::Optional,
        Vec::new(),
    ));

    advisories.push(Recommendation::new(
        Kind::Hydration,
        Priority::Important,
        Vec::new(),
    ));

    let (sessions, minutes) = weekly_exercise_target(profile);
    advisories.push(Recommendation::new(
        Kind::WeeklyExerciseTarget,
        Priority::Important,
        vec![sessions, minutes],
    ));

    // sort_by_key is stable
    advisories.sort_by_key(|r| r.priority);
    advisories
}
