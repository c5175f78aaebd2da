// ABOUTME: Prioritized fitness advisory model emitted alongside a fasting plan
// ABOUTME: Carries opaque text keys plus numeric parameters; no final prose
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Advisory priority; ordering puts critical first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    /// Must be followed while on the plan
    Critical,
    /// Strongly advised
    Important,
    /// Nice to have
    Optional,
}

/// Advisory topics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Keep lifting while in a calorie deficit
    ResistanceTraining,
    /// Train near the start of the eating window
    ExerciseTiming,
    /// Protein after training
    PostWorkoutProtein,
    /// Preserve muscle mass in older users
    SarcopeniaPrevention,
    /// Light walking while fasted
    FastedWalking,
    /// Water and electrolytes during the fast
    Hydration,
    /// Weekly session count and length
    WeeklyExerciseTarget,
}

impl RecommendationKind {
    /// Title key
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::ResistanceTraining => "fitness_resistance_training_title",
            Self::ExerciseTiming => "fitness_exercise_timing_title",
            Self::PostWorkoutProtein => "fitness_post_workout_protein_title",
            Self::SarcopeniaPrevention => "fitness_sarcopenia_title",
            Self::FastedWalking => "fitness_fasted_walking_title",
            Self::Hydration => "fitness_hydration_title",
            Self::WeeklyExerciseTarget => "fitness_weekly_target_title",
        }
    }

    /// Description key
    #[must_use]
    pub const fn description_key(self) -> &'static str {
        match self {
            Self::ResistanceTraining => "fitness_resistance_training_desc",
            Self::ExerciseTiming => "fitness_exercise_timing_desc",
            Self::PostWorkoutProtein => "fitness_post_workout_protein_desc",
            Self::SarcopeniaPrevention => "fitness_sarcopenia_desc",
            Self::FastedWalking => "fitness_fasted_walking_desc",
            Self::Hydration => "fitness_hydration_desc",
            Self::WeeklyExerciseTarget => "fitness_weekly_target_desc",
        }
    }

    /// Icon name
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::ResistanceTraining => "dumbbell.fill",
            Self::ExerciseTiming => "clock.fill",
            Self::PostWorkoutProtein => "fork.knife",
            Self::SarcopeniaPrevention => "figure.walk.motion",
            Self::FastedWalking => "figure.walk",
            Self::Hydration => "drop.fill",
            Self::WeeklyExerciseTarget => "calendar",
        }
    }
}

/// A single advisory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Topic
    pub kind: RecommendationKind,
    /// Priority
    pub priority: RecommendationPriority,
    /// Title key
    pub title_key: String,
    /// Description key
    pub description_key: String,
    /// Numeric interpolation arguments for the description, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<u32>,
    /// Icon name
    pub icon: String,
}

impl Recommendation {
    /// Build an advisory of the given kind
    #[must_use]
    pub fn new(kind: RecommendationKind, priority: RecommendationPriority, params: Vec<u32>) -> Self {
        Self {
            kind,
            priority,
            title_key: kind.title_key().to_owned(),
            description_key: kind.description_key().to_owned(),
            params,
            icon: kind.icon().to_owned(),
        }
    }
}
