// ABOUTME: Fasting plan output model with nutrition targets and the milestone schedule
// ABOUTME: Lifecycle fields (start date, active flag) belong to the caller; helpers only read them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::FastingPreset;

/// Checkpoint categories in a multi-week plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    /// Week 1: body adapts to the fasting window
    Adaptation,
    /// Week 2: fuel use shifts toward fat
    MetabolicShift,
    /// Week 4: first visible results
    FirstResults,
    /// Week 8: clinically significant change
    ClinicallySignificant,
    /// Week 12: habits consolidate
    Consolidation,
    /// Final week of the plan
    PlanComplete,
}

impl MilestoneKind {
    /// Title key
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Adaptation => "Adaptation",
            Self::MetabolicShift => "Metabolic Shift",
            Self::FirstResults => "First Results",
            Self::ClinicallySignificant => "Clinically Significant",
            Self::Consolidation => "Consolidation",
            Self::PlanComplete => "Plan Complete",
        }
    }

    /// Description key resolved by the presentation layer
    #[must_use]
    pub const fn description_key(self) -> &'static str {
        match self {
            Self::Adaptation => "milestone_adaptation_desc",
            Self::MetabolicShift => "milestone_metabolic_shift_desc",
            Self::FirstResults => "milestone_first_results_desc",
            Self::ClinicallySignificant => "milestone_clinically_significant_desc",
            Self::Consolidation => "milestone_consolidation_desc",
            Self::PlanComplete => "milestone_plan_complete_desc",
        }
    }

    /// Icon name
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Adaptation => "leaf.fill",
            Self::MetabolicShift => "flame.fill",
            Self::FirstResults => "chart.line.downtrend.xyaxis",
            Self::ClinicallySignificant => "star.fill",
            Self::Consolidation => "lock.shield.fill",
            Self::PlanComplete => "flag.checkered",
        }
    }
}

/// A scheduled checkpoint in the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Sequential id, starting at 0 in schedule order
    pub id: u32,
    /// Week in which the milestone unlocks (1-based)
    pub week_number: u32,
    /// Milestone category
    pub kind: MilestoneKind,
    /// Title key
    pub title: String,
    /// Description key
    pub description_key: String,
    /// Single interpolation argument for the description, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_arg: Option<String>,
    /// Icon name
    pub icon: String,
}

impl Milestone {
    /// Build a milestone of the given kind
    #[must_use]
    pub fn new(id: u32, week_number: u32, kind: MilestoneKind, description_arg: Option<String>) -> Self {
        Self {
            id,
            week_number,
            kind,
            title: kind.title().to_owned(),
            description_key: kind.description_key().to_owned(),
            description_arg,
            icon: kind.icon().to_owned(),
        }
    }
}

/// Personalized fasting plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastingPlan {
    /// Recommended fasting schedule
    pub recommended_preset: FastingPreset,
    /// Plan length in weeks
    pub duration_weeks: u32,
    /// Daily intake target (kcal), never below 1200
    pub daily_calorie_target: u32,
    /// Daily deficit below TDEE (kcal)
    pub calorie_deficit: u32,
    /// Daily protein target (g)
    pub protein_target_grams: u32,
    /// Protein per kg of body weight (g/kg)
    pub protein_per_kg: f64,
    /// Carbohydrate-to-fiber ratio target
    pub carb_fiber_ratio: f64,
    /// Expected loss (kg/week)
    pub expected_weekly_loss_kg: f64,
    /// Checkpoints in ascending week order; the last one is at `duration_weeks`
    pub milestones: Vec<Milestone>,
    /// When the caller started the plan
    pub start_date: DateTime<Utc>,
    /// Whether this is the caller's current plan
    pub is_active: bool,
}

impl FastingPlan {
    /// Scheduled end of the plan
    #[must_use]
    pub fn end_date(&self) -> DateTime<Utc> {
        self.start_date + Duration::weeks(i64::from(self.duration_weeks))
    }

    /// 1-based plan week containing `at`, clamped to `1..=duration_weeks`
    #[must_use]
    pub fn week_number_at(&self, at: DateTime<Utc>) -> u32 {
        let elapsed_days = (at - self.start_date).num_days().max(0);
        let week = u32::try_from(elapsed_days / 7).unwrap_or(u32::MAX).saturating_add(1);
        week.clamp(1, self.duration_weeks.max(1))
    }

    /// Whether the plan has run its full length at `at`
    #[must_use]
    pub fn is_complete_at(&self, at: DateTime<Utc>) -> bool {
        at >= self.end_date()
    }

    /// Milestones unlocked by the given week
    #[must_use]
    pub fn reached_milestones(&self, week: u32) -> Vec<&Milestone> {
        self.milestones
            .iter()
            .filter(|m| m.week_number <= week)
            .collect()
    }

    /// Next milestone still ahead of the given week
    #[must_use]
    pub fn next_milestone(&self, week: u32) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.week_number > week)
    }
}
