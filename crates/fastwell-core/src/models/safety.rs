// ABOUTME: Safety verdict model: safe, caution with ordered reason codes, or blocked with one reason
// ABOUTME: Reason codes are opaque tokens rendered to prose by the presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reason code attached to a caution or blocked verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SafetyReason {
    /// Eating disorder history
    EatingDisorder,
    /// Pregnancy
    Pregnant,
    /// Diabetes
    Diabetes,
    /// Thyroid disorder
    Thyroid,
    /// Heart disease
    Heart,
    /// Regular medication
    Medication,
    /// Age 65 or older
    Elderly,
    /// BMI below 18.5
    Underweight,
    /// High stress combined with poor sleep
    StressSleep,
}

impl SafetyReason {
    /// Stable token for this reason
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EatingDisorder => "eating_disorder",
            Self::Pregnant => "pregnant",
            Self::Diabetes => "diabetes",
            Self::Thyroid => "thyroid",
            Self::Heart => "heart",
            Self::Medication => "medication",
            Self::Elderly => "elderly",
            Self::Underweight => "underweight",
            Self::StressSleep => "stress_sleep",
        }
    }
}

impl fmt::Display for SafetyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of the pre-plan safety check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanSafetyResult {
    /// No concerns
    Safe,
    /// Plan may proceed; reasons must be surfaced alongside it
    Caution {
        /// Reasons in evaluation order
        reasons: Vec<SafetyReason>,
    },
    /// Plan must not be generated or presented
    Blocked {
        /// The contraindication that blocked the plan
        reason: SafetyReason,
    },
}

impl PlanSafetyResult {
    /// No concerns at all
    #[must_use]
    pub const fn is_safe(&self) -> bool {
        matches!(self, Self::Safe)
    }

    /// Plan generation is blocked
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }

    /// Whether a plan may be generated (safe or caution)
    #[must_use]
    pub const fn allows_plan(&self) -> bool {
        !self.is_blocked()
    }

    /// Reason codes carried by this verdict, in order
    #[must_use]
    pub fn reason_codes(&self) -> Vec<&'static str> {
        match self {
            Self::Safe => Vec::new(),
            Self::Caution { reasons } => reasons.iter().map(|r| r.code()).collect(),
            Self::Blocked { reason } => vec![reason.code()],
        }
    }
}
