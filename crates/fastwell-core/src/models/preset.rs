// ABOUTME: Named fasting schedules (16:8, 18:6, 20:4, OMAD, custom) with fixed fasting hours
// ABOUTME: Eating window is always 24 minus the fasting hours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

const HOURS_PER_DAY: u32 = 24;

/// A named fasting schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FastingPreset {
    /// 16 hours fasting, 8 hours eating
    Sixteen8,
    /// 18 hours fasting, 6 hours eating
    Eighteen6,
    /// 20 hours fasting, 4 hours eating
    Twenty4,
    /// One meal a day (23 hours fasting)
    Omad,
    /// User-defined schedule; defaults to 16 hours fasting
    Custom,
}

impl FastingPreset {
    /// All presets in ascending fasting-hour order (custom last)
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Sixteen8,
            Self::Eighteen6,
            Self::Twenty4,
            Self::Omad,
            Self::Custom,
        ]
    }

    /// Hours spent fasting per day
    #[must_use]
    pub const fn fasting_hours(self) -> u32 {
        match self {
            Self::Sixteen8 | Self::Custom => 16,
            Self::Eighteen6 => 18,
            Self::Twenty4 => 20,
            Self::Omad => 23,
        }
    }

    /// Hours available for eating per day
    #[must_use]
    pub const fn eating_window_hours(self) -> u32 {
        HOURS_PER_DAY - self.fasting_hours()
    }

    /// Short label, e.g. `"16:8"`
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sixteen8 => "16:8",
            Self::Eighteen6 => "18:6",
            Self::Twenty4 => "20:4",
            Self::Omad => "OMAD",
            Self::Custom => "Custom",
        }
    }

    /// Whether this preset fasts longer than `other`
    #[must_use]
    pub const fn is_more_intense_than(self, other: Self) -> bool {
        self.fasting_hours() > other.fasting_hours()
    }
}

impl fmt::Display for FastingPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FastingPreset {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "16:8" | "sixteen8" => Ok(Self::Sixteen8),
            "18:6" | "eighteen6" => Ok(Self::Eighteen6),
            "20:4" | "twenty4" => Ok(Self::Twenty4),
            "omad" | "23:1" => Ok(Self::Omad),
            "custom" => Ok(Self::Custom),
            other => Err(AppError::invalid_format(format!(
                "unknown fasting preset: {other}"
            ))),
        }
    }
}
