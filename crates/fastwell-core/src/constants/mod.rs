// ABOUTME: Rule-table constants for the fasting plan engine, grouped by domain
// ABOUTME: Energy math, body-composition cut points, plan bounds, and profile validation defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain.
//!
//! These values are part of the engine's contract: the calorie floor, the
//! minimum plan duration and the BMI cut points are relied upon by callers
//! and are therefore compile-time constants rather than configuration.

/// Energy balance constants
pub mod energy {
    /// Energy density of body fat (kcal per kg)
    pub const KCAL_PER_KG_FAT: f64 = 7700.0;

    /// Days per week, used to turn a daily deficit into a weekly one
    pub const DAYS_PER_WEEK: f64 = 7.0;

    /// Hard floor for the recommended daily intake (kcal/day)
    pub const MIN_DAILY_CALORIES: u32 = 1200;

    /// Multiplier applied to the deficit under high stress
    pub const HIGH_STRESS_DEFICIT_FACTOR: f64 = 0.75;

    /// Fasting hours beyond which the fasting bonus accrues
    pub const FASTING_BONUS_BASELINE_HOURS: u32 = 12;

    /// Additional expected loss per fasting hour beyond the baseline (kg/week)
    pub const FASTING_BONUS_KG_PER_HOUR: f64 = 0.01;
}

/// Mifflin-St Jeor BMR coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
/// energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
pub mod mifflin_st_jeor {
    /// Weight coefficient (per kg)
    pub const WEIGHT_COEF: f64 = 10.0;
    /// Height coefficient (per cm)
    pub const HEIGHT_COEF: f64 = 6.25;
    /// Age coefficient (per year)
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant offset
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant offset
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Body composition and demographic thresholds
pub mod body {
    /// Age at or above which a user is treated as elderly
    pub const ELDERLY_AGE: u32 = 65;

    /// BMI below this is underweight
    pub const UNDERWEIGHT_BMI: f64 = 18.5;

    /// BMI at or above this is overweight
    pub const OVERWEIGHT_BMI: f64 = 25.0;

    /// BMI at or above this is obese
    pub const OBESE_BMI: f64 = 30.0;
}

/// Plan construction bounds
pub mod plan {
    /// Shortest plan the engine will recommend (weeks)
    pub const MIN_DURATION_WEEKS: u32 = 4;

    /// Weeks removed from the plan under high stress or poor sleep
    pub const STRESS_SLEEP_DURATION_REDUCTION: u32 = 2;

    /// Default carbohydrate-to-fiber ratio target
    pub const DEFAULT_CARB_FIBER_RATIO: f64 = 8.0;

    /// Upper bound for protein intake (g/kg)
    pub const MAX_PROTEIN_PER_KG: f64 = 1.6;

    /// Protein floor for elderly users (g/kg)
    pub const ELDERLY_MIN_PROTEIN_PER_KG: f64 = 1.2;

    /// Protein bump applied for fat-loss goals (g/kg)
    pub const FAT_LOSS_PROTEIN_BONUS: f64 = 0.1;

    /// Meals the daily protein target is split across
    pub const PROTEIN_MEALS_PER_DAY: u32 = 3;
}

/// Default profile validation limits
pub mod limits {
    /// Youngest age accepted at onboarding
    pub const MIN_AGE: u32 = 18;
    /// Oldest age accepted at onboarding
    pub const MAX_AGE: u32 = 100;
    /// Shortest height accepted (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Tallest height accepted (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Lightest weight accepted (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Heaviest weight accepted (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported by the logging layer
    pub const FASTWELL: &str = "fastwell";
}
