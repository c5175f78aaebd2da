// ABOUTME: User profile model with body metrics, lifestyle inputs, and declared health conditions
// ABOUTME: Derived BMI/BMR/TDEE are recomputed on every read, never cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{body, limits, mifflin_st_jeor};
use crate::errors::{AppError, AppResult};

/// Biological sex used by the Mifflin-St Jeor constant offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
}

impl Sex {
    /// Mifflin-St Jeor constant offset for this sex
    #[must_use]
    pub const fn bmr_offset(self) -> f64 {
        match self {
            Self::Male => mifflin_st_jeor::MALE_CONSTANT,
            Self::Female => mifflin_st_jeor::FEMALE_CONSTANT,
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_format(format!("unknown sex: {other}"))),
        }
    }
}

/// Habitual activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 3-5 days/week
    Active,
    /// Hard training 6-7 days/week
    Intense,
}

impl ActivityLevel {
    /// All activity levels
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Sedentary, Self::Active, Self::Intense]
    }

    /// TDEE multiplier applied to BMR
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Active => 1.55,
            Self::Intense => 1.725,
        }
    }

    /// Baseline protein intake for this activity level (g/kg)
    #[must_use]
    pub const fn base_protein_per_kg(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Active => 1.4,
            Self::Intense => 1.6,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "active" => Ok(Self::Active),
            "intense" => Ok(Self::Intense),
            other => Err(AppError::invalid_format(format!(
                "unknown activity level: {other}"
            ))),
        }
    }
}

/// What the user wants from the fasting plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FastingGoal {
    /// Lose body fat
    FatLoss,
    /// Hold current weight
    Maintenance,
    /// Improve metabolic markers
    MetabolicReset,
}

impl FastingGoal {
    /// All goals
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::FatLoss, Self::Maintenance, Self::MetabolicReset]
    }
}

impl FromStr for FastingGoal {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "fat_loss" | "fatloss" => Ok(Self::FatLoss),
            "maintenance" => Ok(Self::Maintenance),
            "metabolic_reset" | "metabolicreset" => Ok(Self::MetabolicReset),
            other => Err(AppError::invalid_format(format!("unknown goal: {other}"))),
        }
    }
}

/// Dietary pattern, which affects protein bioavailability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    /// Mixed diet
    Omnivore,
    /// No meat
    Vegetarian,
    /// No animal products
    Vegan,
}

impl DietPreference {
    /// All diet preferences
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Omnivore, Self::Vegetarian, Self::Vegan]
    }

    /// Multiplier compensating for lower plant-protein bioavailability
    #[must_use]
    pub const fn protein_multiplier(self) -> f64 {
        match self {
            Self::Omnivore => 1.0,
            Self::Vegetarian => 1.1,
            Self::Vegan => 1.2,
        }
    }
}

impl FromStr for DietPreference {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "omnivore" => Ok(Self::Omnivore),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            other => Err(AppError::invalid_format(format!(
                "unknown diet preference: {other}"
            ))),
        }
    }
}

/// Health conditions declared during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    /// History of eating disorder (contraindication)
    EatingDisorder,
    /// Pregnant or breastfeeding (contraindication)
    Pregnant,
    /// Diabetes
    Diabetes,
    /// Thyroid disorder
    Thyroid,
    /// Heart disease
    HeartDisease,
    /// Taking regular medication
    Medication,
}

impl HealthCondition {
    /// All health conditions
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::EatingDisorder,
            Self::Pregnant,
            Self::Diabetes,
            Self::Thyroid,
            Self::HeartDisease,
            Self::Medication,
        ]
    }
}

impl FromStr for HealthCondition {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "eating_disorder" => Ok(Self::EatingDisorder),
            "pregnant" => Ok(Self::Pregnant),
            "diabetes" => Ok(Self::Diabetes),
            "thyroid" => Ok(Self::Thyroid),
            "heart_disease" | "heart" => Ok(Self::HeartDisease),
            "medication" => Ok(Self::Medication),
            other => Err(AppError::invalid_format(format!(
                "unknown health condition: {other}"
            ))),
        }
    }
}

/// Self-reported stress
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    /// Normal stress
    #[default]
    Normal,
    /// Elevated stress
    High,
}

/// Self-reported sleep quality
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    /// Normal sleep
    #[default]
    Normal,
    /// Poor sleep
    Poor,
}

impl FromStr for StressLevel {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_format(format!("unknown stress level: {other}"))),
        }
    }
}

impl FromStr for SleepQuality {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "poor" => Ok(Self::Poor),
            other => Err(AppError::invalid_format(format!("unknown sleep quality: {other}"))),
        }
    }
}

/// Bounds used to validate a profile at the profile-edit boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileLimits {
    /// Minimum accepted age (years)
    pub min_age: u32,
    /// Maximum accepted age (years)
    pub max_age: u32,
    /// Minimum accepted height (cm)
    pub min_height_cm: f64,
    /// Maximum accepted height (cm)
    pub max_height_cm: f64,
    /// Minimum accepted weight (kg)
    pub min_weight_kg: f64,
    /// Maximum accepted weight (kg)
    pub max_weight_kg: f64,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            min_age: limits::MIN_AGE,
            max_age: limits::MAX_AGE,
            min_height_cm: limits::MIN_HEIGHT_CM,
            max_height_cm: limits::MAX_HEIGHT_CM,
            min_weight_kg: limits::MIN_WEIGHT_KG,
            max_weight_kg: limits::MAX_WEIGHT_KG,
        }
    }
}

/// User profile captured at onboarding
///
/// Owned and persisted by the profile store; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Plan goal
    pub goal: FastingGoal,
    /// Dietary pattern
    pub diet_preference: DietPreference,
    /// Declared health conditions
    #[serde(default)]
    pub health_conditions: BTreeSet<HealthCondition>,
    /// Self-reported stress
    #[serde(default)]
    pub stress_level: StressLevel,
    /// Self-reported sleep quality
    #[serde(default)]
    pub sleep_quality: SleepQuality,
}

impl UserProfile {
    /// Create a profile with the given body metrics and neutral defaults
    /// (sedentary, maintenance, omnivore, no conditions, normal stress and sleep)
    #[must_use]
    pub fn new(age: u32, sex: Sex, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age,
            sex,
            height_cm,
            weight_kg,
            activity_level: ActivityLevel::Sedentary,
            goal: FastingGoal::Maintenance,
            diet_preference: DietPreference::Omnivore,
            health_conditions: BTreeSet::new(),
            stress_level: StressLevel::Normal,
            sleep_quality: SleepQuality::Normal,
        }
    }

    /// Set the activity level
    #[must_use]
    pub fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Set the goal
    #[must_use]
    pub fn with_goal(mut self, goal: FastingGoal) -> Self {
        self.goal = goal;
        self
    }

    /// Set the diet preference
    #[must_use]
    pub fn with_diet(mut self, diet_preference: DietPreference) -> Self {
        self.diet_preference = diet_preference;
        self
    }

    /// Add a declared health condition
    #[must_use]
    pub fn with_condition(mut self, condition: HealthCondition) -> Self {
        self.health_conditions.insert(condition);
        self
    }

    /// Set the stress level
    #[must_use]
    pub fn with_stress(mut self, stress_level: StressLevel) -> Self {
        self.stress_level = stress_level;
        self
    }

    /// Set the sleep quality
    #[must_use]
    pub fn with_sleep(mut self, sleep_quality: SleepQuality) -> Self {
        self.sleep_quality = sleep_quality;
        self
    }

    /// Whether the profile declares the given condition
    #[must_use]
    pub fn has_condition(&self, condition: HealthCondition) -> bool {
        self.health_conditions.contains(&condition)
    }

    /// Body mass index: `weight_kg / (height_cm / 100)^2`
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }

    /// Basal metabolic rate (kcal/day), Mifflin-St Jeor
    ///
    /// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
    #[must_use]
    pub fn bmr(&self) -> f64 {
        let weight_component = mifflin_st_jeor::WEIGHT_COEF * self.weight_kg;
        let height_component = mifflin_st_jeor::HEIGHT_COEF * self.height_cm;
        let age_component = mifflin_st_jeor::AGE_COEF * f64::from(self.age);

        weight_component + height_component + age_component + self.sex.bmr_offset()
    }

    /// Total daily energy expenditure (kcal/day): BMR x activity multiplier
    #[must_use]
    pub fn tdee(&self) -> f64 {
        self.bmr() * self.activity_level.multiplier()
    }

    /// Age 65 or older
    #[must_use]
    pub const fn is_elderly(&self) -> bool {
        self.age >= body::ELDERLY_AGE
    }

    /// High stress or poor sleep
    #[must_use]
    pub fn has_stress_or_poor_sleep(&self) -> bool {
        self.stress_level == StressLevel::High || self.sleep_quality == SleepQuality::Poor
    }

    /// Whether fasting intensity must be capped at 16 hours
    ///
    /// True for high stress, poor sleep, or any declared health condition.
    #[must_use]
    pub fn needs_reduced_intensity(&self) -> bool {
        self.has_stress_or_poor_sleep() || !self.health_conditions.is_empty()
    }

    /// Validate body metrics against the given limits
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first field that is non-finite or
    /// outside its bounds.
    pub fn validate(&self, limits: &ProfileLimits) -> AppResult<()> {
        if !(limits.min_age..=limits.max_age).contains(&self.age) {
            return Err(AppError::value_out_of_range(
                "age",
                f64::from(self.age),
                f64::from(limits.min_age),
                f64::from(limits.max_age),
            ));
        }
        check_range(
            "height_cm",
            self.height_cm,
            limits.min_height_cm,
            limits.max_height_cm,
        )?;
        check_range(
            "weight_kg",
            self.weight_kg,
            limits.min_weight_kg,
            limits.max_weight_kg,
        )
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(field, value, min, max))
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}y {:?} {:.0}cm {:.1}kg (BMI {:.1})",
            self.age,
            self.sex,
            self.height_cm,
            self.weight_kg,
            self.bmi()
        )
    }
}
