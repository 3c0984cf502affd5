// ABOUTME: User profile models and calculation result types for BMI and energy needs
// ABOUTME: Gender, ActivityLevel, UnitSystem, WeightHeight, BmiResult, and EnergyResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{limits, units};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used by the Mifflin-St Jeor offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Gender {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
}

impl Gender {
    /// Wire name of this gender
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}' (expected male or female)"
            ))),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level selecting the TDEE multiplier
///
/// Serializes in the spaced form the web client sends (`"moderately active"`).
/// Parsing also accepts hyphenated and snake-case spellings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(rename = "sedentary")]
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(rename = "lightly active")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[serde(rename = "moderately active")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(rename = "very active")]
    VeryActive,
}

impl ActivityLevel {
    /// All levels in ascending order of activity
    pub const ALL: [Self; 4] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
    ];

    /// Wire name of this level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly active",
            Self::ModeratelyActive => "moderately active",
            Self::VeryActive => "very active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown activity level: '{s}' (expected sedentary, lightly active, moderately active or very active)"
                ))
            })
    }
}

impl TryFrom<String> for ActivityLevel {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit system of raw user input
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit system: '{other}' (expected metric or imperial)"
            ))),
        }
    }
}

/// Weight and height tagged with the unit system they were entered in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightHeight {
    /// Kilograms and centimeters
    Metric {
        /// Body weight in kilograms
        kg: f64,
        /// Height in centimeters
        cm: f64,
    },
    /// Pounds and inches
    Imperial {
        /// Body weight in pounds
        lb: f64,
        /// Height in inches
        inches: f64,
    },
}

impl WeightHeight {
    /// Build a tagged measurement from raw input, rejecting values no formula should see
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when weight or height is not finite, not positive,
    /// or above the accepted maximum
    pub fn new(weight: f64, height: f64, unit: UnitSystem) -> AppResult<Self> {
        check_positive("weight", weight, limits::MAX_WEIGHT)?;
        check_positive("height", height, limits::MAX_HEIGHT)?;

        Ok(match unit {
            UnitSystem::Metric => Self::Metric {
                kg: weight,
                cm: height,
            },
            UnitSystem::Imperial => Self::Imperial {
                lb: weight,
                inches: height,
            },
        })
    }

    /// Unit system this measurement was entered in
    #[must_use]
    pub const fn unit(&self) -> UnitSystem {
        match self {
            Self::Metric { .. } => UnitSystem::Metric,
            Self::Imperial { .. } => UnitSystem::Imperial,
        }
    }

    /// Weight in kilograms and height in centimeters
    #[must_use]
    pub fn to_metric(&self) -> (f64, f64) {
        match *self {
            Self::Metric { kg, cm } => (kg, cm),
            Self::Imperial { lb, inches } => (lb * units::KG_PER_LB, inches * units::CM_PER_INCH),
        }
    }
}

fn check_positive(field: &str, value: f64, max: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::value_out_of_range(format!(
            "{field} must be a positive number"
        )));
    }
    if value > max {
        return Err(AppError::value_out_of_range(format!(
            "{field} must not exceed {max}"
        )));
    }
    Ok(())
}

/// Metric-normalized attributes feeding the energy engine and meal-plan prompt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age: u32,
    /// Gender for the BMR offset
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
}

impl UserProfile {
    /// Build a profile from validated measurements
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when the age is outside 1-120
    pub fn new(
        measurements: WeightHeight,
        age: u32,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> AppResult<Self> {
        Self::check_age(age)?;
        let (weight_kg, height_cm) = measurements.to_metric();
        Ok(Self {
            weight_kg,
            height_cm,
            age,
            gender,
            activity_level,
        })
    }

    /// Reject ages outside the accepted range
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when the age is outside 1-120
    pub fn check_age(age: u32) -> AppResult<u32> {
        if (limits::MIN_AGE..=limits::MAX_AGE).contains(&age) {
            Ok(age)
        } else {
            Err(AppError::value_out_of_range(format!(
                "age must be between {} and {}",
                limits::MIN_AGE,
                limits::MAX_AGE
            )))
        }
    }
}

/// BMI classification band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.5
    #[serde(rename = "Underweight")]
    Underweight,
    /// BMI from 18.5 up to 25
    #[serde(rename = "Normal weight")]
    Normal,
    /// BMI from 25 up to 30
    #[serde(rename = "Overweight")]
    Overweight,
    /// BMI of 30 or more
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    /// Label shown to users
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Healthy weight band for a given height, in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetWeightRange {
    /// Weight at BMI 18.5
    pub lower: f64,
    /// Weight at BMI 24.9
    pub upper: f64,
}

/// Output of the BMI engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// BMI rounded to one decimal
    pub bmi: f64,
    /// Classification band
    pub category: BmiCategory,
    /// Healthy weight band, rounded to one decimal
    pub target_weight_range: TargetWeightRange,
    /// Height in meters, rounded to two decimals
    pub height_in_meters: f64,
}

/// Output of the energy expenditure engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    /// Basal metabolic rate in kcal/day
    pub bmr: i64,
    /// Total daily energy expenditure in kcal/day
    pub tdee: i64,
    /// Daily target for roughly 0.5 kg/week loss
    pub weight_loss_calories: i64,
    /// Echo of the activity level used
    pub activity_level: ActivityLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_accepts_all_spellings() {
        for raw in [
            "moderately active",
            "moderately-active",
            "moderately_active",
            "Moderately Active",
        ] {
            assert_eq!(
                raw.parse::<ActivityLevel>().unwrap(),
                ActivityLevel::ModeratelyActive
            );
        }
    }

    #[test]
    fn test_activity_level_rejects_unknown() {
        let err = "extra active".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
    }

    #[test]
    fn test_activity_level_serializes_spaced() {
        let json = serde_json::to_string(&ActivityLevel::LightlyActive).unwrap();
        assert_eq!(json, "\"lightly active\"");

        let parsed: ActivityLevel = serde_json::from_str("\"very-active\"").unwrap();
        assert_eq!(parsed, ActivityLevel::VeryActive);
    }

    #[test]
    fn test_gender_case_insensitive() {
        let parsed: Gender = serde_json::from_str("\"FEMALE\"").unwrap();
        assert_eq!(parsed, Gender::Female);
        assert!(serde_json::from_str::<Gender>("\"other\"").is_err());
    }

    #[test]
    fn test_imperial_to_metric() {
        let measurements = WeightHeight::new(154.0, 70.0, UnitSystem::Imperial).unwrap();
        let (kg, cm) = measurements.to_metric();
        assert!((kg - 69.853).abs() < 0.001);
        assert!((cm - 177.8).abs() < 1e-9);
    }

    #[test]
    fn test_measurement_limits() {
        assert!(WeightHeight::new(0.0, 170.0, UnitSystem::Metric).is_err());
        assert!(WeightHeight::new(70.0, f64::NAN, UnitSystem::Metric).is_err());
        assert!(WeightHeight::new(1200.0, 170.0, UnitSystem::Metric).is_err());
        assert!(WeightHeight::new(70.0, 301.0, UnitSystem::Metric).is_err());
    }

    #[test]
    fn test_age_limits() {
        assert!(UserProfile::check_age(0).is_err());
        assert!(UserProfile::check_age(121).is_err());
        assert_eq!(UserProfile::check_age(30).unwrap(), 30);
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&BmiCategory::Normal).unwrap();
        assert_eq!(json, "\"Normal weight\"");
    }
}
