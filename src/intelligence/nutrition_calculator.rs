// ABOUTME: Energy expenditure engine using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, and weight-loss calorie target from a metric user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., et al. (2010). Exercise Physiology: Nutrition, Energy, and Human Performance.
//!
//! The engine does not re-validate inputs. `UserProfile::new` and
//! `ActivityLevel::from_str` reject bad values at the boundary.

use super::physiological_constants::{activity_factors, energy, mifflin_st_jeor};
use crate::models::{ActivityLevel, EnergyResult, Gender, UserProfile};
use serde::{Deserialize, Serialize};

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// kcal per kg of body weight
    pub msj_weight_coef: f64,
    /// kcal per cm of height
    pub msj_height_coef: f64,
    /// kcal per year of age
    pub msj_age_coef: f64,
    /// Constant for men
    pub msj_male_constant: f64,
    /// Constant for women
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
            msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
            msj_age_coef: mifflin_st_jeor::AGE_COEF,
            msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
            msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
        }
    }
}

/// TDEE multipliers per activity level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary multiplier
    pub sedentary: f64,
    /// Lightly active multiplier
    pub lightly_active: f64,
    /// Moderately active multiplier
    pub moderately_active: f64,
    /// Very active multiplier
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            lightly_active: activity_factors::LIGHTLY_ACTIVE,
            moderately_active: activity_factors::MODERATELY_ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for the given level
    #[must_use]
    pub const fn factor(&self, activity_level: ActivityLevel) -> f64 {
        match activity_level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor(activity_level)
}

/// Round a kcal value to the nearest whole number
#[allow(clippy::cast_possible_truncation)]
fn round_kcal(value: f64) -> i64 {
    value.round() as i64
}

/// Calculate BMR, TDEE, and the weight-loss target with custom coefficients
///
/// BMR is rounded before the activity factor is applied, and the weight-loss
/// target is the rounded TDEE minus a fixed 500 kcal deficit.
#[must_use]
pub fn calculate_energy_with_config(
    profile: &UserProfile,
    bmr_config: &BmrConfig,
    activity_config: &ActivityFactorsConfig,
) -> EnergyResult {
    let bmr = round_kcal(calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        bmr_config,
    ));

    #[allow(clippy::cast_precision_loss)]
    let tdee = round_kcal(calculate_tdee(
        bmr as f64,
        profile.activity_level,
        activity_config,
    ));

    EnergyResult {
        bmr,
        tdee,
        weight_loss_calories: tdee - energy::WEIGHT_LOSS_DEFICIT_KCAL,
        activity_level: profile.activity_level,
    }
}

/// Calculate BMR, TDEE, and the weight-loss target with the standard coefficients
#[must_use]
pub fn calculate_energy(profile: &UserProfile) -> EnergyResult {
    calculate_energy_with_config(
        profile,
        &BmrConfig::default(),
        &ActivityFactorsConfig::default(),
    )
}
