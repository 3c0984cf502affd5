// ABOUTME: Physiological and nutritional constants used by the calculation engines
// ABOUTME: BMI bands, Mifflin-St Jeor coefficients, activity factors, and macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on published clinical guidelines
//!
//! These values are fixed policy for the planner and are not user-configurable.

/// Body Mass Index classification
///
/// References:
/// - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
///   WHO Technical Report Series 894
pub mod bmi {
    /// Below this BMI a person is classified underweight
    pub const UNDERWEIGHT_THRESHOLD: f64 = 18.5;

    /// At or above this BMI a person is classified overweight
    pub const OVERWEIGHT_THRESHOLD: f64 = 25.0;

    /// At or above this BMI a person is classified obese
    pub const OBESE_THRESHOLD: f64 = 30.0;

    /// Lower bound of the healthy range used for the target weight band
    pub const HEALTHY_LOWER: f64 = 18.5;

    /// Upper bound of the healthy range used for the target weight band
    ///
    /// 24.9 rather than 25.0 so the band stays inside "Normal weight".
    pub const HEALTHY_UPPER: f64 = 24.9;

    /// Conversion factor for the imperial formula `lb * 703 / in^2`
    pub const IMPERIAL_FACTOR: f64 = 703.0;

    /// Centimeters per meter
    pub const CM_PER_M: f64 = 100.0;
}

/// Mifflin-St Jeor resting energy equation coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
/// energy expenditure in healthy individuals. *Am J Clin Nutr*, 51(2), 241-247.
pub mod mifflin_st_jeor {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (subtracted)
    pub const AGE_COEF: f64 = -5.0;
    /// Constant for men
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Constant for women
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity factors applied to BMR
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATELY_ACTIVE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const VERY_ACTIVE: f64 = 1.725;
}

/// Energy balance policy
pub mod energy {
    /// Daily deficit for roughly 0.5 kg/week of weight loss
    pub const WEIGHT_LOSS_DEFICIT_KCAL: i64 = 500;
}

/// Macronutrient policy for synthesized plans
pub mod macros {
    /// Protein grams per kg of body weight
    pub const PROTEIN_G_PER_KG: f64 = 1.2;
    /// Share of calories from carbohydrate
    pub const CARB_CALORIE_SHARE: f64 = 0.50;
    /// Share of calories from fat
    pub const FAT_CALORIE_SHARE: f64 = 0.25;
    /// kcal per gram of carbohydrate
    pub const KCAL_PER_G_CARB: f64 = 4.0;
    /// kcal per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Share of daily intake assigned to each meal of a synthesized day
pub mod meal_distribution {
    /// Breakfast share
    pub const BREAKFAST: f64 = 0.25;
    /// Lunch share
    pub const LUNCH: f64 = 0.40;
    /// Snack share
    pub const SNACK: f64 = 0.15;
    /// Dinner share
    pub const DINNER: f64 = 0.20;
}
