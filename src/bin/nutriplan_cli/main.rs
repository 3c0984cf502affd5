// ABOUTME: Nutriplan CLI - terminal version of the BMI, calorie, and meal plan wizard
// ABOUTME: Prints calculator results and exports generated meal plans as JSON charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # BMI in metric units
//! nutriplan-cli bmi --weight 70 --height 175
//!
//! # Calorie needs from imperial input
//! nutriplan-cli calories --weight 154 --height 69 --unit imperial \
//!     --age 30 --gender male --activity "moderately active"
//!
//! # Generate a plan for the weight-loss target and export it
//! nutriplan-cli plan --weight 70 --height 175 --age 30 --gender female \
//!     --activity sedentary --preference vegetarian --allergy peanuts --output plan.json
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use nutriplan_server::{
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    models::{ActivityLevel, Gender, UnitSystem, UserProfile, WeightHeight},
};
use std::path::PathBuf;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Nutriplan command-line wizard",
    long_about = "Compute BMI and calorie needs, then generate a seven-day meal plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Weight and height as entered
#[derive(Args, Debug, Clone, Copy)]
struct MeasurementArgs {
    /// Weight in kg (metric) or lb (imperial)
    #[arg(long)]
    weight: f64,

    /// Height in cm (metric) or inches (imperial)
    #[arg(long)]
    height: f64,

    /// Unit system: metric or imperial
    #[arg(long, default_value = "metric")]
    unit: UnitSystem,
}

impl MeasurementArgs {
    fn measurements(self) -> Result<WeightHeight> {
        WeightHeight::new(self.weight, self.height, self.unit)
    }
}

/// Full profile as entered
#[derive(Args, Debug, Clone, Copy)]
struct ProfileArgs {
    #[command(flatten)]
    measurements: MeasurementArgs,

    /// Age in years (1-120)
    #[arg(long)]
    age: u32,

    /// male or female
    #[arg(long)]
    gender: Gender,

    /// sedentary, lightly active, moderately active, or very active
    #[arg(long)]
    activity: ActivityLevel,
}

impl ProfileArgs {
    fn profile(self) -> Result<UserProfile> {
        UserProfile::new(
            self.measurements.measurements()?,
            self.age,
            self.gender,
            self.activity,
        )
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate BMI and the healthy weight range
    Bmi {
        #[command(flatten)]
        measurements: MeasurementArgs,
    },

    /// Calculate BMR, TDEE, and the weight-loss calorie target
    Calories {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Generate a meal plan
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Daily calorie target (defaults to the weight-loss target)
        #[arg(long)]
        calories: Option<u32>,

        /// Dietary preference (repeatable)
        #[arg(long = "preference")]
        preferences: Vec<String>,

        /// Ingredient to avoid (repeatable)
        #[arg(long = "allergy")]
        allergies: Vec<String>,

        /// Write the meal chart as JSON to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Append the generation to the AI response log in this directory
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging
        .init()
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))?;

    match cli.command {
        Command::Bmi { measurements } => {
            commands::calculators::bmi(measurements.measurements()?);
        }
        Command::Calories { profile } => {
            commands::calculators::calories(&profile.profile()?);
        }
        Command::Plan {
            profile,
            calories,
            preferences,
            allergies,
            output,
            log_dir,
        } => {
            let measurements = profile.measurements.measurements()?;
            commands::plan::generate(commands::plan::PlanOptions {
                measurements,
                profile: profile.profile()?,
                calories,
                preferences,
                allergies,
                output,
                log_dir,
            })
            .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_command() {
        let cli = Cli::try_parse_from([
            "nutriplan-cli",
            "plan",
            "--weight",
            "154",
            "--height",
            "69",
            "--unit",
            "imperial",
            "--age",
            "30",
            "--gender",
            "female",
            "--activity",
            "moderately active",
            "--preference",
            "vegetarian",
            "--preference",
            "low oil",
            "--allergy",
            "peanuts",
            "-o",
            "plan.json",
        ])
        .unwrap();

        let Command::Plan {
            profile,
            calories,
            preferences,
            allergies,
            output,
            log_dir,
        } = cli.command
        else {
            panic!("expected the plan command");
        };
        assert_eq!(profile.measurements.unit, UnitSystem::Imperial);
        assert_eq!(profile.activity, ActivityLevel::ModeratelyActive);
        assert_eq!(calories, None);
        assert_eq!(preferences, vec!["vegetarian", "low oil"]);
        assert_eq!(allergies, vec!["peanuts"]);
        assert_eq!(output, Some(PathBuf::from("plan.json")));
        assert!(log_dir.is_none());

        let metric = profile.profile().unwrap();
        assert!((metric.weight_kg - 69.853).abs() < 0.01);
    }

    #[test]
    fn test_rejects_unknown_activity_level() {
        let result = Cli::try_parse_from([
            "nutriplan-cli",
            "calories",
            "--weight",
            "70",
            "--height",
            "175",
            "--age",
            "30",
            "--gender",
            "male",
            "--activity",
            "jogging",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_measurements_validated_after_parsing() {
        let cli = Cli::try_parse_from(["nutriplan-cli", "bmi", "--weight", "0", "--height", "175"])
            .unwrap();
        let Command::Bmi { measurements } = cli.command else {
            panic!("expected the bmi command");
        };
        assert!(measurements.measurements().is_err());
    }
}
