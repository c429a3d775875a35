// ABOUTME: Macro planner CLI - computes a macro plan from demographics flags
// ABOUTME: Prints the plan or the effective engine configuration as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compute a plan with the configured strategies
//! macro-cli compute --age 30 --sex male --feet 5 --inches 10 --weight 180 \
//!     --activity sedentary --goal maintenance
//!
//! # Compare against the fixed-offset and body-weight strategies
//! macro-cli compute --age 30 --sex male --feet 5 --inches 10 --weight 180 \
//!     --activity sedentary --goal weight-loss \
//!     --calorie-strategy fixed-offset --split-strategy body-weight
//!
//! # Reject out-of-range or unrecognized input instead of falling back
//! macro-cli compute --strict ...
//!
//! # Print the active strategies and effective configuration (defaults plus MACRO_* overrides)
//! macro-cli show-config
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use macro_planner::config::MacroEngineConfig;
use macro_planner::intelligence::{CalorieStrategy, MacroEngine, SplitStrategy};
use macro_planner::logging::LoggingConfig;
use macro_planner::models::{ActivityLevel, BiologicalSex, Demographics, Goal};
use macro_planner::validation::validate_demographics;
use serde_json::json;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "macro-cli",
    about = "Macro planner CLI",
    long_about = "Compute daily calorie and macronutrient targets from onboarding demographics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a macro plan and print it as JSON
    Compute {
        /// Age in years
        #[arg(long)]
        age: u32,

        /// Biological sex (male, female, other)
        #[arg(long, default_value = "other")]
        sex: String,

        /// Height, feet component
        #[arg(long)]
        feet: u32,

        /// Height, inches component
        #[arg(long, default_value = "0")]
        inches: u32,

        /// Body weight in pounds
        #[arg(long)]
        weight: f64,

        /// Activity level (sedentary, lightly-active, moderately-active, very-active, extremely-active)
        #[arg(long)]
        activity: String,

        /// Goal (weight-loss, muscle-gain, weight-gain, maintenance)
        #[arg(long)]
        goal: String,

        /// Calorie strategy override (percent-of-tdee, fixed-offset)
        #[arg(long)]
        calorie_strategy: Option<CalorieStrategy>,

        /// Split strategy override (ratio-based, body-weight)
        #[arg(long)]
        split_strategy: Option<SplitStrategy>,

        /// Reject unrecognized values and out-of-range demographics
        #[arg(long)]
        strict: bool,
    },

    /// Print the effective engine configuration as JSON
    ShowConfig,
}

/// Demographics flags as entered on the command line
struct DemographicsArgs {
    age: u32,
    sex: String,
    feet: u32,
    inches: u32,
    weight: f64,
    activity: String,
    goal: String,
}

impl DemographicsArgs {
    fn into_demographics(self, strict: bool) -> Result<Demographics> {
        let (sex, activity, goal) = if strict {
            (
                self.sex.parse::<BiologicalSex>()?,
                self.activity.parse::<ActivityLevel>()?,
                self.goal.parse::<Goal>()?,
            )
        } else {
            (
                BiologicalSex::from_str_lossy(&self.sex),
                ActivityLevel::from_str_lossy(&self.activity),
                Goal::from_str_lossy(&self.goal),
            )
        };

        let demographics = Demographics::new(
            self.age,
            sex,
            self.feet,
            self.inches,
            self.weight,
            activity,
            goal,
        );

        if strict {
            validate_demographics(&demographics).context("Demographics failed validation")?;
        }
        Ok(demographics)
    }
}

fn run_compute(
    args: DemographicsArgs,
    calorie_strategy: Option<CalorieStrategy>,
    split_strategy: Option<SplitStrategy>,
    strict: bool,
) -> Result<()> {
    let demographics = args.into_demographics(strict)?;

    let config = MacroEngineConfig::global().clone();
    let calorie = calorie_strategy.unwrap_or(config.calorie_adjustment.strategy);
    let split = split_strategy.unwrap_or(config.macro_distribution.strategy);
    let engine = MacroEngine::new(config.with_strategies(calorie, split));

    debug!(?demographics, "Computing macro plan");
    let plan = engine.compute_macro_goals(&demographics);
    info!(
        calorie_strategy = %calorie,
        split_strategy = %split,
        target = plan.target_calories,
        "Macro plan computed"
    );

    let output = json!({
        "calorieStrategy": calorie,
        "splitStrategy": split,
        "demographics": demographics,
        "plan": plan,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_show_config() -> Result<()> {
    let config = MacroEngineConfig::load().context("Invalid macro engine configuration")?;
    println!("{}", serde_json::to_string_pretty(&config.describe()?)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    match cli.command {
        Command::Compute {
            age,
            sex,
            feet,
            inches,
            weight,
            activity,
            goal,
            calorie_strategy,
            split_strategy,
            strict,
        } => {
            let args = DemographicsArgs {
                age,
                sex,
                feet,
                inches,
                weight,
                activity,
                goal,
            };
            run_compute(args, calorie_strategy, split_strategy, strict)
        }
        Command::ShowConfig => run_show_config(),
    }
}
