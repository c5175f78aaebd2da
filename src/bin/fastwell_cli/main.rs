// ABOUTME: Fastwell CLI - command-line front end for the fasting plan engine
// ABOUTME: Screens profiles, generates plans and advisories, and lists presets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Screen a profile for contraindications
//! fastwell-cli check --profile profile.json
//!
//! # Generate a plan starting on a given day
//! fastwell-cli plan --profile profile.json --start 2025-01-06
//!
//! # Fitness advisories for the generated plan
//! fastwell-cli advise --profile profile.json
//!
//! # Full onboarding assessment as JSON
//! fastwell-cli assess --profile profile.json --format json
//!
//! # List fasting presets
//! fastwell-cli presets
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fastwell::config::{EngineConfig, OutputFormat};
use fastwell::errors::AppError;
use tracing::debug;

use helpers::display::print_error;

#[derive(Parser)]
#[command(
    name = "fastwell-cli",
    about = "Fastwell fasting plan engine",
    long_about = "Screens a user profile for fasting contraindications, generates a personalized fasting plan and companion fitness advisories."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: json or pretty (defaults to `FASTWELL_OUTPUT_FORMAT`)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the pre-plan safety check
    Check {
        /// Path to the profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Generate a fasting plan
    Plan {
        /// Path to the profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Plan start date (YYYY-MM-DD, defaults to now)
        #[arg(long)]
        start: Option<String>,
    },

    /// Fitness advisories for the generated plan
    Advise {
        /// Path to the profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Full onboarding assessment: safety, plan and advisories
    Assess {
        /// Path to the profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Plan start date (YYYY-MM-DD, defaults to now)
        #[arg(long)]
        start: Option<String>,
    },

    /// List available fasting presets
    Presets,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            print_error(&e, OutputFormat::Pretty);
            return exit_code_for(&e);
        }
    };

    let format = cli
        .format
        .as_deref()
        .map_or(config.output_format, OutputFormat::from_str_or_default);

    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    match run(cli.command, &config, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let app_error = err
                .downcast::<AppError>()
                .unwrap_or_else(|other| AppError::internal(format!("{other:#}")));
            print_error(&app_error, format);
            exit_code_for(&app_error)
        }
    }
}

fn run(command: Command, config: &EngineConfig, format: OutputFormat) -> anyhow::Result<()> {
    debug!(%format, "running command");

    match command {
        Command::Check { profile } => commands::engine::check(&profile, config, format),
        Command::Plan { profile, start } => {
            commands::engine::plan(&profile, start.as_deref(), config, format)
        }
        Command::Advise { profile } => commands::engine::advise(&profile, config, format),
        Command::Assess { profile, start } => {
            commands::engine::assess(&profile, start.as_deref(), config, format)
        }
        Command::Presets => commands::presets::list(format),
    }
}

fn exit_code_for(error: &AppError) -> ExitCode {
    ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1))
}
