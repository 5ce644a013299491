// ABOUTME: Calorie Hunter CLI - classify foods and summarize nutrition logs from JSON files
// ABOUTME: Prints results as JSON on stdout and failures as a JSON error envelope on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Hunter
//!
//! Usage:
//! ```bash
//! # Classify one food (object) or many (array)
//! hunter-cli classify --file cola.json --owner player-1 --pretty
//!
//! # Print a human-readable card per result instead of JSON
//! hunter-cli classify --file lunch.json --summary
//!
//! # Skip input validation (absent fields already default to zero)
//! hunter-cli classify --file raw.json --no-validate
//!
//! # Aggregate a nutrition log over the last 7 days
//! hunter-cli stats --file records.json --today 2025-06-01 --days 7
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use calorie_hunter::{errors::AppResult, logging::LoggingConfig};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "hunter-cli",
    about = "Calorie Hunter food classification CLI",
    long_about = "Turns nutrition facts into monsters and items, and summarizes nutrition logs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify nutrition facts into a monster or an item
    Classify {
        /// JSON file with one `NutritionFacts` object or an array of them
        #[arg(long, short = 'f')]
        file: PathBuf,

        /// Owner id stamped on spawned entities
        #[arg(long, default_value = "local-player")]
        owner: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Print a human-readable card per result instead of JSON
        #[arg(long)]
        summary: bool,

        /// Classify without validating input first
        #[arg(long)]
        no_validate: bool,
    },

    /// Summarize a nutrition log
    Stats {
        /// JSON file with an array of `NutritionRecord`s
        #[arg(long, short = 'f')]
        file: PathBuf,

        /// Last day of the daily breakdown (defaults to today, UTC)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Number of days in the daily breakdown
        #[arg(long, default_value = "7")]
        days: u32,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::from_env().with_level(log_level).init() {
        eprintln!("Logging disabled: {e}");
    }

    debug!("Calorie Hunter CLI");

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            helpers::display::print_error(e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Classify {
            file,
            owner,
            pretty,
            summary,
            no_validate,
        } => commands::classify::run(&commands::classify::ClassifyArgs {
            file,
            owner,
            pretty,
            summary,
            validate: !no_validate,
        }),
        Command::Stats {
            file,
            today,
            days,
            pretty,
        } => commands::stats::run(&file, today, days, pretty),
    }
}
