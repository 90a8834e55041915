// ABOUTME: MuscleMap CLI - create a profile, get a plan, and adapt it with weight check-ins
// ABOUTME: Collects and validates input, then drives sessions through the plan engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create a profile and get the first plan
//! musclemap-cli profile create --age 25 --height 170 --weight 80 \
//!     --goal "Weight Reduction" --experience beginner --interval 4
//!
//! # Preview a plan without creating a session
//! musclemap-cli plan preview --goal muscle-gain --experience advanced
//!
//! # Log a check-in at the end of the interval
//! musclemap-cli check-in --weight 78.4 --notes "felt strong"
//!
//! # Show the weight history table as JSON
//! musclemap-cli history --format json
//!
//! # Work with a named session
//! musclemap-cli --session alice plan show
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use musclemap::{
    config::AppConfig,
    errors::AppResult,
    formatters::OutputFormat,
    logging::LoggingConfig,
    models::{ExperienceLevel, Goal, TimeInterval},
    session_store::SessionStore,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "musclemap-cli",
    version,
    about = "MuscleMap - adaptive workout and diet plans",
    long_about = "Create a fitness profile, receive a structured workout and diet plan, and adapt it after each weight check-in."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding session records (overrides MUSCLEMAP_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Session name (overrides MUSCLEMAP_DEFAULT_SESSION)
    #[arg(long, short = 's', global = true)]
    session: Option<String>,

    /// Output format: text or json (overrides MUSCLEMAP_OUTPUT_FORMAT)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile management commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Log your weight at the end of an interval and adapt the plan
    CheckIn {
        /// Your new current weight in kg (40.0-200.0)
        #[arg(long)]
        weight: f64,

        /// How did the last period feel?
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the weight history table
    History,

    /// Stored session commands
    Sessions {
        #[command(subcommand)]
        action: SessionsCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Create a profile and its first plan
    Create {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Replace an existing session with the same name
        #[arg(long)]
        force: bool,
    },

    /// Show the current profile
    Show,
}

/// Profile fields collected from the command line
#[derive(Args)]
pub struct ProfileArgs {
    /// Age in years (16-100)
    #[arg(long)]
    pub age: u32,

    /// Height in cm (100-250)
    #[arg(long)]
    pub height: u32,

    /// Current weight in kg (40.0-200.0)
    #[arg(long)]
    pub weight: f64,

    /// Weight Reduction, Muscle Gain, or General Fitness
    #[arg(long)]
    pub goal: Goal,

    /// Beginner, Intermediate, or Advanced
    #[arg(long)]
    pub experience: ExperienceLevel,

    /// Goal interval in weeks: 2, 4, or 6
    #[arg(long, default_value = "4")]
    pub interval: TimeInterval,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Show the initial plan for a goal and experience level
    Preview {
        /// Weight Reduction, Muscle Gain, or General Fitness
        #[arg(long)]
        goal: Goal,

        /// Beginner, Intermediate, or Advanced
        #[arg(long)]
        experience: ExperienceLevel,
    },

    /// Show the current plan
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SessionsCommand {
    /// List stored sessions
    List,

    /// Delete a stored session
    Delete {
        /// Name of the session to delete
        name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::from_env()?;
    let format = cli.format.unwrap_or(config.output_format);
    let session_name = cli
        .session
        .unwrap_or_else(|| config.default_session.clone());

    if let Command::Plan {
        action: PlanCommand::Preview { goal, experience },
    } = cli.command
    {
        return commands::plan::preview(goal, experience, format);
    }

    let store = SessionStore::open(cli.data_dir.unwrap_or(config.data_dir))?;

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Create { profile, force } => {
                commands::profile::create(&store, &session_name, &profile, force, format)
            }
            ProfileCommand::Show => commands::profile::show(&store, &session_name, format),
        },
        Command::Plan { action } => match action {
            PlanCommand::Preview { goal, experience } => {
                commands::plan::preview(goal, experience, format)
            }
            PlanCommand::Show => commands::plan::show(&store, &session_name, format),
        },
        Command::CheckIn { weight, notes } => {
            commands::progress::check_in(&store, &session_name, weight, notes, format)
        }
        Command::History => commands::progress::history(&store, &session_name, format),
        Command::Sessions { action } => match action {
            SessionsCommand::List => commands::sessions::list(&store, format),
            SessionsCommand::Delete { name } => commands::sessions::delete(&store, &name),
        },
    }
}
