// ABOUTME: RunMVMT CLI - generates training plans, report content, and runner classifications
// ABOUTME: Reads quiz answers as JSON from a file or stdin and prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a twelve-week plan
//! runmvmt-cli plan --answers answers.json --pretty
//!
//! # Report content for the PDF renderer, answers piped on stdin
//! cat answers.json | runmvmt-cli report --answers -
//!
//! # Persona, ability tier, and volume envelope only
//! runmvmt-cli classify --answers answers.json
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use runmvmt_planner::answers::{read_answers, AnswerSource};
use runmvmt_planner::config::load_planner_config;
use runmvmt_planner::errors::{AppError, AppResult};
use runmvmt_planner::intelligence::PlanGenerator;
use runmvmt_planner::logging::LoggingConfig;
use runmvmt_planner::models::QuizAnswers;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "runmvmt-cli",
    about = "RunMVMT training plan generator",
    long_about = "Generates deterministic twelve-week running plans from quiz answers."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Options shared by every command
#[derive(Args)]
struct InputArgs {
    /// Answers JSON file, or `-` for stdin
    #[arg(long, short = 'a')]
    answers: String,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the twelve-week training plan
    Plan(InputArgs),

    /// Print report content for the PDF renderer
    Report(InputArgs),

    /// Print persona, ability tier, and volume envelope
    Classify(InputArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

type CommandFn = fn(&PlanGenerator, &QuizAnswers, bool) -> AppResult<()>;

fn run(cli: &Cli) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;

    let generator = PlanGenerator::with_config(load_planner_config()?);

    let (name, args, command): (&str, &InputArgs, CommandFn) = match &cli.command {
        Command::Plan(args) => ("plan", args, commands::plan::run),
        Command::Report(args) => ("report", args, commands::report::run),
        Command::Classify(args) => ("classify", args, commands::classify::run),
    };
    debug!(command = name, answers = %args.answers, "running command");

    let answers = read_answers(&AnswerSource::from_arg(&args.answers))?;
    command(&generator, &answers, args.pretty)
}
