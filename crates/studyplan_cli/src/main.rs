//! `studyplan` command-line entry point.
//!
//! # Responsibility
//! - Generate plans from JSON request files without the Flutter shell.
//! - Expose the weight formula for quick checks.
//!
//! # Invariants
//! - Rejected inputs print the user-facing message and exit with code 2.
//! - Logging is only initialized when a log directory is configured.

mod config;
mod generate_cmd;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use studyplan_core::{compute_weight_score, default_log_level, Difficulty, UnitType};

use crate::generate_cmd::{GenerateArgs, GenerateOutcome, OutputFormat};

#[derive(Parser)]
#[command(name = "studyplan", version, about = "Weekly study plan generator")]
struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true, env = "STUDYPLAN_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a plan from a `{ "units": [...], "availability": {...} }` file.
    Generate {
        /// Plan request JSON file.
        #[arg(long)]
        input: PathBuf,
        /// Reference time (RFC 3339). Defaults to now.
        #[arg(long)]
        now: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Planner settings TOML. Defaults to ~/.config/studyplan/settings.toml.
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Write output to this file instead of stdout. A directory gets the
        /// dated export name for text output.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the weight score for a difficulty and unit type.
    Weight {
        #[arg(long, value_enum)]
        difficulty: DifficultyArg,
        #[arg(long = "type", value_enum)]
        unit_type: UnitTypeArg,
    },
    /// Print core linkage info.
    Ping,
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Moderate,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Moderate => Difficulty::Moderate,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitTypeArg {
    Exam,
    Practical,
    Project,
}

impl From<UnitTypeArg> for UnitType {
    fn from(value: UnitTypeArg) -> Self {
        match value {
            UnitTypeArg::Exam => UnitType::Exam,
            UnitTypeArg::Practical => UnitType::Practical,
            UnitTypeArg::Project => UnitType::Project,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.log_level.as_deref(), cli.log_dir.as_deref())?;

    match cli.command {
        Command::Generate {
            input,
            now,
            format,
            settings,
            output,
        } => {
            let args = GenerateArgs {
                input: &input,
                now: now.as_deref(),
                format,
                settings: settings.as_deref(),
            };
            match generate_cmd::run(&args)? {
                GenerateOutcome::Generated {
                    plan,
                    rendered,
                    summary,
                } => {
                    match output {
                        Some(path) => {
                            let path = if path.is_dir() {
                                let now = generate_cmd::parse_now(args.now)?;
                                match generate_cmd::default_output_name(format, now) {
                                    Some(name) => path.join(name),
                                    None => path.join(format!("{}.json", plan.id)),
                                }
                            } else {
                                path
                            };
                            std::fs::write(&path, rendered).with_context(|| {
                                format!("failed to write output to {}", path.display())
                            })?;
                            info!(
                                "event=cli_generate module=cli status=ok path={}",
                                path.display()
                            );
                            eprintln!("{summary}");
                        }
                        None => {
                            print!("{rendered}");
                            if !rendered.ends_with('\n') {
                                println!();
                            }
                            eprintln!("{summary}");
                        }
                    }
                    Ok(ExitCode::SUCCESS)
                }
                GenerateOutcome::Rejected(message) => {
                    eprintln!("{message}");
                    Ok(ExitCode::from(2))
                }
            }
        }
        Command::Weight {
            difficulty,
            unit_type,
        } => {
            println!(
                "{}",
                compute_weight_score(difficulty.into(), unit_type.into())
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Ping => {
            println!("studyplan_core ping={}", studyplan_core::ping());
            println!("studyplan_core version={}", studyplan_core::core_version());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(level: Option<&str>, log_dir: Option<&std::path::Path>) -> Result<()> {
    let Some(dir) = log_dir else {
        return Ok(());
    };
    let dir = config::absolute_log_dir(dir)?;
    let level = level
        .map(str::to_owned)
        .unwrap_or_else(|| default_log_level().to_string());
    let dir = dir.to_string_lossy();
    studyplan_core::init_logging(&level, &dir).context("failed to initialize logging")
}
