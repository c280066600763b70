//! Hailstorm CLI.
//!
//! `throw` prints the solved unknowns and then the sum of the ray origin;
//! `crossings` prints the number of future x/y crossings inside the test area.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hailstorm::core::crossings::TestArea;
use hailstorm::crossings::count_crossings;
use hailstorm::exit_codes;
use hailstorm::io::config::{DEFAULT_CONFIG_PATH, HailstormConfig, load_config, render_config};
use hailstorm::io::input::read_hailstones;
use hailstorm::logging;
use hailstorm::throw::solve_throw;

#[derive(Parser)]
#[command(
    name = "hailstorm",
    version,
    about = "Exact rock-throw solver for straight-line hailstones"
)]
struct Cli {
    /// Configuration file; missing means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the ray hitting the sampled hailstones and sum its origin.
    Throw {
        /// Puzzle input; defaults to the configured `input`.
        input: Option<PathBuf>,
    },
    /// Count pairs whose x/y paths cross inside the test area in the future.
    Crossings {
        input: Option<PathBuf>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::for_error(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config).context("load configuration")?;
    match cli.command {
        Command::Throw { input } => cmd_throw(&cfg, input),
        Command::Crossings { input, min, max } => {
            let area = TestArea::new(
                min.unwrap_or(cfg.crossings.min),
                max.unwrap_or(cfg.crossings.max),
            );
            cmd_crossings(&cfg, input, &area)
        }
        Command::Config => {
            print!("{}", render_config(&cfg)?);
            Ok(())
        }
    }
}

fn cmd_throw(cfg: &HailstormConfig, input: Option<PathBuf>) -> Result<()> {
    let path = input.unwrap_or_else(|| cfg.input.clone());
    let hailstones = read_hailstones(&path)?;
    let report = solve_throw(&hailstones, &cfg.throw)
        .with_context(|| format!("solve throw for {}", path.display()))?;
    println!("{}", report.listing());
    println!("{}", report.answer);
    Ok(())
}

fn cmd_crossings(cfg: &HailstormConfig, input: Option<PathBuf>, area: &TestArea) -> Result<()> {
    let path = input.unwrap_or_else(|| cfg.input.clone());
    let hailstones = read_hailstones(&path)?;
    println!("{}", count_crossings(&hailstones, area)?);
    Ok(())
}
