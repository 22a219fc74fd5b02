//! coffeetin CLI.
//!
//! Plays the coffee tin bean game and checks the last bean against the
//! green-parity prediction.
//!
//! # Quick Start
//!
//! ```bash
//! # Play the classic tins
//! coffeetin play
//!
//! # Play your own tins with a fixed seed
//! coffeetin play BBBGG GGGB --seed 42
//!
//! # Run 1000 seeded trials per tin
//! coffeetin trials --iterations 1000
//! ```

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coffeetin::TrialConfig;
use coffeetin_config::{ConfigLoader, OutputFormat};
use tracing_subscriber::EnvFilter;

/// coffeetin - play the coffee tin bean game and check its parity invariant.
#[derive(Parser)]
#[command(name = "coffeetin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory holding coffeetin.toml.
    #[arg(long, global = true, default_value = ".")]
    project_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Play tins once each and report the last bean.
    Play {
        /// Tins as bean strings (e.g. BBBGG). Defaults to the configured
        /// tins, or the classic scenarios.
        tins: Vec<String>,

        /// Seed for reproducible draws (OS randomness if omitted).
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print reports as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run seeded trials and check every invariant.
    Trials {
        /// Tins as bean strings (e.g. BBBGG).
        tins: Vec<String>,

        /// Seed of the first trial.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of trials per tin.
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        iterations: Option<u64>,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the built-in scenarios.
    Scenarios,

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the merged configuration.
    Show {
        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a single config file.
    Check {
        /// Path to the TOML file.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigLoader::new()
        .with_project_dir(&cli.project_dir)
        .load()
        .context("Failed to load configuration")?;

    style::set_no_color(cli.no_color || !config.output.color);

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Play { tins, seed, json } => {
            let scenarios = commands::resolve_scenarios(&tins, &config)?;
            let format = if json {
                OutputFormat::Json
            } else {
                config.output.format
            };
            commands::play::run(&scenarios, seed.or(config.game.seed), format)
        }
        Commands::Trials {
            tins,
            seed,
            iterations,
            json,
        } => {
            let scenarios = commands::resolve_scenarios(&tins, &config)?;
            let defaults = TrialConfig::from(&config.trials);
            let trial_config = TrialConfig {
                seed: seed.unwrap_or(defaults.seed),
                iterations: iterations.unwrap_or(defaults.iterations),
            };
            let format = if json {
                OutputFormat::Json
            } else {
                config.output.format
            };
            commands::trials::run(&scenarios, trial_config, format)
        }
        Commands::Scenarios => {
            commands::scenarios::run();
            Ok(())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => commands::config::show(&config, &format),
            ConfigCommands::Check { path } => commands::config::check(&path),
        },
    }
}
