use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use two_sum::config::Config;

#[derive(Parser)]
#[command(name = "two-sum")]
#[command(about = "Solve, test and practice the Two Sum problem")]
#[command(version = "0.1.0")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the two indices whose values add up to the target
    Solve {
        /// Comma separated integers, e.g. 2,7,11,15
        #[arg(short, long, allow_hyphen_values = true)]
        nums: String,
        /// Target sum
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,
        /// Print the result as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Show problem details
    Show {
        /// Problem ID or slug
        #[arg(default_value = "two-sum")]
        problem: String,
    },
    /// Run the example test cases, or those in a test_cases.json
    Test {
        /// Test case file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Compare the solver against a brute force search on random inputs
    Check {
        /// Number of random instances (defaults to the configured value)
        #[arg(short, long)]
        rounds: Option<u32>,
        /// Seed of the first instance
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Write a practice workspace for the problem
    Download {
        /// Output directory (defaults to the configured workspace)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite an existing workspace
        #[arg(short, long)]
        force: bool,
    },
    /// Show or change persisted settings
    Config {
        /// Print the current settings
        #[arg(long)]
        show: bool,
        /// Restore the defaults
        #[arg(long, conflicts_with = "set")]
        reset: bool,
        /// Change a setting, e.g. --set check_rounds=500
        #[arg(long, value_name = "KEY=VALUE")]
        set: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    if !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Solve { nums, target, json } => {
            commands::solve::execute(&nums, target, json).await?;
        }
        Commands::Show { problem } => {
            commands::show::execute(&problem).await?;
        }
        Commands::Test { file } => {
            commands::test::execute(file).await?;
        }
        Commands::Check { rounds, seed } => {
            commands::check::execute(&config, rounds, seed).await?;
        }
        Commands::Download { output, force } => {
            let output = output.unwrap_or_else(|| config.get_workspace());
            commands::download::execute(output, force).await?;
        }
        Commands::Config { show, reset, set } => {
            commands::config::execute(config, show, reset, set).await?;
        }
    }

    Ok(())
}
