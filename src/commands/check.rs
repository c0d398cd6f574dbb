//! Check command - Randomised comparison against the brute force search

use anyhow::{Result, bail};
use colored::Colorize;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use two_sum::{
    checker::{self, Generator},
    config::Config,
    problem::format_list,
};

/// Run the random differential check
pub async fn execute(config: &Config, rounds: Option<u32>, seed: Option<u64>) -> Result<()> {
    let rounds = u64::from(rounds.unwrap_or(config.check_rounds));
    let seed = seed.unwrap_or_else(rand::random);

    println!(
        "{}",
        format!("Checking {rounds} random instances (seed {seed})...").cyan()
    );

    let progress = if Term::stdout().is_term() {
        let bar = ProgressBar::new(rounds);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {elapsed}")?
                .progress_chars("=> "),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let generator = Generator::new(config.max_len, config.value_bound);
    let outcome = checker::check(&generator, seed, rounds, &progress);

    match outcome.mismatch {
        None => {
            println!(
                "{}",
                format!("✓ {} instances agree with the reference search", outcome.rounds)
                    .green()
                    .bold()
            );
            Ok(())
        }
        Some(mismatch) => {
            println!("{}", "✗ Mismatch found".red().bold());
            println!("  {} {}", "Seed:".bold(), mismatch.instance.seed);
            println!("  {} {}", "Nums:".bold(), format_list(&mismatch.instance.nums));
            println!("  {} {}", "Target:".bold(), mismatch.instance.target);
            println!("  {} {:?}", "Found:".bold(), mismatch.found);
            println!("  {} {:?}", "Reference:".bold(), mismatch.reference);
            bail!("check failed after {} rounds: {}", outcome.rounds, mismatch.reason);
        }
    }
}
