//! Solve command - Find the pair for a single input

use anyhow::{Context, Result};
use colored::Colorize;
use two_sum::{find_pair, problem::parse_csv};

/// Find and print the pair for `nums` and `target`
pub async fn execute(nums: &str, target: i64, json: bool) -> Result<()> {
    let values = parse_csv(nums).context("invalid --nums")?;
    log::info!("searching {} values for target {}", values.len(), target);

    let pair = find_pair(&values, target);

    if json {
        let indices = pair.map(|p| p.to_vec()).unwrap_or_default();
        println!("{}", serde_json::to_string(&indices)?);
        return Ok(());
    }

    match pair {
        Some(p) => {
            println!("{} {}", "✓ Pair:".green().bold(), p);
            println!(
                "  nums[{}] + nums[{}] = {} + {} = {}",
                p.first, p.second, values[p.first], values[p.second], target
            );
        }
        None => {
            println!("{}", "No pair sums to the target.".yellow());
        }
    }

    Ok(())
}
