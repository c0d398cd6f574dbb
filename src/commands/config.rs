//! Config command - Show or change persisted settings

use anyhow::{Context, Result};
use colored::Colorize;
use two_sum::config::{self, Config};

pub async fn execute(
    mut current: Config,
    show: bool,
    reset: bool,
    set: Option<String>,
) -> Result<()> {
    let print_settings = show || (!reset && set.is_none());

    if reset {
        current = config::reset_config()?;
        println!("{}", "✓ Settings restored to defaults".green());
    }

    if let Some(assignment) = set {
        let (key, value) = assignment
            .split_once('=')
            .context("expected KEY=VALUE")?;
        current.set(key, value)?;
        current.save()?;
        println!("{}", format!("✓ {} updated", key.trim()).green());
    }

    if print_settings {
        println!("{} {}", "File:".bold(), config::get_config_path()?.display());
        println!("  color          = {}", current.color);
        println!("  check_rounds   = {}", current.check_rounds);
        println!("  max_len        = {}", current.max_len);
        println!("  value_bound    = {}", current.value_bound);
        println!(
            "  workspace_path = {}",
            current.workspace_path.as_ref().map_or_else(
                || "(current directory)".to_string(),
                |p| p.display().to_string()
            )
        );
    }

    Ok(())
}
