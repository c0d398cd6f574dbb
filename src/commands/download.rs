//! Download command - Write a practice workspace

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use two_sum::{problem::Problem, template::CodeTemplate};

/// Write the problem workspace into `output`
pub async fn execute(output: PathBuf, force: bool) -> Result<()> {
    let problem = Problem::two_sum();
    println!(
        "{}",
        format!("Writing workspace for problem {}...", problem.id).cyan()
    );

    let template = CodeTemplate::new(&problem)?;
    let scaffold = template.write_workspace(&output, force).await?;

    println!(
        "{}",
        format!("✓ Problem downloaded to: {}", scaffold.dir.display()).green()
    );
    println!("  - Solution: {}", scaffold.lib_rs.display());
    println!("  - Cargo.toml: {}", scaffold.cargo_toml.display());
    println!("  - Description: {}", scaffold.readme.display());
    println!("  - Test cases: {}", scaffold.test_cases.display());
    println!();
    println!("{}", "To run tests:".cyan());
    println!("  cd {}", scaffold.dir.display());
    println!("  cargo test");

    Ok(())
}
