//! Test command - Run test cases against the solver

use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::Colorize;
use two_sum::{
    problem::{Problem, TestCaseFile},
    test_runner::TestRunner,
};

/// Run the built-in examples, or the cases from `file`
pub async fn execute(file: Option<PathBuf>) -> Result<()> {
    let case_file = match file {
        Some(path) => {
            println!(
                "{}",
                format!("Running tests from {}...", path.display()).cyan()
            );
            TestCaseFile::load(&path).await?
        }
        None => {
            println!("{}", "Running example tests...".cyan());
            TestCaseFile::from_problem(&Problem::two_sum())?
        }
    };

    let runner = TestRunner::new(case_file.test_cases);
    let report = runner.run();
    runner.print_report(&report);

    if !report.all_passed() {
        bail!("{} of {} test cases failed", report.failed(), report.outcomes.len());
    }
    Ok(())
}
