//! Show command - Display problem details

use anyhow::Result;
use colored::Colorize;
use two_sum::problem;

use crate::commands::print_problem_summary;

/// Show problem details
pub async fn execute(key: &str) -> Result<()> {
    let problem = problem::find(key)?;

    print_problem_summary(&problem);
    println!("{}", "─".repeat(80).cyan());

    println!("\n{}\n", problem.description);

    println!("{}", "Examples:".bold());
    for (i, example) in problem.examples.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).cyan(), example.input);
        println!("     Output: {}", example.output);
        if let Some(ref explanation) = example.explanation {
            println!("     {} {}", "Explanation:".italic(), explanation);
        }
    }

    println!("\n{}", "Constraints:".bold());
    for constraint in &problem.constraints {
        println!("  - {constraint}");
    }

    println!("\n{}", "Hints:".bold());
    for (i, hint) in problem.hints.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).cyan(), hint);
    }

    Ok(())
}
