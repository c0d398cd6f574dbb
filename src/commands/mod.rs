//! Command modules for two-sum
//!
//! Each submodule handles a specific CLI subcommand.

pub mod check;
pub mod config;
pub mod download;
pub mod show;
pub mod solve;
pub mod test;

use colored::{ColoredString, Colorize};
use two_sum::problem::{Difficulty, Problem};

pub fn colored_difficulty(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::Easy => "Easy".green(),
        Difficulty::Medium => "Medium".yellow(),
        Difficulty::Hard => "Hard".red(),
    }
}

/// Print a summary of a problem
pub fn print_problem_summary(problem: &Problem) {
    println!("\n{}", "═".repeat(80).cyan());
    println!(
        "{} {}. {}",
        "Problem".bold(),
        problem.id,
        problem.title.bold()
    );
    println!("{}", "═".repeat(80).cyan());

    println!(
        "{} {}",
        "Difficulty:".bold(),
        colored_difficulty(problem.difficulty)
    );
    println!("{} {}", "Category:".bold(), problem.category);
    println!("{} {}", "Link:".bold(), problem.url());
}
