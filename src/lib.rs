//! Two Sum practice kit.
//!
//! The solver itself lives in [`solution`]; the remaining modules back the
//! `two-sum` command line tool.

pub mod checker;
pub mod config;
pub mod error;
pub mod problem;
pub mod solution;
pub mod template;
pub mod test_runner;

pub use solution::{Pair, Solution, find_pair, find_pair_brute};
