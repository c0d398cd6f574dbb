use colored::*;

use crate::{
    problem::{TestCase, format_list},
    solution::find_pair,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub label: String,
    pub expected: Vec<usize>,
    pub actual: Vec<usize>,
    pub passed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub outcomes: Vec<CaseOutcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn summary_line(&self) -> String {
        let status = if self.all_passed() { "ok" } else { "FAILED" };
        format!(
            "test result: {}. {} passed; {} failed",
            status,
            self.passed(),
            self.failed()
        )
    }
}

pub struct TestRunner {
    cases: Vec<TestCase>,
}

impl TestRunner {
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    pub fn run(&self) -> Report {
        let outcomes = self
            .cases
            .iter()
            .map(|case| {
                let actual = find_pair(&case.nums, case.target)
                    .map(|pair| pair.to_vec())
                    .unwrap_or_default();
                let passed = actual == case.expected;
                log::debug!("{} -> {:?} (expected {:?})", case.label(), actual, case.expected);
                CaseOutcome {
                    label: case.label(),
                    expected: case.expected.clone(),
                    actual,
                    passed,
                }
            })
            .collect();

        Report { outcomes }
    }

    pub fn print_report(&self, report: &Report) {
        println!("\nrunning {} tests", report.outcomes.len());

        for (i, outcome) in report.outcomes.iter().enumerate() {
            let line = format!("test case_{} ... ", i + 1);
            if outcome.passed {
                println!("  {}{}", line, "ok".green());
            } else {
                println!("  {}{}", line, "FAILED".red());
                println!("    {} {}", "Input:".bold(), outcome.label);
                println!("    {} {}", "Expected:".bold(), format_list(&outcome.expected));
                println!("    {} {}", "Actual:".bold(), format_list(&outcome.actual));
            }
        }

        println!();
        if report.all_passed() {
            println!("{}", report.summary_line().green());
            println!("\n{}", "✓ All tests passed!".green().bold());
        } else {
            println!("{}", report.summary_line().red());
            println!("\n{}", "✗ Some tests failed".red().bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Problem;

    #[test]
    fn test_catalog_examples_pass() {
        let cases = Problem::two_sum().test_cases().unwrap();
        let report = TestRunner::new(cases).run();
        assert_eq!(report.passed(), 3);
        assert!(report.all_passed());
        assert_eq!(report.summary_line(), "test result: ok. 3 passed; 0 failed");
    }

    #[test]
    fn test_wrong_expectation_fails() {
        let cases = vec![
            TestCase {
                nums: vec![3, 2, 4],
                target: 6,
                expected: vec![0, 2],
                explanation: None,
            },
            TestCase {
                nums: vec![1, 2],
                target: 10,
                expected: vec![],
                explanation: None,
            },
        ];
        let report = TestRunner::new(cases).run();
        assert_eq!(report.failed(), 1);
        assert_eq!(report.outcomes[0].actual, vec![1, 2]);
        assert!(report.outcomes[1].passed);
        assert!(!report.all_passed());
        assert!(report.summary_line().starts_with("test result: FAILED"));
    }

    #[test]
    fn test_empty_run() {
        let report = TestRunner::new(Vec::new()).run();
        assert!(report.all_passed());
        assert_eq!(report.passed(), 0);
    }
}
