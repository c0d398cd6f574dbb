use std::{fmt, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl TryFrom<i32> for Difficulty {
    type Error = i32;

    fn try_from(level: i32) -> std::result::Result<Self, Self::Error> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(other),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub description: String,
    pub examples: Vec<Example>,
    pub constraints: Vec<String>,
    pub hints: Vec<String>,
}

impl Problem {
    /// The built-in Two Sum entry.
    pub fn two_sum() -> Self {
        Self {
            id: 1,
            title: "Two Sum".to_string(),
            slug: "two-sum".to_string(),
            difficulty: Difficulty::Easy,
            category: "Arrays".to_string(),
            description: "Given an array of integers nums and an integer target, return indices \
                          of the two numbers such that they add up to target.\n\n\
                          You may assume that each input would have exactly one solution, and \
                          you may not use the same element twice.\n\n\
                          You can return the answer in any order."
                .to_string(),
            examples: vec![
                Example {
                    input: "nums = [2,7,11,15], target = 9".to_string(),
                    output: "[0,1]".to_string(),
                    explanation: Some(
                        "Because nums[0] + nums[1] == 9, we return [0, 1].".to_string(),
                    ),
                },
                Example {
                    input: "nums = [3,2,4], target = 6".to_string(),
                    output: "[1,2]".to_string(),
                    explanation: None,
                },
                Example {
                    input: "nums = [3,3], target = 6".to_string(),
                    output: "[0,1]".to_string(),
                    explanation: None,
                },
            ],
            constraints: vec![
                "2 <= nums.length <= 10^4".to_string(),
                "-10^9 <= nums[i] <= 10^9".to_string(),
                "-10^9 <= target <= 10^9".to_string(),
                "Only one valid answer exists.".to_string(),
            ],
            hints: vec![
                "A brute force approach would be to check every possible pair of numbers in the array."
                    .to_string(),
                "To optimize, consider using a hash table. What would you store in it?".to_string(),
                "While iterating through the array, check if the complement (target - current number) exists in your hash table."
                    .to_string(),
            ],
        }
    }

    /// Directory name used for a local workspace, e.g. `0001_two_sum`.
    pub fn workspace_dir_name(&self) -> String {
        format!("{:04}_{}", self.id, self.slug.replace('-', "_"))
    }

    pub fn url(&self) -> String {
        format!("https://leetcode.com/problems/{}/", self.slug)
    }

    /// Convert the catalog examples into runnable test cases.
    pub fn test_cases(&self) -> std::result::Result<Vec<TestCase>, ParseError> {
        self.examples
            .iter()
            .map(|example| -> std::result::Result<TestCase, ParseError> {
                let (nums, target) = parse_example_input(&example.input)?;
                let expected = parse_int_list(&example.output)?
                    .into_iter()
                    .map(|v| {
                        usize::try_from(v).map_err(|_| ParseError::InvalidInteger(v.to_string()))
                    })
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(TestCase {
                    nums,
                    target,
                    expected,
                    explanation: example.explanation.clone(),
                })
            })
            .collect()
    }
}

/// Look up a problem by numeric id or slug.
pub fn find(key: &str) -> std::result::Result<Problem, CatalogError> {
    let problem = Problem::two_sum();
    let key_trimmed = key.trim();

    let by_id = key_trimmed.parse::<u32>().ok() == Some(problem.id);
    let by_slug = key_trimmed.eq_ignore_ascii_case(&problem.slug);

    if by_id || by_slug {
        Ok(problem)
    } else {
        Err(CatalogError::NotFound(key_trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub nums: Vec<i64>,
    pub target: i64,
    pub expected: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl TestCase {
    pub fn label(&self) -> String {
        format!("nums = {}, target = {}", format_list(&self.nums), self.target)
    }
}

/// Contents of a `test_cases.json` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseFile {
    pub problem_id: u32,
    pub problem_title: String,
    pub test_cases: Vec<TestCase>,
}

impl TestCaseFile {
    pub fn from_problem(problem: &Problem) -> std::result::Result<Self, ParseError> {
        Ok(Self {
            problem_id: problem.id,
            problem_title: problem.title.clone(),
            test_cases: problem.test_cases()?,
        })
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        let file: TestCaseFile = serde_json::from_str(&content)
            .with_context(|| format!("invalid test case file {}", path.display()))?;
        log::debug!(
            "loaded {} test cases from {}",
            file.test_cases.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse `[1, 2, 3]` into its integers. `[]` is the empty list.
pub fn parse_int_list(text: &str) -> std::result::Result<Vec<i64>, ParseError> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| ParseError::NotAList(text.trim().to_string()))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner.split(',').map(parse_int).collect()
}

/// Parse comma separated integers without brackets, as typed on the command line.
pub fn parse_csv(text: &str) -> std::result::Result<Vec<i64>, ParseError> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        return parse_int_list(trimmed);
    }
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed.split(',').map(parse_int).collect()
}

/// Parse `nums = [2,7,11,15], target = 9`.
pub fn parse_example_input(text: &str) -> std::result::Result<(Vec<i64>, i64), ParseError> {
    let nums_start = text
        .find("nums")
        .and_then(|i| text[i..].find('=').map(|eq| i + eq + 1))
        .ok_or(ParseError::MissingField("nums"))?;
    let rest = &text[nums_start..];
    let close = rest
        .find(']')
        .ok_or_else(|| ParseError::NotAList(rest.trim().to_string()))?;
    let nums = parse_int_list(&rest[..=close])?;

    let after = &rest[close + 1..];
    let target_start = after
        .find("target")
        .and_then(|i| after[i..].find('=').map(|eq| i + eq + 1))
        .ok_or(ParseError::MissingField("target"))?;
    let target = parse_int(&after[target_start..])?;

    Ok((nums, target))
}

fn parse_int(text: &str) -> std::result::Result<i64, ParseError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger(trimmed.to_string()))
}

pub fn format_list<T: fmt::Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("[{joined}]")
}
