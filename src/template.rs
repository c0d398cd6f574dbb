use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use handlebars::Handlebars;
use serde_json::json;

use crate::problem::{Problem, TestCaseFile};

const LIB_RS: &str = r#"// Problem: {{title}}
// Difficulty: {{difficulty}}
// URL: {{url}}

// Time Complexity: O()
// Space Complexity: O()

pub struct Solution;

impl Solution {
    pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {
        let _ = (nums, target);
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
{{#each cases}}

    #[test]
    fn test_case_{{number}}() {
        let nums = vec![{{nums}}];
        let target = {{target}};
        let result = Solution::two_sum(nums, target);
        assert_eq!(result, vec![{{expected}}]);
    }
{{/each}}
}
"#;

const README_MD: &str = r#"# {{title}}

**Difficulty:** {{difficulty}}
**Category:** {{category}}
**URL:** {{url}}

## Description

{{description}}

## Examples
{{#each examples}}

### Example {{number}}

```
Input: {{input}}
Output: {{output}}
{{#if explanation}}Explanation: {{explanation}}
{{/if}}```
{{/each}}

## Constraints

{{#each constraints}}
* {{this}}
{{/each}}

## Hints

{{#each hints}}
{{number}}. {{text}}

{{/each}}
## Solution Approach

<!-- Write your approach here -->

### Complexity Analysis

- **Time Complexity:** O()
- **Space Complexity:** O()
"#;

const CARGO_TOML: &str = r#"[package]
name = "p{{id}}_{{crate_name}}"
version = "0.1.0"
edition = "2021"

[dependencies]
"#;

/// Paths of the files written into a workspace.
#[derive(Debug, Clone)]
pub struct Scaffold {
    pub dir: PathBuf,
    pub lib_rs: PathBuf,
    pub cargo_toml: PathBuf,
    pub readme: PathBuf,
    pub test_cases: PathBuf,
}

pub struct CodeTemplate<'a> {
    problem: &'a Problem,
    registry: Handlebars<'static>,
}

impl<'a> CodeTemplate<'a> {
    pub fn new(problem: &'a Problem) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_template_string("lib.rs", LIB_RS)?;
        registry.register_template_string("README.md", README_MD)?;
        registry.register_template_string("Cargo.toml", CARGO_TOML)?;
        Ok(Self { problem, registry })
    }

    /// Write the whole practice workspace under `output`.
    pub async fn write_workspace(&self, output: &Path, force: bool) -> Result<Scaffold> {
        let dir = output.join(self.problem.workspace_dir_name());
        if dir.exists() && !force {
            bail!(
                "{} already exists; pass --force to overwrite",
                dir.display()
            );
        }

        let src_dir = dir.join("src");
        tokio::fs::create_dir_all(&src_dir)
            .await
            .with_context(|| format!("failed to create {}", src_dir.display()))?;

        let scaffold = Scaffold {
            lib_rs: src_dir.join("lib.rs"),
            cargo_toml: dir.join("Cargo.toml"),
            readme: dir.join("README.md"),
            test_cases: dir.join("test_cases.json"),
            dir,
        };

        write_file(&scaffold.lib_rs, self.generate_rust_template()?).await?;
        write_file(&scaffold.cargo_toml, self.generate_cargo_toml()?).await?;
        write_file(&scaffold.readme, self.generate_description()?).await?;
        write_file(&scaffold.test_cases, self.generate_test_cases_json()?).await?;

        log::info!("scaffolded {}", scaffold.dir.display());
        Ok(scaffold)
    }

    fn generate_rust_template(&self) -> Result<String> {
        let cases: Vec<_> = self
            .problem
            .test_cases()?
            .iter()
            .enumerate()
            .map(|(i, case)| {
                json!({
                    "number": i + 1,
                    "nums": join(&case.nums),
                    "target": case.target,
                    "expected": join(&case.expected),
                })
            })
            .collect();

        let data = json!({
            "title": self.problem.title,
            "difficulty": self.problem.difficulty.to_string(),
            "url": self.problem.url(),
            "cases": cases,
        });
        Ok(self.registry.render("lib.rs", &data)?)
    }

    fn generate_description(&self) -> Result<String> {
        let examples: Vec<_> = self
            .problem
            .examples
            .iter()
            .enumerate()
            .map(|(i, example)| {
                json!({
                    "number": i + 1,
                    "input": example.input,
                    "output": example.output,
                    "explanation": example.explanation,
                })
            })
            .collect();
        let hints: Vec<_> = self
            .problem
            .hints
            .iter()
            .enumerate()
            .map(|(i, hint)| json!({ "number": i + 1, "text": hint }))
            .collect();

        let data = json!({
            "title": self.problem.title,
            "difficulty": self.problem.difficulty.to_string(),
            "category": self.problem.category,
            "url": self.problem.url(),
            "description": self.problem.description,
            "examples": examples,
            "constraints": self.problem.constraints,
            "hints": hints,
        });
        Ok(self.registry.render("README.md", &data)?)
    }

    fn generate_test_cases_json(&self) -> Result<String> {
        TestCaseFile::from_problem(self.problem)?.to_json()
    }

    fn generate_cargo_toml(&self) -> Result<String> {
        let data = json!({
            "id": self.problem.id,
            "crate_name": self.problem.slug.replace('-', "_"),
        });
        Ok(self.registry.render("Cargo.toml", &data)?)
    }
}

async fn write_file(path: &Path, content: String) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_template_generation() {
        let problem = Problem::two_sum();
        let template = CodeTemplate::new(&problem).unwrap();
        let rust_code = template.generate_rust_template().unwrap();

        assert!(rust_code.contains("// Problem: Two Sum"));
        assert!(rust_code.contains("impl Solution"));
        assert!(rust_code.contains("#[cfg(test)]"));
        assert!(rust_code.contains("fn test_case_3()"));
        assert!(rust_code.contains("let nums = vec![2, 7, 11, 15];"));
        assert!(rust_code.contains("assert_eq!(result, vec![1, 2]);"));
    }

    #[test]
    fn test_description_generation() {
        let problem = Problem::two_sum();
        let template = CodeTemplate::new(&problem).unwrap();
        let readme = template.generate_description().unwrap();

        assert!(readme.starts_with("# Two Sum"));
        assert!(readme.contains("**Difficulty:** Easy"));
        assert!(readme.contains("**Category:** Arrays\n"));
        assert!(readme.contains("### Example 2"));
        assert!(readme.contains("Explanation: Because nums[0] + nums[1] == 9"));
        assert!(readme.contains("* 2 <= nums.length <= 10^4"));
        assert!(readme.contains("3. While iterating"));
        // No HTML escaping in markdown output.
        assert!(readme.contains("target - current number"));
        assert!(!readme.contains("&lt;"));
    }

    #[test]
    fn test_cargo_toml_generation() {
        let problem = Problem::two_sum();
        let template = CodeTemplate::new(&problem).unwrap();
        let cargo = template.generate_cargo_toml().unwrap();
        assert!(cargo.contains("name = \"p1_two_sum\""));
    }

    #[tokio::test]
    async fn test_write_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let problem = Problem::two_sum();
        let template = CodeTemplate::new(&problem).unwrap();

        let scaffold = template
            .write_workspace(temp_dir.path(), false)
            .await
            .unwrap();

        assert_eq!(scaffold.dir, temp_dir.path().join("0001_two_sum"));
        assert!(scaffold.lib_rs.exists());
        assert!(scaffold.cargo_toml.exists());
        assert!(scaffold.readme.exists());

        let cases = TestCaseFile::load(&scaffold.test_cases).await.unwrap();
        assert_eq!(cases.test_cases.len(), 3);
    }

    #[tokio::test]
    async fn test_write_workspace_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let problem = Problem::two_sum();
        let template = CodeTemplate::new(&problem).unwrap();

        template
            .write_workspace(temp_dir.path(), false)
            .await
            .unwrap();
        let err = template
            .write_workspace(temp_dir.path(), false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("--force"));

        assert!(template.write_workspace(temp_dir.path(), true).await.is_ok());
    }
}
