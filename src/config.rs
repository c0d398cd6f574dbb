use std::path::PathBuf;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::checker::MAX_LEN_LIMIT;

const APP_NAME: &str = "two-sum";
const WORKSPACE_ENV: &str = "TWO_SUM_WORKSPACE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub color: bool,
    pub check_rounds: u32,
    pub max_len: usize,
    pub value_bound: i64,
    pub workspace_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            check_rounds: 1000,
            max_len: 64,
            value_bound: 1_000_000_000,
            workspace_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config: Config = confy::load(APP_NAME, None)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, None, self)?;
        Ok(())
    }

    /// Where scaffolded workspaces go: the configured path, then
    /// `TWO_SUM_WORKSPACE`, then the current directory.
    pub fn get_workspace(&self) -> PathBuf {
        self.workspace_path
            .clone()
            .or_else(|| std::env::var_os(WORKSPACE_ENV).map(PathBuf::from))
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    pub fn set_workspace(&mut self, path: PathBuf) {
        self.workspace_path = Some(path);
    }

    /// Update a single setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key.trim() {
            "color" => self.color = parse_bool(value)?,
            "check_rounds" => {
                let rounds: u32 = value.parse()?;
                if rounds == 0 {
                    bail!("check_rounds must be at least 1");
                }
                self.check_rounds = rounds;
            }
            "max_len" => {
                let len: usize = value.parse()?;
                if !(2..=MAX_LEN_LIMIT).contains(&len) {
                    bail!("max_len must be between 2 and {MAX_LEN_LIMIT}");
                }
                self.max_len = len;
            }
            "value_bound" => {
                let bound: i64 = value.parse()?;
                // Two values of this magnitude must still sum without overflow.
                if !(1..=i64::MAX / 2).contains(&bound) {
                    bail!("value_bound must be between 1 and {}", i64::MAX / 2);
                }
                self.value_bound = bound;
            }
            "workspace_path" => {
                if value.is_empty() {
                    self.workspace_path = None;
                } else {
                    self.set_workspace(PathBuf::from(value));
                }
            }
            other => bail!("unknown config key `{other}`"),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => bail!("expected a boolean, got `{other}`"),
    }
}

// Helper function to get config file path
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = confy::get_configuration_file_path(APP_NAME, None)?;
    Ok(config_dir)
}

// Helper function to reset config
pub fn reset_config() -> Result<Config> {
    let config = Config::default();
    config.save()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.color);
        assert_eq!(config.check_rounds, 1000);
        assert_eq!(config.max_len, 64);
        assert_eq!(config.value_bound, 1_000_000_000);
        assert!(config.workspace_path.is_none());
    }

    #[test]
    fn test_get_workspace_with_path() {
        let test_path = PathBuf::from("/test/workspace");
        let config = Config {
            workspace_path: Some(test_path.clone()),
            ..Default::default()
        };
        assert_eq!(config.get_workspace(), test_path);
    }

    #[test]
    #[serial_test::serial]
    fn test_get_workspace_default() {
        let original = env::var_os(WORKSPACE_ENV);
        env::remove_var(WORKSPACE_ENV);

        let config = Config::default();
        let workspace = config.get_workspace();
        // Should return current directory when no workspace is set
        assert!(workspace.exists());

        if let Some(val) = original {
            env::set_var(WORKSPACE_ENV, val);
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_get_workspace_from_env() {
        let original = env::var_os(WORKSPACE_ENV);
        env::set_var(WORKSPACE_ENV, "/from/env");

        let config = Config::default();
        assert_eq!(config.get_workspace(), PathBuf::from("/from/env"));

        match original {
            Some(val) => env::set_var(WORKSPACE_ENV, val),
            None => env::remove_var(WORKSPACE_ENV),
        }
    }

    #[test]
    fn test_set_values() {
        let mut config = Config::default();
        config.set("color", "off").unwrap();
        config.set("check_rounds", "50").unwrap();
        config.set("max_len", "10000").unwrap();
        assert_eq!(config.max_len, 10_000);
        config.set("max_len", "8").unwrap();
        config.set("value_bound", "100").unwrap();
        config.set("workspace_path", "/tmp/practice").unwrap();

        assert!(!config.color);
        assert_eq!(config.check_rounds, 50);
        assert_eq!(config.max_len, 8);
        assert_eq!(config.value_bound, 100);
        assert_eq!(config.workspace_path, Some(PathBuf::from("/tmp/practice")));

        config.set("workspace_path", "").unwrap();
        assert!(config.workspace_path.is_none());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("color", "maybe").is_err());
        assert!(config.set("check_rounds", "0").is_err());
        assert!(config.set("max_len", "1").is_err());
        assert!(config.set("max_len", &usize::MAX.to_string()).is_err());
        assert!(config.set("max_len", "10001").is_err());
        assert!(config.set("value_bound", "-5").is_err());
        assert!(config.set("editor", "vim").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            color: false,
            check_rounds: 10,
            max_len: 16,
            value_bound: 500,
            workspace_path: Some(PathBuf::from("/workspace")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, config);
    }
}
