//! Configuration file
//!
//! JSON object; every key is optional:
//!
//! ```json
//! {"neo_path": "data/neos.csv", "cad_path": "data/cad.json",
//!  "default_limit": 10, "log_level": "info"}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// NEO CSV file (optional, default "data/neos.csv")
    #[serde(default = "default_neo_path")]
    pub neo_path: PathBuf,

    /// Close-approach JSON file (optional, default "data/cad.json")
    #[serde(default = "default_cad_path")]
    pub cad_path: PathBuf,

    /// Result cap for stdout queries without --limit (default 10, null = unbounded)
    #[serde(default = "default_limit")]
    pub default_limit: Option<usize>,

    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_neo_path() -> PathBuf {
    PathBuf::from("data/neos.csv")
}
fn default_cad_path() -> PathBuf {
    PathBuf::from("data/cad.json")
}
fn default_limit() -> Option<usize> {
    Some(10)
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neo_path: default_neo_path(),
            cad_path: default_cad_path(),
            default_limit: default_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.neo_path.as_os_str().is_empty() {
            return Err(CliError::config_error("neo_path must not be empty"));
        }
        if self.cad_path.as_os_str().is_empty() {
            return Err(CliError::config_error("cad_path must not be empty"));
        }
        self.severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(CliError::config_error)
    }

    /// Applies command-line path overrides
    pub fn with_overrides(mut self, neo_path: Option<PathBuf>, cad_path: Option<PathBuf>) -> Self {
        if let Some(path) = neo_path {
            self.neo_path = path;
        }
        if let Some(path) = cad_path {
            self.cad_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("neodb.json");
        fs::write(&config_path, "{}").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_limit, Some(10));
        assert_eq!(config.severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_config_null_limit_is_unbounded() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("neodb.json");
        fs::write(&config_path, json!({"default_limit": null}).to_string()).unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.default_limit, None);
    }

    #[test]
    fn test_config_validates_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("neodb.json");
        fs::write(&config_path, json!({"log_level": "loud"}).to_string()).unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_config_rejects_empty_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("neodb.json");
        fs::write(&config_path, json!({"neo_path": ""}).to_string()).unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(PathBuf::from("other.csv")), None);
        assert_eq!(config.neo_path, PathBuf::from("other.csv"));
        assert_eq!(config.cad_path, PathBuf::from("data/cad.json"));
    }
}
