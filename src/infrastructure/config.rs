//! Configuration management

use crate::domain::ScriptDialect;
use crate::error::{BackfillError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "backfill.toml";

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV_VAR: &str = "BACKFILL_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default owner handle, used when --user is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Base URL of the contribution calendar host
    pub base_url: String,
    /// SSH-style prefix for the pushed remote
    pub remote_host: String,
    pub dialect: ScriptDialect,
    /// Path the generated script is written to
    pub output: String,
    pub commit_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            username: None,
            base_url: "https://github.com/".to_string(),
            remote_host: "git@github.com".to_string(),
            dialect: ScriptDialect::default(),
            output: "backfill.sh".to_string(),
            commit_message: "backfill".to_string(),
        }
    }
}

impl Config {
    /// Load config from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(BackfillError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            BackfillError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| BackfillError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;

        Ok(())
    }
}

/// Location of the config file: explicit path, then BACKFILL_CONFIG, then
/// `backfill.toml` in the current directory
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: PathBuf) -> Self {
        ConfigFile { path }
    }

    pub fn discover(explicit: Option<PathBuf>) -> Self {
        let path = explicit
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        ConfigFile::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        Config::load_from(&self.path)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.save_to(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.username, None);
        assert_eq!(config.base_url, "https://github.com/");
        assert_eq!(config.remote_host, "git@github.com");
        assert_eq!(config.dialect, ScriptDialect::Bash);
        assert_eq!(config.output, "backfill.sh");
    }

    #[test]
    fn test_load_missing_config_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("backfill.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("backfill.toml");
        let config = Config {
            username: Some("octocat".to_string()),
            dialect: ScriptDialect::Sh,
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("backfill.toml");
        fs::write(&path, "dialect = \"sh\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.dialect, ScriptDialect::Sh);
        assert_eq!(loaded.remote_host, "git@github.com");
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("backfill.toml");
        fs::write(&path, "dialect = \"fish\"\n").unwrap();

        match Config::load_from(&path).unwrap_err() {
            BackfillError::Config(msg) => {
                assert!(msg.contains("Failed to parse"));
                assert!(msg.contains("backfill.toml"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unset_username_not_serialized() {
        let contents = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!contents.contains("username"));
        assert!(contents.contains("dialect = \"bash\""));
    }

    #[test]
    fn test_config_file_explicit_path_wins() {
        let file = ConfigFile::discover(Some(PathBuf::from("/tmp/custom.toml")));
        assert_eq!(file.path(), Path::new("/tmp/custom.toml"));
    }
}
