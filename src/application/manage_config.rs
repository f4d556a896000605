//! Config management use case

use crate::domain::script::{validate_commit_message, validate_name, validate_remote_host};
use crate::domain::ScriptDialect;
use crate::error::{BackfillError, Result};
use crate::infrastructure::{Config, ConfigFile};
use std::str::FromStr;

/// Keys accepted by `get` and `set`
pub const CONFIG_KEYS: [&str; 6] = [
    "username",
    "base_url",
    "remote_host",
    "dialect",
    "output",
    "commit_message",
];

/// Service for managing backfill configuration
pub struct ConfigService {
    file: ConfigFile,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(file: ConfigFile) -> Self {
        ConfigService { file }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.file.load()?;

        match key {
            "username" => Ok(config.username.unwrap_or_default()),
            "base_url" => Ok(config.base_url),
            "remote_host" => Ok(config.remote_host),
            "dialect" => Ok(config.dialect.to_string()),
            "output" => Ok(config.output),
            "commit_message" => Ok(config.commit_message),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.file.load()?;

        if value.trim().is_empty() && key != "username" {
            return Err(BackfillError::Config(format!(
                "Value for '{}' must not be empty",
                key
            )));
        }

        match key {
            "username" => {
                let value = value.trim();
                if !value.is_empty() {
                    validate_name("username", value)?;
                }
                config.username = Some(value.to_string()).filter(|v| !v.is_empty());
            }
            "base_url" => config.base_url = value.to_string(),
            "remote_host" => {
                validate_remote_host(value)?;
                config.remote_host = value.to_string();
            }
            "dialect" => {
                config.dialect = ScriptDialect::from_str(value).map_err(BackfillError::Config)?;
            }
            "output" => config.output = value.to_string(),
            "commit_message" => {
                validate_commit_message(value)?;
                config.commit_message = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        self.file.save(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.file.load()
    }
}

fn unknown_key(key: &str) -> BackfillError {
    BackfillError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
