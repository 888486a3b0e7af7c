use super::{
    ConfigError, DatabaseConfig, LoggingConfig, RemoteConfig, SchedulerConfig, ServerConfig,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub scheduler: SchedulerConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads the config file (if given and present) and applies CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if Path::new(p).exists() => Self::from_file(p)?,
            _ => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_string(),
            ));
        }

        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.path cannot be empty".to_string(),
            ));
        }

        let s = &self.scheduler;
        for (name, value) in [
            ("randomize_interval_secs", s.randomize_interval_secs),
            ("schedule_check_interval_secs", s.schedule_check_interval_secs),
            ("idle_threshold_secs", s.idle_threshold_secs),
            ("presence_poll_interval_secs", s.presence_poll_interval_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::Validation(format!(
                    "scheduler.{name} must be greater than 0"
                )));
            }
        }

        if self.remote.is_enabled() {
            let url = self.remote.url.trim();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(
                    "remote.url must start with http:// or https://".to_string(),
                ));
            }
            if self.remote.timeout_secs == 0 {
                return Err(ConfigError::Validation(
                    "remote.timeout_secs must be greater than 0".to_string(),
                ));
            }
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {:?}",
                self.logging.level, VALID_LOG_LEVELS
            )));
        }

        Ok(())
    }
}
