use crate::errors::{AppError, AppResult};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub redmine_base_address: String,
    pub api_key: String,
    pub time_zone: String,
    /// Time entry activity; Redmine falls back to its default activity when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<u32>,
}

impl Config {
    /// `config.yaml` next to the running executable
    pub fn default_path() -> PathBuf {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Reject values that can never produce a working client.
    pub fn check(&self) -> AppResult<()> {
        if self.redmine_base_address.trim().is_empty() {
            return Err(AppError::Config(
                "'redmine-base-address' must not be empty".to_string(),
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err(AppError::Config("'api-key' must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn time_zone(&self) -> AppResult<Tz> {
        self.time_zone
            .trim()
            .parse::<Tz>()
            .map_err(|_| AppError::Config(format!("unknown time zone '{}'", self.time_zone)))
    }
}
