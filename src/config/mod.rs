use crate::errors::{AppError, AppResult};
use crate::models::work_window::{
    DEFAULT_LUNCH_END_HOUR, DEFAULT_LUNCH_START_HOUR, DEFAULT_WORK_END_HOUR,
    DEFAULT_WORK_START_HOUR, WorkWindow,
};
use crate::utils::date::parse_date;
use crate::utils::timezone::TimezonePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Keys written by `init`; used by `config --check` to spot missing ones.
pub const CONFIG_KEYS: &[&str] = &[
    "api_base_url",
    "timeout_secs",
    "timezone",
    "work_start_hour",
    "work_end_hour",
    "lunch_start_hour",
    "lunch_end_hour",
    "deduct_lunch",
    "holidays",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub timezone: TimezonePolicy,
    #[serde(default = "default_work_start")]
    pub work_start_hour: u32,
    #[serde(default = "default_work_end")]
    pub work_end_hour: u32,
    #[serde(default = "default_lunch_start")]
    pub lunch_start_hour: u32,
    #[serde(default = "default_lunch_end")]
    pub lunch_end_hour: u32,
    #[serde(default)]
    pub deduct_lunch: bool,
    #[serde(default)]
    pub holidays: Vec<String>,
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_work_start() -> u32 {
    DEFAULT_WORK_START_HOUR
}
fn default_work_end() -> u32 {
    DEFAULT_WORK_END_HOUR
}
fn default_lunch_start() -> u32 {
    DEFAULT_LUNCH_START_HOUR
}
fn default_lunch_end() -> u32 {
    DEFAULT_LUNCH_END_HOUR
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            timezone: TimezonePolicy::default(),
            work_start_hour: default_work_start(),
            work_end_hour: default_work_end(),
            lunch_start_hour: default_lunch_start(),
            lunch_end_hour: default_lunch_end(),
            deduct_lunch: false,
            holidays: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rworkhours`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworkhours")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkhours.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let cfg = Self::load_unchecked(path)?;
        cfg.validate()?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Parse the file at `path` without `validate()`, so `config` can still
    /// print, check and edit a file holding bad values.
    pub fn load_unchecked(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.window().is_valid() {
            return Err(AppError::Config(format!(
                "invalid working window {}-{} / lunch {}-{}",
                self.work_start_hour, self.work_end_hour, self.lunch_start_hour, self.lunch_end_hour
            )));
        }

        if let Some(bad) = self.holidays.iter().find(|h| parse_date(h).is_none()) {
            return Err(AppError::Config(format!(
                "invalid holiday '{}' (expected YYYY-MM-DD)",
                bad
            )));
        }

        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("api_base_url is empty".into()));
        }

        Ok(())
    }

    pub fn window(&self) -> WorkWindow {
        WorkWindow {
            work_start_hour: self.work_start_hour,
            work_end_hour: self.work_end_hour,
            lunch_start_hour: self.lunch_start_hour,
            lunch_end_hour: self.lunch_end_hour,
            deduct_lunch: self.deduct_lunch,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Keys of `CONFIG_KEYS` absent from a YAML document.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let Some(map) = value.as_mapping() else {
            return Ok(CONFIG_KEYS.to_vec());
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }
}
