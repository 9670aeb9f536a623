use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;
pub const DEFAULT_DB_PATH: &str = "scorecard.db";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const ENV_DB: &str = "SCORECARD_DB";
pub const ENV_LOG: &str = "SCORECARD_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorecardConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_version() -> u32 {
    SUPPORTED_CONFIG_VERSION
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            db_path: default_db_path(),
            log_level: default_log_level(),
        }
    }
}

impl ScorecardConfig {
    /// Defaults, then the optional YAML file, then the environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg = match path {
            Some(p) => load_config(p)?,
            None => Self::default(),
        };
        cfg.apply_env();
        Ok(cfg)
    }

    pub fn apply_env(&mut self) {
        self.apply_env_with(|k| std::env::var(k).ok());
    }

    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_DB).filter(|v| !v.trim().is_empty()) {
            self.db_path = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_level = v;
        }
    }
}

pub fn load_config(path: &Path) -> Result<ScorecardConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;
    parse_config(&raw)
}

pub fn parse_config(raw: &str) -> Result<ScorecardConfig, ConfigError> {
    let cfg: ScorecardConfig = serde_yaml::from_str(raw)
        .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;
    if cfg.version != SUPPORTED_CONFIG_VERSION {
        return Err(ConfigError(format!(
            "unsupported config version {} (supported: {})",
            cfg.version, SUPPORTED_CONFIG_VERSION
        )));
    }
    Ok(cfg)
}
