use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_DIR_NAME: &str = ".finance_tracker";
const CONFIG_FILE: &str = "config.json";

/// Ledger file used when nothing else is configured, relative to the working directory.
pub const DEFAULT_LEDGER_FILE: &str = "transactions.csv";
/// Overrides the directory holding `config.json`.
pub const HOME_ENV: &str = "FINANCE_TRACKER_HOME";
/// Overrides the ledger file path from the configuration.
pub const LEDGER_ENV: &str = "FINANCE_TRACKER_LEDGER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration parse error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ledger_file: Option<PathBuf>,
    pub plain_output: bool,
}

impl Config {
    /// Picks the ledger file: `explicit`, then `FINANCE_TRACKER_LEDGER`, then the config, then the default.
    pub fn resolve_ledger_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        self.resolve_with(explicit, env::var_os(LEDGER_ENV))
    }

    fn resolve_with(&self, explicit: Option<PathBuf>, from_env: Option<OsString>) -> PathBuf {
        explicit
            .or_else(|| from_env.filter(|value| !value.is_empty()).map(PathBuf::from))
            .or_else(|| self.ledger_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILE))
    }
}

/// Returns the configuration directory, defaulting to `~/.finance_tracker`.
pub fn base_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    /// Reads the configuration, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
