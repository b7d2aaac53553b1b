pub mod loader;

use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::constants::default_constants::{CONFIG_RELATIVE_PATH, LOG_LEVEL};
use crate::constants::env_variables::CONFIG_PATH_ENV;
use crate::exec::DispatchConfig;
use crate::util::fs_util::get_home_dir;

#[derive(Debug, Serialize, Deserialize, Default, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct AboxConfig {
    #[serde(default = "DispatchConfig::default")]
    pub dispatch: DispatchConfig,
    #[serde(default = "LogConfig::default")]
    pub log: LogConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: LOG_LEVEL.into() }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.level.trim()).unwrap_or(LevelFilter::Warn)
    }
}

/// `$ABOX_CONFIG_PATH`, or `~/.config/abox/config.toml`.
pub fn default_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => get_home_dir().join(CONFIG_RELATIVE_PATH),
    }
}
