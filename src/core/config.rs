//! Configuration and data-directory resolution.
//!
//! Precedence, highest first: CLI flag, environment variable, `config.json`
//! in the data directory, built-in default.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::engine::DEFAULT_TRADE_THRESHOLD;
use crate::error::{FantasyError, Result};
use crate::{DATA_DIR_ENV_VAR, PROVIDER_URL_ENV_VAR, TRADE_THRESHOLD_ENV_VAR};

pub const CONFIG_FILE: &str = "config.json";
pub const LEAGUE_FILE: &str = "league.json";
pub const PLAYERS_FILE: &str = "players.json";
pub const PROJECTIONS_FILE: &str = "projections.json";

/// Default lifetime of cached provider responses.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Settings read from `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_threshold: Option<f64>,
}

impl AppConfig {
    /// Load `config.json` from `dir`. A missing file is an empty config; an
    /// unreadable or malformed one is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        match fs::read_to_string(dir.join(CONFIG_FILE)) {
            Ok(s) => Ok(serde_json::from_str(&s)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs.unwrap_or(DEFAULT_CACHE_TTL_SECS)
    }
}

/// Path: ~/.config/fhockey
pub fn default_data_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("fhockey")
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the data directory: flag, then `FHOCKEY_DATA_DIR`, then the default.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| env_value(DATA_DIR_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(default_data_dir)
}

/// Resolve the HTTP provider URL. `None` means read local fixtures.
pub fn resolve_provider_url(flag: Option<String>, config: &AppConfig) -> Option<String> {
    flag.or_else(|| env_value(PROVIDER_URL_ENV_VAR))
        .or_else(|| config.provider_url.clone())
}

/// Resolve the trade verdict threshold.
pub fn resolve_trade_threshold(flag: Option<f64>, config: &AppConfig) -> Result<f64> {
    if let Some(threshold) = flag {
        return Ok(threshold);
    }
    if let Some(raw) = env_value(TRADE_THRESHOLD_ENV_VAR) {
        return raw.parse::<f64>().map_err(|_| {
            FantasyError::validation(format!(
                "{} must be a number, got '{}'",
                TRADE_THRESHOLD_ENV_VAR, raw
            ))
        });
    }
    Ok(config.trade_threshold.unwrap_or(DEFAULT_TRADE_THRESHOLD))
}
