use std::fmt;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_model: Option<String>,
    pub languages: Option<Vec<String>>,
    pub preview_chars: Option<usize>,
}

impl Config {
    /// Load config from ~/.config/ytweet/config.toml if it exists
    pub fn load() -> Result<Self, ConfigurationError> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|source| ConfigurationError::Read {
                path: path.display().to_string(),
                source,
            })?;
            toml::from_str(&content).map_err(|source| ConfigurationError::Parse {
                path: path.display().to_string(),
                source,
            })
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytweet")
        .join("config.toml")
}

/// OpenAI credential, captured once at the start of a run
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_value(std::env::var(API_KEY_VAR).ok())
    }

    pub fn from_value(value: Option<String>) -> Result<Self, ConfigurationError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(ApiKey(v.trim().to_string())),
            _ => Err(ConfigurationError::MissingCredential(API_KEY_VAR)),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}
