// src/config.rs
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let port = match get("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            model: get("MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
