use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub api_url: String,
    pub api_timeout: Duration,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String> {
        Ok(Self {
            bind_addr: try_load(&lookup, "HOS_BIND_ADDR", "0.0.0.0")?,
            port: try_load(&lookup, "HOS_PORT", "8080")?,
            api_url: try_load(&lookup, "HOS_API_URL", DEFAULT_API_URL)?,
            api_timeout: Duration::from_secs(try_load(&lookup, "HOS_API_TIMEOUT_SECS", "15")?),
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::Invalid { key, message: e.to_string() }
        })
}
