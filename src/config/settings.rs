use std::env;
use std::fmt::Display;
use std::str::FromStr;

use reqwest::Url;
use thiserror::Error;

use crate::domain::Locale;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub app: AppConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the analytics backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub locale: Locale,
    /// Map upstream failures onto their own status instead of a flat 500.
    pub propagate_upstream_status: bool,
    pub max_body_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup, applying defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("BACKEND_BASE_URL")
            .unwrap_or_else(|| "http://localhost:8000/api".to_string());
        Url::parse(&base_url).map_err(|e| SettingsError::Invalid {
            key: "BACKEND_BASE_URL",
            message: format!("{}: {}", base_url, e),
        })?;

        let locale = match lookup("APP_LOCALE") {
            Some(raw) => Locale::parse(raw.trim()).ok_or_else(|| SettingsError::Invalid {
                key: "APP_LOCALE",
                message: format!("unsupported locale '{}'", raw),
            })?,
            None => Locale::default(),
        };

        Ok(Settings {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&lookup, "SERVER_PORT", 3000)?,
            },
            backend: BackendConfig {
                base_url,
                timeout_secs: parse_or(&lookup, "BACKEND_TIMEOUT_SECS", 30)?,
                connect_timeout_secs: parse_or(&lookup, "BACKEND_CONNECT_TIMEOUT_SECS", 5)?,
                user_agent: lookup("BACKEND_USER_AGENT").unwrap_or_else(|| {
                    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                }),
            },
            app: AppConfig {
                locale,
                propagate_upstream_status: match lookup("PROPAGATE_UPSTREAM_STATUS") {
                    Some(raw) => parse_flag("PROPAGATE_UPSTREAM_STATUS", &raw)?,
                    None => false,
                },
                max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", 1024 * 1024)?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| SettingsError::Invalid {
            key,
            message: format!("{}", e),
        }),
        None => Ok(default),
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, SettingsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(SettingsError::Invalid {
            key,
            message: format!("expected a boolean, got '{}'", other),
        }),
    }
}
