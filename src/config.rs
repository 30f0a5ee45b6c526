//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honored for local development.

use crate::services::export::ExportScope;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Directory holding the JSON storage files
    pub data_dir: PathBuf,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Simulated latency of a cloud backup
    pub backup_delay: Duration,
    /// Simulated latency of a cloud restore
    pub restore_delay: Duration,
    /// Endpoint asked to acknowledge backups (optional)
    pub ack_url: Option<String>,
    /// Activities covered by an export when the request does not say
    pub export_scope: ExportScope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: PathBuf::from("data"),
            frontend_url: "http://localhost:5173".to_string(),
            backup_delay: Duration::from_millis(800),
            restore_delay: Duration::from_millis(1200),
            ack_url: None,
            export_scope: ExportScope::Full,
        }
    }
}

impl Config {
    /// Config for tests: no simulated latency, no acknowledgements.
    pub fn test_default() -> Self {
        Self {
            backup_delay: Duration::ZERO,
            restore_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `get`, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            port: parse_or(&mut get, "PORT", defaults.port)?,
            data_dir: get("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            frontend_url: get("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            backup_delay: Duration::from_millis(parse_or(
                &mut get,
                "BACKUP_DELAY_MS",
                defaults.backup_delay.as_millis() as u64,
            )?),
            restore_delay: Duration::from_millis(parse_or(
                &mut get,
                "RESTORE_DELAY_MS",
                defaults.restore_delay.as_millis() as u64,
            )?),
            ack_url: get("ACK_URL")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            export_scope: parse_or(&mut get, "EXPORT_SCOPE", defaults.export_scope)?,
        })
    }
}

fn parse_or<F, T>(get: &mut F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: FnMut(&str) -> Option<String>,
    T: FromStr,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(key, raw)),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
