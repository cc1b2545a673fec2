//! Configuration management for iqprov

use log::debug;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::models::OWNER_ROLE_ID;
use crate::error::{ConfigError, Result};

/// Server URL used when neither flag, environment nor config file names one
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8070";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration file contents. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// IQ Server base URL
    pub server_url: Option<String>,

    /// Username for Basic auth
    pub username: Option<String>,

    /// Password for Basic auth
    pub password: Option<String>,

    /// Skip TLS certificate validation
    pub insecure: Option<bool>,

    /// Role granted to the member; defaults to the built-in owner role
    pub owner_role_id: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Resolved connection settings for one run
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub url: String,
    pub username: String,
    pub password: String,
    pub insecure: bool,
    pub timeout: Duration,
}

impl Config {
    /// Get the default config file path, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".iqprov").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing file at the default location yields an empty config; a
    /// missing file that was asked for by name is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => Self::load_optional(Self::default_path()),
        }
    }

    /// Load the file at `path` when there is one; otherwise an empty config
    fn load_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            Some(path) => {
                debug!("No config file at {}", path.display());
                Ok(Self::default())
            }
            None => {
                debug!("No home directory; skipping the default config file");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            let reason = "timeout_secs must be greater than zero".to_string();
            return Err(ConfigError::Invalid(reason).into());
        }
        if let Some(role) = &self.owner_role_id
            && role.trim().is_empty()
        {
            let reason = "owner_role_id must not be empty".to_string();
            return Err(ConfigError::Invalid(reason).into());
        }
        Ok(())
    }

    /// Role ID to grant, falling back to the built-in owner role
    pub fn owner_role_id(&self) -> &str {
        self.owner_role_id.as_deref().unwrap_or(OWNER_ROLE_ID)
    }

    /// Request timeout, falling back to the default
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
