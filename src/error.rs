//! Error types for iqprov

use thiserror::Error;

/// Result type alias for iqprov operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Creating the application was refused and moving the existing one failed too.
    #[error("Failed to relocate application after create was refused ({create}): {relocate}")]
    Relocation {
        create: ApiError,
        relocate: Box<Error>,
    },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the username and password (--u / --p).")]
    Unauthorized,

    #[error("Access denied. The user lacks permission for this operation.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Whether the server refused a create because the resource already exists.
    ///
    /// IQ Server answers a duplicate application public id with 400; a plain
    /// 409 is accepted as well.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_) | ApiError::BadRequest(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to IQ Server".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("{}", format_missing(.0))]
    MissingArguments(Vec<String>),
}

fn format_missing(flags: &[String]) -> String {
    flags
        .iter()
        .map(|flag| format!("Missing argument: {}", flag))
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
