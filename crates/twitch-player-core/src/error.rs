//! Error types for the Twitch player bindings

use thiserror::Error;

/// Result type alias for parsing and encoding helpers
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding embed parameters or player payloads.
///
/// Constructing options never fails; only the helpers that read text
/// supplied by a caller or by the embed widget return these.
#[derive(Error, Debug)]
pub enum Error {
    // Event errors
    #[error("Unknown player event: {0}")]
    UnknownEvent(String),

    // Option errors
    #[error("Invalid start time: {0}")]
    InvalidStartTime(String),

    #[error("Missing embed parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for embed parameter {key}: {value}")]
    InvalidParameter { key: String, value: String },

    // Encoding errors
    #[error("Invalid embed URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid parameter error
    pub fn invalid_parameter(key: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidParameter {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the error code for logs and JS callers
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::UnknownEvent(_) => "UNKNOWN_EVENT",
            Error::InvalidStartTime(_) => "INVALID_START_TIME",
            Error::MissingParameter(_) => "MISSING_PARAMETER",
            Error::InvalidParameter { .. } => "INVALID_PARAMETER",
            Error::Url(_) => "INVALID_URL",
            Error::Json(_) => "INVALID_JSON",
        }
    }
}
