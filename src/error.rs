//! Error types and handling for the `SkyCast` service

use thiserror::Error;

/// Main error type for the `SkyCast` library
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Provider payload is missing a required field or has the wrong shape
    #[error("Malformed provider response: {message}")]
    MalformedResponse { message: String },

    /// Provider does not know the requested city
    #[error("Weather data not found for \"{query}\"")]
    NotFound { query: String },

    /// Transport failures and unexpected provider statuses
    #[error("API error: {message}")]
    Api { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SkycastError {
    /// Create a new malformed-response error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new not-found error for a city query
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::MalformedResponse { .. } => {
                "The weather service returned unexpected data. Please try again.".to_string()
            }
            SkycastError::NotFound { query } => {
                format!("Weather data not found for \"{query}\". Please try another city.")
            }
            SkycastError::Api { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            SkycastError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            SkycastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            SkycastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for SkycastError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}
