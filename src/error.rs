//! Domain-specific error types for steady-mind

use thiserror::Error;

/// Main error type for the steady-mind analysis core
#[derive(Error, Debug)]
pub enum SteadyMindError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Lexicon error: {message}")]
    Lexicon { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for SteadyMindError {
    fn from(err: anyhow::Error) -> Self {
        SteadyMindError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SteadyMindError {
    fn from(err: serde_json::Error) -> Self {
        SteadyMindError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SteadyMindError {
    fn from(err: toml::de::Error) -> Self {
        SteadyMindError::Config {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for SteadyMindError {
    fn from(err: std::io::Error) -> Self {
        SteadyMindError::Lexicon {
            message: format!("I/O error: {}", err),
        }
    }
}

/// Result type alias for steady-mind operations
pub type Result<T> = std::result::Result<T, SteadyMindError>;
