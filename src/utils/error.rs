// Error handling utilities
// Author: Gabriel Demetrios Lafis

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for AppError
pub type AppResult<T> = Result<T, AppError>;
