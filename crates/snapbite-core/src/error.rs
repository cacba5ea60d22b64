//! Error types for the snapbite meal analysis pipeline.
//!
//! Errors are organized by stage. Caller-misuse errors (unreadable image,
//! unknown goal label) propagate out of the pipeline; inference errors are
//! consumed by the fail-soft contract of the extraction and suggestion
//! clients and never cross the pipeline boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for snapbite operations.
#[derive(Error, Debug)]
pub enum SnapbiteError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Meal analysis errors
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while analyzing a meal photo.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The image source is missing or unreadable
    #[error("Failed to read image {path}: {message}")]
    Image { path: PathBuf, message: String },

    /// The goal label is not one of cut, maintain, bulk
    #[error("Unknown goal '{0}' (expected cut, maintain or bulk)")]
    UnknownGoal(String),

    /// The inference service could not be reached (network, auth, timeout)
    #[error("Inference transport error: {message}")]
    Transport {
        message: String,
        status_code: Option<u16>,
    },

    /// The inference call succeeded but the response does not conform
    /// to the requested schema
    #[error("Inference response did not match the expected schema: {message}")]
    Schema { message: String },
}

/// Convenience type alias for snapbite results.
pub type Result<T> = std::result::Result<T, SnapbiteError>;

/// Convenience type alias for analysis-stage results.
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
