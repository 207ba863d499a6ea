//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more files or checks failed; the report has already been written
    #[error("Validation failed: {failures} problem(s) found")]
    ValidationFailed { failures: usize },

    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A schema resource is broken
    #[error("Schema error: {0}")]
    Schema(#[from] soacheck_schemas::SchemaError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Schema name not recognized
    #[error("Unknown schema '{}'. Known schemas: {}", name, known.join(", "))]
    UnknownSchema { name: String, known: Vec<String> },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationFailed { .. } => 1,
            Self::Io(_) => 2,
            Self::Schema(_) => 3,
            Self::Config(_) => 4,
            Self::UnknownSchema { .. } => 5,
            Self::Json(_) => 6,
            Self::Yaml(_) => 7,
            Self::Other { .. } => 99,
        }
    }

    /// Whether the failure was already reported through the output writer
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
