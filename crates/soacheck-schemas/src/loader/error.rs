//! Error types for schema and document loading
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for schema store operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// A schema resource that exists but cannot be used.
///
/// These indicate a broken installation, not bad user input, and are the
/// only failures allowed to escape the validator.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema resource is not valid JSON
    #[error("Schema '{name}' from '{origin}' is not valid JSON: {source}")]
    InvalidJson {
        name: String,
        origin: String,
        source: serde_json::Error,
    },

    /// The schema parsed but is not a usable JSON schema
    #[error("Schema '{name}' from '{origin}' could not be compiled: {reason}")]
    Compile {
        name: String,
        origin: String,
        reason: String,
    },

    /// The schema file exists but could not be read
    #[error("Failed to read schema '{name}' from '{}': {source}", path.display())]
    Io {
        name: String,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Create an invalid JSON error
    pub fn invalid_json(name: &str, origin: &str, error: serde_json::Error) -> Self {
        Self::InvalidJson {
            name: name.to_string(),
            origin: origin.to_string(),
            source: error,
        }
    }

    /// Create a compilation error
    pub fn compile(name: &str, origin: &str, reason: impl Into<String>) -> Self {
        Self::Compile {
            name: name.to_string(),
            origin: origin.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io_error(name: &str, path: PathBuf, error: std::io::Error) -> Self {
        Self::Io {
            name: name.to_string(),
            path,
            source: error,
        }
    }

    /// Name of the schema this error is about
    pub fn schema_name(&self) -> &str {
        match self {
            Self::InvalidJson { name, .. } | Self::Compile { name, .. } | Self::Io { name, .. } => {
                name
            }
        }
    }
}

/// Failure to decode a configuration document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// YAML parsing errors
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing errors
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML decoded but has no JSON equivalent (e.g. a mapping used as a key)
    #[error("document cannot be represented as JSON: {0}")]
    Conversion(serde_json::Error),
}
