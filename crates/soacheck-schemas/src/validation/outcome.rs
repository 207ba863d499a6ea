//! Validation outcome and diagnostic types
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker reported for a file that passed validation
pub const SCHEMA_VALID: &str = "SCHEMA VALID";
/// Marker reported for a file with structural or schema violations
pub const SCHEMA_INVALID: &str = "SCHEMA INVALID";
/// Marker reported when no schema exists for the requested name
pub const SCHEMA_NOT_FOUND: &str = "SCHEMA NOT FOUND";
/// Marker reported for content that is neither valid YAML nor JSON
pub const PARSE_ERROR: &str = "PARSE ERROR";

/// Which stage of validation produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Shape rule independent of any schema (e.g. non-mapping instance block)
    Structural,
    /// Breach of a schema rule
    Schema,
}

/// A single problem found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Location in the document, e.g. `main_http.cpus`
    pub path: String,
    /// Human-readable description
    pub message: String,
    /// Stage that produced this diagnostic
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Create a structural diagnostic
    pub fn structural<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
            kind: DiagnosticKind::Structural,
        }
    }

    /// Create a schema diagnostic
    pub fn schema<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
            kind: DiagnosticKind::Schema,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Classified result of validating one document against one schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// No violations
    Valid,
    /// One or more violations, structural ones first
    Invalid { details: Vec<Diagnostic> },
    /// The schema name is not recognized or has no resource
    SchemaNotFound,
    /// The content could not be decoded
    ParseError { message: String },
}

impl ValidationOutcome {
    /// `Valid` when there are no diagnostics, `Invalid` otherwise
    pub fn from_diagnostics(details: Vec<Diagnostic>) -> Self {
        if details.is_empty() {
            Self::Valid
        } else {
            Self::Invalid { details }
        }
    }

    /// Whether the document passed
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The fixed report marker for this outcome
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Valid => SCHEMA_VALID,
            Self::Invalid { .. } => SCHEMA_INVALID,
            Self::SchemaNotFound => SCHEMA_NOT_FOUND,
            Self::ParseError { .. } => PARSE_ERROR,
        }
    }

    /// Diagnostics of an `Invalid` outcome; empty for every other outcome
    pub fn details(&self) -> &[Diagnostic] {
        match self {
            Self::Invalid { details } => details,
            _ => &[],
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { details } => {
                write!(f, "{} ({} violation(s))", SCHEMA_INVALID, details.len())
            }
            Self::ParseError { message } => write!(f, "{}: {}", PARSE_ERROR, message),
            other => f.write_str(other.marker()),
        }
    }
}
