//! Structured results of a validation run
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

use crate::resolver::ServicePath;
use crate::runner::checks::CheckReport;
use crate::validation::{Diagnostic, ValidationOutcome};
use serde::Serialize;
use std::path::PathBuf;

/// Report marker for a file whose content could not be read
pub const READ_FAILED: &str = "READ FAILED";

/// What happened to one discovered file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum FileOutcome {
    Validated { outcome: ValidationOutcome },
    Unreadable { message: String },
}

/// Result for one discovered file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub schema_name: String,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        matches!(&self.outcome, FileOutcome::Validated { outcome } if outcome.is_valid())
    }

    pub fn marker(&self) -> &'static str {
        match &self.outcome {
            FileOutcome::Validated { outcome } => outcome.marker(),
            FileOutcome::Unreadable { .. } => READ_FAILED,
        }
    }

    /// Diagnostics of an invalid file; empty otherwise
    pub fn details(&self) -> &[Diagnostic] {
        match &self.outcome {
            FileOutcome::Validated { outcome } => outcome.details(),
            FileOutcome::Unreadable { .. } => &[],
        }
    }

    /// Single-line explanation for outcomes that carry one
    pub fn message(&self) -> Option<&str> {
        match &self.outcome {
            FileOutcome::Validated {
                outcome: ValidationOutcome::ParseError { message },
            }
            | FileOutcome::Unreadable { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Result of validating one service directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub service_path: ServicePath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_error: Option<String>,
    pub files: Vec<FileReport>,
    pub checks: Vec<CheckReport>,
}

impl RunReport {
    /// Report for a run that stopped at path resolution
    pub fn unresolved(service_path: ServicePath) -> Self {
        Self {
            service_path,
            discovery_error: None,
            files: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Overall result: resolved, discovered, every file valid, every check passed
    pub fn passed(&self) -> bool {
        self.service_path.is_resolved()
            && self.discovery_error.is_none()
            && self.files.iter().all(FileReport::passed)
            && self.checks.iter().all(CheckReport::passed)
    }

    /// Number of failing files and checks
    pub fn failures(&self) -> usize {
        self.files.iter().filter(|file| !file.passed()).count()
            + self.checks.iter().filter(|check| !check.passed()).count()
    }
}
