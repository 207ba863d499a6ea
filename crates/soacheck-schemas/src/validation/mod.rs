//! Validation of multi-instance service configuration documents
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

pub mod outcome;
pub mod path;
pub mod validator;

pub use outcome::{
    Diagnostic, DiagnosticKind, ValidationOutcome, PARSE_ERROR, SCHEMA_INVALID, SCHEMA_NOT_FOUND,
    SCHEMA_VALID,
};
pub use path::{key_location, location_from_pointer};
pub use validator::{check_instance_blocks, ConfigValidator};
