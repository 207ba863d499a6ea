//! Multi-instance configuration validator
//!
//! A service configuration document maps instance names to instance blocks.
//! Validation runs in a fixed order:
//!
//! 1. schema lookup (unknown schema short-circuits, whatever the content)
//! 2. parsing (YAML or JSON)
//! 3. structural pre-check: every top-level value must be a mapping
//! 4. schema validation of the remaining instance blocks
//!
//! Every violation from steps 3 and 4 is collected; nothing stops at the
//! first one.
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

use crate::loader::{parse_auto, parse_document, Format, Schema, SchemaResult, SchemaStore};
use crate::validation::outcome::{Diagnostic, ValidationOutcome};
use crate::validation::path::key_location;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Validates configuration documents against schemas from a [`SchemaStore`]
#[derive(Debug, Clone)]
pub struct ConfigValidator {
    store: Arc<SchemaStore>,
}

impl ConfigValidator {
    /// Create a validator over a shared store
    pub fn new(store: Arc<SchemaStore>) -> Self {
        Self { store }
    }

    /// Validator over the bundled schemas
    pub fn bundled() -> Self {
        Self::new(Arc::new(SchemaStore::bundled()))
    }

    /// The underlying schema store
    pub fn store(&self) -> &SchemaStore {
        &self.store
    }

    /// Validate raw content of unknown format.
    ///
    /// Only a broken schema resource is returned as `Err`; every problem
    /// with the content itself is part of the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use soacheck_schemas::validation::{ConfigValidator, ValidationOutcome};
    ///
    /// let validator = ConfigValidator::bundled();
    /// let outcome = validator
    ///     .validate(r#"{"daily_job": {"schedule": "bar"}, "page": false}"#, "chronos")
    ///     .unwrap();
    ///
    /// assert!(matches!(outcome, ValidationOutcome::Invalid { .. }));
    /// assert_eq!(outcome.details()[0].path, "page");
    /// ```
    pub fn validate(&self, raw: &str, schema_name: &str) -> SchemaResult<ValidationOutcome> {
        self.validate_with(raw, None, schema_name)
    }

    /// Validate raw content whose format is known, e.g. from the file extension
    pub fn validate_as(
        &self,
        raw: &str,
        format: Format,
        schema_name: &str,
    ) -> SchemaResult<ValidationOutcome> {
        self.validate_with(raw, Some(format), schema_name)
    }

    /// Validate an already decoded document
    pub fn validate_document(
        &self,
        document: &Value,
        schema_name: &str,
    ) -> SchemaResult<ValidationOutcome> {
        match self.store.get_schema(schema_name)? {
            Some(schema) => Ok(validate_against(&schema, document)),
            None => Ok(ValidationOutcome::SchemaNotFound),
        }
    }

    fn validate_with(
        &self,
        raw: &str,
        format: Option<Format>,
        schema_name: &str,
    ) -> SchemaResult<ValidationOutcome> {
        let Some(schema) = self.store.get_schema(schema_name)? else {
            return Ok(ValidationOutcome::SchemaNotFound);
        };

        let parsed = match format {
            Some(format) => parse_document(raw, format),
            None => parse_auto(raw).map(|(value, _)| value),
        };

        match parsed {
            Ok(document) => Ok(validate_against(&schema, &document)),
            Err(e) => {
                debug!(schema = schema_name, error = %e, "Document failed to parse");
                Ok(ValidationOutcome::ParseError {
                    message: e.to_string(),
                })
            }
        }
    }
}

/// Structural pre-check: every top-level value must be an instance block.
///
/// Returns one diagnostic per offending key, in document key order. A root
/// that is not a mapping is left to the schema.
pub fn check_instance_blocks(document: &Value) -> Vec<Diagnostic> {
    let Value::Object(entries) = document else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|(_, value)| !value.is_object())
        .map(|(key, value)| {
            Diagnostic::structural(
                key_location(key),
                format!("value must be an object/mapping, found {}", type_name(value)),
            )
        })
        .collect()
}

fn validate_against(schema: &Schema, document: &Value) -> ValidationOutcome {
    let mut details = check_instance_blocks(document);

    // Entries already reported by the pre-check are left out of schema
    // validation so each defect is reported once.
    let violations = if details.is_empty() {
        schema.violations(document)
    } else {
        schema.violations(&instance_blocks_only(document))
    };
    details.extend(violations);

    debug!(
        schema = schema.name(),
        violations = details.len(),
        "Validated document"
    );
    ValidationOutcome::from_diagnostics(details)
}

fn instance_blocks_only(document: &Value) -> Value {
    match document {
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .filter(|(_, value)| value.is_object())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
