//! Schema store with per-name lazy loading and caching
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

use crate::loader::error::{SchemaError, SchemaResult};
use crate::loader::locator::{BundledSchemas, SchemaLocator, SchemaResource};
use crate::validation::outcome::Diagnostic;
use crate::validation::path::location_from_pointer;
use jsonschema::Validator;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// A loaded schema document and its compiled validator
pub struct Schema {
    name: String,
    origin: String,
    document: Value,
    validator: Validator,
}

impl Schema {
    /// Parse and compile a schema resource
    pub fn compile(name: &str, resource: SchemaResource) -> SchemaResult<Self> {
        let document: Value = serde_json::from_str(&resource.text)
            .map_err(|e| SchemaError::invalid_json(name, &resource.origin, e))?;

        let validator = jsonschema::validator_for(&document)
            .map_err(|e| SchemaError::compile(name, &resource.origin, e.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            origin: resource.origin,
            document,
            validator,
        })
    }

    /// Name the schema is registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the schema was loaded from
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The parsed schema document
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// The `$schema` identifier of the document, if present
    pub fn schema_uri(&self) -> Option<&str> {
        self.document.get("$schema").and_then(|v| v.as_str())
    }

    /// Check an instance without collecting violations
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Collect every violation of this schema in `instance`
    pub fn violations(&self, instance: &Value) -> Vec<Diagnostic> {
        self.validator
            .iter_errors(instance)
            .map(|error| {
                let pointer = error.instance_path.to_string();
                Diagnostic::schema(location_from_pointer(instance, &pointer), error.to_string())
            })
            .collect()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

/// Process-lifetime cache of the recognized schemas.
///
/// Each schema is loaded on first lookup and never evicted. The store is
/// `Send + Sync`; share one instance behind an `Arc`.
#[derive(Debug)]
pub struct SchemaStore {
    locator: Box<dyn SchemaLocator>,
    cache: BTreeMap<String, OnceLock<Arc<Schema>>>,
}

impl SchemaStore {
    /// Store backed by the schemas bundled with the tool
    pub fn bundled() -> Self {
        Self::with_locator(BundledSchemas)
    }

    /// Store backed by a custom locator
    pub fn with_locator<L: SchemaLocator + 'static>(locator: L) -> Self {
        let cache = locator
            .names()
            .into_iter()
            .map(|name| (name, OnceLock::new()))
            .collect();

        Self {
            locator: Box::new(locator),
            cache,
        }
    }

    /// Recognized schema names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.cache.keys().map(|name| name.as_str()).collect()
    }

    /// Whether `name` is one of the recognized schema names
    pub fn is_recognized(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Whether `name` has already been loaded
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.get(name).is_some_and(|cell| cell.get().is_some())
    }

    /// Look up a schema by name.
    ///
    /// Returns `Ok(None)` for unrecognized names and for recognized names
    /// whose resource is missing. A resource that is present but broken is
    /// an error.
    pub fn get_schema(&self, name: &str) -> SchemaResult<Option<Arc<Schema>>> {
        let Some(cell) = self.cache.get(name) else {
            warn!(schema = name, "Unrecognized schema name");
            return Ok(None);
        };

        if let Some(schema) = cell.get() {
            return Ok(Some(Arc::clone(schema)));
        }

        let Some(resource) = self.locator.locate(name)? else {
            warn!(schema = name, "Schema resource not found");
            return Ok(None);
        };

        debug!(schema = name, origin = %resource.origin, "Loading schema");
        let schema = Arc::new(Schema::compile(name, resource)?);

        // Another thread may have filled the cell meanwhile; either copy is identical.
        let _ = cell.set(schema);
        Ok(cell.get().cloned())
    }

    /// Load every recognized schema, failing on the first broken one.
    ///
    /// Returns how many schemas were available.
    pub fn preload(&self) -> SchemaResult<usize> {
        let mut loaded = 0;
        for name in self.cache.keys() {
            if self.get_schema(name)?.is_some() {
                loaded += 1;
            }
        }
        Ok(loaded)
    }
}

impl Default for SchemaStore {
    fn default() -> Self {
        Self::bundled()
    }
}
