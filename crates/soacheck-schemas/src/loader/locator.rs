//! Schema resource location
//!
//! A locator maps the closed set of recognized schema names to the text of
//! each schema. The store never touches the filesystem itself, so tests can
//! swap in fixture schemas by providing their own locator.
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

use crate::loader::error::{SchemaError, SchemaResult};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Schemas compiled into the binary, keyed by framework name.
///
/// Supporting another framework means adding one entry here and its file
/// under `schemas/`.
const BUNDLED: &[(&str, &str)] = &[
    ("marathon", include_str!("../../../../schemas/marathon.schema.json")),
    ("chronos", include_str!("../../../../schemas/chronos.schema.json")),
];

/// File name used for a schema inside a schema directory
pub fn schema_file_name(name: &str) -> String {
    format!("{}.schema.json", name)
}

/// The raw text of a schema together with where it came from
#[derive(Debug, Clone)]
pub struct SchemaResource {
    /// Human-readable origin used in logs and errors
    pub origin: String,
    /// Unparsed schema document
    pub text: Cow<'static, str>,
}

/// Resolves recognized schema names to schema resources
pub trait SchemaLocator: fmt::Debug + Send + Sync {
    /// Every name this locator recognizes
    fn names(&self) -> Vec<String>;

    /// Fetch the resource for `name`.
    ///
    /// `Ok(None)` means the name is unknown or its resource is absent.
    fn locate(&self, name: &str) -> SchemaResult<Option<SchemaResource>>;
}

/// Locator over the schemas bundled with the tool
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSchemas;

impl SchemaLocator for BundledSchemas {
    fn names(&self) -> Vec<String> {
        BUNDLED.iter().map(|(name, _)| name.to_string()).collect()
    }

    fn locate(&self, name: &str) -> SchemaResult<Option<SchemaResource>> {
        Ok(BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .map(|(name, text)| SchemaResource {
                origin: format!("bundled:{}", schema_file_name(name)),
                text: Cow::Borrowed(*text),
            }))
    }
}

/// Locator reading the recognized schemas from a directory.
///
/// Only names known to the bundled set are recognized; the directory just
/// supplies newer copies of them.
#[derive(Debug, Clone)]
pub struct DirectorySchemas {
    dir: PathBuf,
    names: Vec<String>,
}

impl DirectorySchemas {
    /// Create a locator for `dir` recognizing the bundled schema names
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            names: BundledSchemas.names(),
        }
    }

    /// Create a locator recognizing an explicit set of names
    pub fn with_names<I, S>(dir: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dir: dir.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl SchemaLocator for DirectorySchemas {
    fn names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn locate(&self, name: &str) -> SchemaResult<Option<SchemaResource>> {
        if !self.names.iter().any(|known| known == name) {
            return Ok(None);
        }

        let path = self.dir.join(schema_file_name(name));
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(SchemaResource {
                origin: path.display().to_string(),
                text: Cow::Owned(text),
            })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SchemaError::io_error(name, path, e)),
        }
    }
}
