//! Schema and document loading
//!
//! This module provides:
//! - A closed registry of recognized schema names and their resources
//! - Lazy, cached compilation of schemas into validators
//! - YAML and JSON decoding of configuration documents
//!
//! # Example Usage
//!
//! ```rust
//! use soacheck_schemas::loader::SchemaStore;
//!
//! let store = SchemaStore::bundled();
//! let schema = store.get_schema("marathon")?.expect("marathon is bundled");
//! assert!(schema.schema_uri().is_some());
//! assert!(store.get_schema("fake_schema")?.is_none());
//! # Ok::<(), soacheck_schemas::loader::SchemaError>(())
//! ```
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod locator;
pub mod parser;
pub mod store;

pub use error::{DocumentError, SchemaError, SchemaResult};
pub use locator::{BundledSchemas, DirectorySchemas, SchemaLocator, SchemaResource};
pub use parser::{parse_auto, parse_document, Format};
pub use store::{Schema, SchemaStore};
