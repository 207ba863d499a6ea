//! Soacheck Schemas - scheduler schemas and service configuration validation
//!
//! This crate validates the per-service configuration files of a
//! service-oriented architecture (SOA) configuration repository. Each file
//! maps instance names to instance blocks and is checked against the schema
//! of its scheduler framework:
//! - **marathon**: long-running service instances
//! - **chronos**: scheduled batch jobs
//!
//! ## Features
//!
//! - **Bundled Schemas**: JSON Schema documents compiled into the binary,
//!   loaded lazily and cached for the process lifetime
//! - **Structural Pre-check**: every top-level value must be a mapping,
//!   whatever the schema says
//! - **Full Diagnostics**: every violation is collected with its location
//! - **Service Resolution**: service name and SOA directory fallbacks
//! - **Directory Runs**: discover, load and validate a whole service
//!   directory, plus cross-file checks
//!
//! ## Quick Start
//!
//! ```rust
//! use soacheck_schemas::{ConfigValidator, ValidationOutcome};
//!
//! let validator = ConfigValidator::bundled();
//!
//! let config = r#"
//! main_http:
//!   cpus: 0.1
//!   instances: 2
//!   mem: 250
//! page: false
//! "#;
//!
//! match validator.validate(config, "marathon").unwrap() {
//!     ValidationOutcome::Valid => println!("Valid configuration!"),
//!     outcome => {
//!         for diagnostic in outcome.details() {
//!             println!("{}", diagnostic);
//!         }
//!     }
//! }
//! ```
//!
//! ## Outcomes
//!
//! - **Valid**: no violations
//! - **Invalid**: structural violations first, then schema violations
//! - **SchemaNotFound**: the schema name is not recognized
//! - **ParseError**: the content is neither YAML nor JSON
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod resolver;
pub mod runner;
pub mod validation;

// Re-export commonly used types for convenience
pub use loader::{
    BundledSchemas, DirectorySchemas, Format, Schema, SchemaError, SchemaLocator, SchemaResult,
    SchemaStore,
};
pub use resolver::{ServicePath, ServicePathResolver, UNKNOWN_SERVICE};
pub use runner::{
    Check, CheckReport, ConfigFile, ContentLoader, DirectoryDiscovery, FileDiscovery,
    FileOutcome, FileReport, FsLoader, LoadedFile, RunReport, UniqueInstanceNames,
    ValidationRunner,
};
pub use validation::{ConfigValidator, Diagnostic, DiagnosticKind, ValidationOutcome};
