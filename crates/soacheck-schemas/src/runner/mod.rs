//! Validation of every configuration file in a service directory
//!
//! The runner resolves the service directory, discovers candidate files,
//! validates each one, then hands every readable file to the registered
//! checks. Nothing is printed; callers render the returned [`RunReport`].
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

pub mod checks;
pub mod discovery;
pub mod report;

pub use checks::{Check, CheckReport, UniqueInstanceNames, CHECK_FAILED, CHECK_PASSED};
pub use discovery::{
    ConfigFile, ContentLoader, DirectoryDiscovery, FileDiscovery, FsLoader, LoadedFile,
};
pub use report::{FileOutcome, FileReport, RunReport, READ_FAILED};

use crate::loader::{Format, SchemaResult, SchemaStore};
use crate::resolver::ServicePathResolver;
use crate::validation::ConfigValidator;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs validation over one service directory
pub struct ValidationRunner {
    resolver: ServicePathResolver,
    validator: ConfigValidator,
    discovery: Box<dyn FileDiscovery>,
    loader: Box<dyn ContentLoader>,
    checks: Vec<Box<dyn Check>>,
}

impl ValidationRunner {
    /// Runner with explicit collaborators and no checks
    pub fn new(
        resolver: ServicePathResolver,
        validator: ConfigValidator,
        discovery: Box<dyn FileDiscovery>,
        loader: Box<dyn ContentLoader>,
    ) -> Self {
        Self {
            resolver,
            validator,
            discovery,
            loader,
            checks: Vec::new(),
        }
    }

    /// Runner over the local filesystem, anchored at the process working directory
    pub fn for_filesystem(store: Arc<SchemaStore>) -> io::Result<Self> {
        let discovery = DirectoryDiscovery::for_store(&store);
        Ok(Self::new(
            ServicePathResolver::from_current_dir()?,
            ConfigValidator::new(store),
            Box::new(discovery),
            Box::new(FsLoader),
        ))
    }

    /// Register a cross-file check
    pub fn with_check<C: Check + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Names of the registered checks, in run order
    pub fn check_names(&self) -> Vec<&str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    /// Validate every configuration file of a service.
    ///
    /// Every file and every check is evaluated even after a failure. Only a
    /// broken schema resource aborts the run.
    pub fn run(&self, service: Option<&str>, base_dir: Option<&Path>) -> SchemaResult<RunReport> {
        let service_path = self.resolver.resolve(service, base_dir);
        let Some(dir) = service_path.path().map(Path::to_path_buf) else {
            return Ok(RunReport::unresolved(service_path));
        };

        let candidates = match self.discovery.discover(&dir) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Could not list service directory");
                return Ok(RunReport {
                    service_path,
                    discovery_error: Some(format!("{}: {}", dir.display(), e)),
                    files: Vec::new(),
                    checks: Vec::new(),
                });
            }
        };

        if candidates.is_empty() {
            warn!(dir = %dir.display(), "No configuration files found");
        }

        let mut files = Vec::with_capacity(candidates.len());
        let mut loaded = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let outcome = match self.loader.load(&candidate.path) {
                Ok(content) => {
                    let outcome = match Format::from_path(&candidate.path) {
                        Some(format) => {
                            self.validator
                                .validate_as(&content, format, &candidate.schema_name)?
                        }
                        None => self.validator.validate(&content, &candidate.schema_name)?,
                    };
                    debug!(
                        path = %candidate.path.display(),
                        schema = %candidate.schema_name,
                        result = outcome.marker(),
                        "Validated file"
                    );
                    loaded.push(LoadedFile {
                        path: candidate.path.clone(),
                        schema_name: candidate.schema_name.clone(),
                        content,
                    });
                    FileOutcome::Validated { outcome }
                }
                Err(e) => {
                    warn!(path = %candidate.path.display(), error = %e, "Could not read file");
                    FileOutcome::Unreadable {
                        message: e.to_string(),
                    }
                }
            };

            files.push(FileReport {
                path: candidate.path,
                schema_name: candidate.schema_name,
                outcome,
            });
        }

        let checks = self
            .checks
            .iter()
            .map(|check| check.run(&dir, &loaded))
            .collect();

        let report = RunReport {
            service_path,
            discovery_error: None,
            files,
            checks,
        };
        info!(
            dir = %dir.display(),
            files = report.files.len(),
            failures = report.failures(),
            "Validation run finished"
        );
        Ok(report)
    }
}
