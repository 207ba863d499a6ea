//! Cross-file checks run after per-file validation
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

use crate::loader::{parse_auto, parse_document, Format};
use crate::runner::discovery::LoadedFile;
use crate::validation::Diagnostic;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Report marker for a check without findings
pub const CHECK_PASSED: &str = "CHECK PASSED";
/// Report marker for a check with findings
pub const CHECK_FAILED: &str = "CHECK FAILED";

/// A check over every loaded file of one service
pub trait Check {
    /// Stable name used in reports
    fn name(&self) -> &str;

    /// Inspect the files of the service directory `service_dir`
    fn run(&self, service_dir: &Path, files: &[LoadedFile]) -> CheckReport;
}

/// Findings of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub violations: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn marker(&self) -> &'static str {
        if self.passed() {
            CHECK_PASSED
        } else {
            CHECK_FAILED
        }
    }
}

/// Within one cluster, each instance name may be defined by only one file.
///
/// Files are named `<framework>-<cluster>.<ext>`; files without a cluster
/// suffix and files that fail to parse are ignored. Template keys (leading
/// `_`) are not instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueInstanceNames;

impl UniqueInstanceNames {
    pub const NAME: &'static str = "unique_instance_names";
}

impl Check for UniqueInstanceNames {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self, _service_dir: &Path, files: &[LoadedFile]) -> CheckReport {
        // cluster -> instance -> first defining file
        let mut seen: BTreeMap<&str, BTreeMap<String, &PathBuf>> = BTreeMap::new();
        let mut violations = Vec::new();

        for file in files {
            let Some(cluster) = cluster_of(file) else {
                continue;
            };
            let Some(Value::Object(instances)) = parse_loaded(file) else {
                continue;
            };

            let defined = seen.entry(cluster).or_default();
            for instance in instances.keys().filter(|key| !key.starts_with('_')) {
                match defined.get(instance) {
                    Some(first) => violations.push(Diagnostic::structural(
                        format!("{}.{}", cluster, instance),
                        format!(
                            "instance '{}' is defined in both {} and {}",
                            instance,
                            first.display(),
                            file.path.display()
                        ),
                    )),
                    None => {
                        defined.insert(instance.clone(), &file.path);
                    }
                }
            }
        }

        CheckReport {
            name: Self::NAME.to_string(),
            violations,
        }
    }
}

fn cluster_of(file: &LoadedFile) -> Option<&str> {
    file.path
        .file_stem()?
        .to_str()?
        .strip_prefix(file.schema_name.as_str())?
        .strip_prefix('-')
        .filter(|cluster| !cluster.is_empty())
}

fn parse_loaded(file: &LoadedFile) -> Option<Value> {
    match Format::from_path(&file.path) {
        Some(format) => parse_document(&file.content, format).ok(),
        None => parse_auto(&file.content).ok().map(|(value, _)| value),
    }
}
