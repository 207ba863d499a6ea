//! Candidate file discovery and content loading
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

use crate::loader::{Format, SchemaStore};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A configuration file and the schema it is checked against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub schema_name: String,
}

/// A configuration file whose content was read successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub schema_name: String,
    pub content: String,
}

/// Finds the configuration files of a service directory
pub trait FileDiscovery {
    fn discover(&self, dir: &Path) -> io::Result<Vec<ConfigFile>>;
}

/// Reads the content of one configuration file
pub trait ContentLoader {
    fn load(&self, path: &Path) -> io::Result<String>;
}

/// Lists framework configuration files directly inside a directory.
///
/// A file is a candidate when it is a regular file (symlinks are skipped),
/// has a YAML or JSON extension, and its stem is a framework name or starts
/// with `<framework>-`.
#[derive(Debug, Clone)]
pub struct DirectoryDiscovery {
    frameworks: Vec<String>,
}

impl DirectoryDiscovery {
    pub fn new<I, S>(frameworks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frameworks: frameworks.into_iter().map(Into::into).collect(),
        }
    }

    /// Discovery for every schema the store recognizes
    pub fn for_store(store: &SchemaStore) -> Self {
        Self::new(store.names())
    }

    /// The schema a file name maps to, if it is a candidate at all
    pub fn schema_for(&self, path: &Path) -> Option<&str> {
        Format::from_path(path)?;
        let stem = path.file_stem()?.to_str()?;

        self.frameworks
            .iter()
            .find(|framework| {
                stem == framework.as_str()
                    || stem
                        .strip_prefix(framework.as_str())
                        .is_some_and(|rest| rest.starts_with('-'))
            })
            .map(String::as_str)
    }

    /// Keep the candidates among `(path, is_regular_file)` entries.
    ///
    /// An entry that could not be read is logged and skipped.
    fn collect<I>(&self, dir: &Path, entries: I) -> Vec<ConfigFile>
    where
        I: IntoIterator<Item = io::Result<(PathBuf, bool)>>,
    {
        let mut files = Vec::new();

        for entry in entries {
            let (path, is_file) = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            if !is_file {
                continue;
            }
            if let Some(schema_name) = self.schema_for(&path) {
                files.push(ConfigFile {
                    schema_name: schema_name.to_string(),
                    path,
                });
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }
}

impl FileDiscovery for DirectoryDiscovery {
    fn discover(&self, dir: &Path) -> io::Result<Vec<ConfigFile>> {
        let entries = fs::read_dir(dir)?.map(|entry| -> io::Result<(PathBuf, bool)> {
            let entry = entry?;
            // DirEntry::file_type does not follow symlinks
            Ok((entry.path(), entry.file_type()?.is_file()))
        });

        let files = self.collect(dir, entries);
        debug!(dir = %dir.display(), count = files.len(), "Discovered configuration files");
        Ok(files)
    }
}

/// Loads file content from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl ContentLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
