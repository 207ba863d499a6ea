//! Shared utilities for command handlers

use crate::config::Config;
use soacheck_schemas::{DirectorySchemas, SchemaStore};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Build the schema store, preferring the command-line directory over the
/// configured one and falling back to the bundled schemas
pub fn schema_store(schemas_dir: Option<&Path>, config: &Config) -> Arc<SchemaStore> {
    match schemas_dir.or(config.paths.schemas_dir.as_deref()) {
        Some(dir) => {
            debug!(dir = %dir.display(), "Loading schemas from directory");
            Arc::new(SchemaStore::with_locator(DirectorySchemas::new(dir)))
        }
        None => Arc::new(SchemaStore::bundled()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_by_default() {
        let store = schema_store(None, &Config::default());
        assert!(store.get_schema("marathon").unwrap().is_some());
    }

    #[test]
    fn test_argument_overrides_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("chronos.schema.json"),
            r#"{"$schema": "http://json-schema.org/draft-04/schema#", "type": "object"}"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.paths.schemas_dir = Some(PathBuf::from("/nonexistent/schemas"));

        let store = schema_store(Some(dir.path()), &config);
        let schema = store.get_schema("chronos").unwrap().unwrap();
        assert!(schema.origin().contains(&dir.path().display().to_string()));
        // marathon is absent from the override directory
        assert!(store.get_schema("marathon").unwrap().is_none());
    }
}
