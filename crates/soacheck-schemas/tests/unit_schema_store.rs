//! Unit tests for schema lookup and caching
//!
//! Covers the bundled registry, directory overrides, and the split between
//! "not found" (an ordinary result) and a broken schema (an error).

use soacheck_schemas::loader::locator::schema_file_name;
use soacheck_schemas::{DirectorySchemas, SchemaError, SchemaStore};
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn assert_is_schema(store: &SchemaStore, name: &str) {
    let schema = store
        .get_schema(name)
        .unwrap()
        .unwrap_or_else(|| panic!("{} should be bundled", name));
    assert!(schema.document().is_object());
    assert!(schema.schema_uri().is_some(), "{} lacks $schema", name);
    assert_eq!(schema.name(), name);
}

#[cfg(test)]
mod bundled_schemas {
    use super::*;

    #[test]
    fn test_get_schema_marathon_found() {
        assert_is_schema(&SchemaStore::bundled(), "marathon");
    }

    #[test]
    fn test_get_schema_chronos_found() {
        assert_is_schema(&SchemaStore::bundled(), "chronos");
    }

    #[test]
    fn test_get_schema_missing() {
        let store = SchemaStore::bundled();
        assert!(store.get_schema("fake_schema").unwrap().is_none());
        assert!(store.get_schema("").unwrap().is_none());
        assert!(!store.is_recognized("fake_schema"));
    }

    #[test]
    fn test_names_sorted() {
        assert_eq!(SchemaStore::bundled().names(), vec!["chronos", "marathon"]);
    }

    #[test]
    fn test_lazy_and_cached() {
        let store = SchemaStore::bundled();
        assert!(!store.is_cached("marathon"));

        let first = store.get_schema("marathon").unwrap().unwrap();
        assert!(store.is_cached("marathon"));
        assert!(!store.is_cached("chronos"));

        let second = store.get_schema("marathon").unwrap().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_preload() {
        let store = SchemaStore::bundled();
        assert_eq!(store.preload().unwrap(), 2);
        assert!(store.is_cached("chronos"));
    }

    #[test]
    fn test_shared_across_threads() {
        let store = Arc::new(SchemaStore::bundled());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.get_schema("chronos").unwrap().is_some())
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}

#[cfg(test)]
mod directory_schemas {
    use super::*;

    const MINIMAL: &str = r#"{"$schema": "http://json-schema.org/draft-04/schema#", "type": "object"}"#;

    #[test]
    fn test_directory_override() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(schema_file_name("marathon")), MINIMAL).unwrap();

        let store = SchemaStore::with_locator(DirectorySchemas::new(dir.path()));
        let schema = store.get_schema("marathon").unwrap().unwrap();
        assert!(schema.origin().contains("marathon.schema.json"));

        // recognized but absent from the directory
        assert!(store.get_schema("chronos").unwrap().is_none());
        // never recognized, even if a file exists
        fs::write(dir.path().join(schema_file_name("kubernetes")), MINIMAL).unwrap();
        assert!(store.get_schema("kubernetes").unwrap().is_none());
    }

    #[test]
    fn test_malformed_schema_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(schema_file_name("chronos")), "{ not json").unwrap();

        let store = SchemaStore::with_locator(DirectorySchemas::new(dir.path()));
        let err = store.get_schema("chronos").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidJson { .. }));
        assert_eq!(err.schema_name(), "chronos");
        assert!(store.preload().is_err());
    }

    #[test]
    fn test_uncompilable_schema_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(schema_file_name("marathon")),
            r#"{"type": "not-a-type"}"#,
        )
        .unwrap();

        let store = SchemaStore::with_locator(DirectorySchemas::new(dir.path()));
        let err = store.get_schema("marathon").unwrap_err();
        assert!(matches!(err, SchemaError::Compile { .. }));
    }
}
