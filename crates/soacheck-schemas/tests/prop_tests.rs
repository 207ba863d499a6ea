//! Property-based tests for configuration validation
//!
//! These tests verify that the validator behaves consistently across a wide
//! range of generated documents.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use soacheck_schemas::{ConfigValidator, DiagnosticKind, ValidationOutcome};

/// Strategy for generating random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,50}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        3,  // max depth
        10, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                proptest::collection::hash_map("[a-zA-Z_][a-zA-Z0-9_]{0,20}", inner, 0..5)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Strategy for top-level values that are not instance blocks
fn non_mapping_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z ]{0,20}".prop_map(Value::String),
        proptest::collection::vec("[a-z]{1,8}".prop_map(Value::String), 0..4)
            .prop_map(Value::Array),
    ]
}

/// Strategy for well-formed marathon instance blocks
fn marathon_instance_strategy() -> impl Strategy<Value = Value> {
    (
        proptest::option::of(0u32..64),
        proptest::option::of(32u32..65536),
        proptest::option::of(0u32..100),
        proptest::option::of("[a-z /._-]{1,40}"),
    )
        .prop_map(|(cpus, mem, instances, cmd)| {
            let mut block = Map::new();
            if let Some(cpus) = cpus {
                block.insert("cpus".to_string(), json!(f64::from(cpus) / 10.0));
            }
            if let Some(mem) = mem {
                block.insert("mem".to_string(), json!(mem));
            }
            if let Some(instances) = instances {
                block.insert("instances".to_string(), json!(instances));
            }
            if let Some(cmd) = cmd {
                block.insert("cmd".to_string(), json!(cmd));
            }
            Value::Object(block)
        })
}

/// Strategy for valid instance names
fn instance_name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]([a-z0-9_-]{0,14}[a-z0-9])?"
}

proptest! {
    #[test]
    fn test_validation_idempotent(doc in json_value_strategy(), chronos in any::<bool>()) {
        let schema = if chronos { "chronos" } else { "marathon" };
        let validator = ConfigValidator::bundled();
        let first = validator.validate_document(&doc, schema).unwrap();
        let second = validator.validate_document(&doc, schema).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_schema_for_any_content(content in ".{0,200}", name in "[a-z_]{1,20}") {
        prop_assume!(name != "marathon" && name != "chronos");
        let outcome = ConfigValidator::bundled().validate(&content, &name).unwrap();
        prop_assert_eq!(outcome, ValidationOutcome::SchemaNotFound);
    }

    #[test]
    fn test_well_formed_instances_valid(
        instances in proptest::collection::btree_map(
            instance_name_strategy(),
            marathon_instance_strategy(),
            0..6,
        )
    ) {
        let doc = Value::Object(instances.into_iter().collect());
        let outcome = ConfigValidator::bundled().validate_document(&doc, "marathon").unwrap();
        prop_assert!(outcome.is_valid(), "{:?}", outcome);
    }

    #[test]
    fn test_non_mapping_entry_reported_once(
        name in instance_name_strategy(),
        value in non_mapping_strategy(),
        block in marathon_instance_strategy(),
    ) {
        prop_assume!(name != "main");
        let mut entries = Map::new();
        entries.insert("main".to_string(), block);
        entries.insert(name.clone(), value);
        let doc = Value::Object(entries);

        let outcome = ConfigValidator::bundled().validate_document(&doc, "marathon").unwrap();
        let details = outcome.details();

        prop_assert_eq!(details.len(), 1, "{:?}", details);
        prop_assert_eq!(&details[0].path, &name);
        prop_assert_eq!(details[0].kind, DiagnosticKind::Structural);
    }

    #[test]
    fn test_diagnostics_ordered_structural_first(doc in json_value_strategy()) {
        let outcome = ConfigValidator::bundled().validate_document(&doc, "chronos").unwrap();
        let kinds: Vec<DiagnosticKind> = outcome.details().iter().map(|d| d.kind).collect();
        let first_schema = kinds
            .iter()
            .position(|kind| *kind == DiagnosticKind::Schema)
            .unwrap_or(kinds.len());
        prop_assert!(kinds[first_schema..]
            .iter()
            .all(|kind| *kind == DiagnosticKind::Schema));
    }
}
