//! Configuration document parsing for YAML and JSON formats
//!
//! Both formats decode into the same `serde_json::Value` shape so the rest
//! of the validator never needs to know which one the author used.
//!
//! Copyright (c) 2025 Soacheck Contributors
//! Licensed under the Apache-2.0 license

use crate::loader::error::DocumentError;
use serde_json::Value;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str())?;
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Parse document content with an explicit format
pub fn parse_document(content: &str, format: Format) -> Result<Value, DocumentError> {
    match format {
        Format::Yaml => parse_yaml(content),
        Format::Json => parse_json(content),
    }
}

/// Parse document content of unknown format.
///
/// JSON is tried first since it is the stricter format; YAML is the fallback.
/// When both fail, the error of the format the content looks like is kept.
pub fn parse_auto(content: &str) -> Result<(Value, Format), DocumentError> {
    let json_error = match parse_json(content) {
        Ok(value) => return Ok((value, Format::Json)),
        Err(e) => e,
    };

    match parse_yaml(content) {
        Ok(value) => Ok((value, Format::Yaml)),
        Err(yaml_error) => {
            if looks_like_json(content) {
                Err(json_error)
            } else {
                Err(yaml_error)
            }
        }
    }
}

/// Parse YAML content, applying `<<` merge keys
pub fn parse_yaml(content: &str) -> Result<Value, DocumentError> {
    let mut yaml_value: serde_yaml::Value = serde_yaml::from_str(content)?;
    // Instance blocks commonly inherit from `_template` anchors via `<<`.
    yaml_value.apply_merge()?;

    serde_json::to_value(yaml_value).map_err(DocumentError::Conversion)
}

/// Parse JSON content
pub fn parse_json(content: &str) -> Result<Value, DocumentError> {
    Ok(serde_json::from_str(content)?)
}

fn looks_like_json(content: &str) -> bool {
    matches!(content.trim_start().chars().next(), Some('{') | Some('['))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(&PathBuf::from("marathon-norcal.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(&PathBuf::from("chronos-norcal.YML")), Some(Format::Yaml));
        assert_eq!(Format::from_path(&PathBuf::from("marathon-norcal.json")), Some(Format::Json));
        assert_eq!(Format::from_path(&PathBuf::from("service.txt")), None);
        assert_eq!(Format::from_path(&PathBuf::from("Makefile")), None);
    }

    #[test]
    fn test_yaml_and_json_decode_to_same_shape() {
        let yaml = "main:\n  cpus: 0.1\n  instances: 2\n";
        let json = r#"{"main": {"cpus": 0.1, "instances": 2}}"#;

        let from_yaml = parse_document(yaml, Format::Yaml).unwrap();
        let from_json = parse_document(json, Format::Json).unwrap();
        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn test_yaml_merge_keys_applied() {
        let yaml = r#"
_template: &template
  cpus: 0.5
  mem: 512
main:
  <<: *template
  instances: 3
"#;
        let value = parse_yaml(yaml).unwrap();
        assert_eq!(value["main"], json!({"cpus": 0.5, "mem": 512, "instances": 3}));
    }

    #[test]
    fn test_parse_auto_detects_format() {
        let (_, format) = parse_auto(r#"{"main": {}}"#).unwrap();
        assert_eq!(format, Format::Json);

        let (value, format) = parse_auto("main:\n  cmd: run\n").unwrap();
        assert_eq!(format, Format::Yaml);
        assert_eq!(value["main"]["cmd"], "run");
    }

    #[test]
    fn test_parse_auto_reports_json_error_for_json_looking_content() {
        let err = parse_auto(r#"{"main": {"cpus": }"#).unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)), "got {:?}", err);
    }

    #[test]
    fn test_parse_auto_reports_yaml_error() {
        let err = parse_auto("main:\n  cpus: [1, 2\n").unwrap_err();
        assert!(matches!(err, DocumentError::Yaml(_)), "got {:?}", err);
    }
}
