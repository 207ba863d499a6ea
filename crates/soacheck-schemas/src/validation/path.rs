//! Location path notation for diagnostics
//!
//! JSON pointers (`/main_http/cpus`) are rendered as `main_http.cpus`,
//! array indices as `[n]`, and the document root as `$`. Keys that would
//! make the notation ambiguous are quoted: `["a.b"]`.

use serde_json::Value;
use std::fmt::Write;

/// Location of the document root
pub const ROOT: &str = "$";

/// Location of a single top-level key
pub fn key_location(key: &str) -> String {
    let mut location = String::new();
    push_key(&mut location, key);
    location
}

/// Render a JSON pointer into `document` in dotted notation.
///
/// The document is walked alongside the pointer so that numeric segments
/// are only treated as indices where the value really is an array.
pub fn location_from_pointer(document: &Value, pointer: &str) -> String {
    let mut location = String::new();
    let mut current = Some(document);

    for raw in pointer.split('/').skip(1) {
        let segment = unescape(raw);

        if let Some(Value::Array(items)) = current {
            if let Ok(index) = segment.parse::<usize>() {
                let _ = write!(location, "[{}]", index);
                current = items.get(index);
                continue;
            }
        }

        push_key(&mut location, &segment);
        current = current.and_then(|value| value.get(segment.as_str()));
    }

    if location.is_empty() {
        ROOT.to_string()
    } else {
        location
    }
}

fn push_key(location: &mut String, key: &str) {
    if needs_quoting(key) {
        let quoted = serde_json::to_string(key).unwrap_or_else(|_| format!("\"{}\"", key));
        let _ = write!(location, "[{}]", quoted);
    } else {
        if !location.is_empty() {
            location.push('.');
        }
        location.push_str(key);
    }
}

fn needs_quoting(key: &str) -> bool {
    key.is_empty() || key.contains(['.', '[', ']', '"']) || key == ROOT
}

fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root() {
        assert_eq!(location_from_pointer(&json!({}), ""), "$");
    }

    #[test]
    fn test_nested_keys() {
        let doc = json!({"main_http": {"cpus": "lots"}});
        assert_eq!(location_from_pointer(&doc, "/main_http/cpus"), "main_http.cpus");
    }

    #[test]
    fn test_array_indices() {
        let doc = json!({"main": {"args": ["a", 1]}});
        assert_eq!(location_from_pointer(&doc, "/main/args/1"), "main.args[1]");
    }

    #[test]
    fn test_numeric_object_key_is_not_an_index() {
        let doc = json!({"main": {"env": {"0": 5}}});
        assert_eq!(location_from_pointer(&doc, "/main/env/0"), "main.env.0");
    }

    #[test]
    fn test_escaped_and_quoted_segments() {
        let doc = json!({"a/b": {"c.d": 1}});
        assert_eq!(location_from_pointer(&doc, "/a~1b/c.d"), "a/b[\"c.d\"]");
        assert_eq!(key_location(""), "[\"\"]");
        assert_eq!(key_location("page"), "page");
    }
}
