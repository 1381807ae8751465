//! Shape validation for imported server JSON.

use serde_json::{Map, Value};
use tracing::debug;

use super::fields;
use super::input::{ImportInput, ValidatedImport, ValidationResult};
use crate::error::{ImportError, json_kind};
use crate::settings::ImportSettings;

/// Fields that must be arrays when present.
const LIST_FIELDS: [&str; 3] = ["args", "alwaysAllow", "neverAllow"];

/// Validate import input with default settings.
///
/// # Examples
///
/// ```rust
/// use mcpimport_core::validate;
///
/// let result = validate(r#"{"mcpServers": {"git": {"command": "uvx", "args": ["mcp-server-git"]}}}"#);
/// assert!(result.valid);
///
/// let result = validate("{}");
/// assert!(!result.valid);
/// ```
pub fn validate<'a>(input: impl Into<ImportInput<'a>>) -> ValidationResult {
    validate_with(input, &ImportSettings::default())
}

/// Validate import input, reporting failures as data.
pub fn validate_with<'a>(
    input: impl Into<ImportInput<'a>>,
    settings: &ImportSettings,
) -> ValidationResult {
    let result = try_validate(input.into(), settings);
    if let Err(ref err) = result {
        debug!(error = %err, "server import rejected");
    }
    result.into()
}

/// Validate import input, returning the first problem found.
pub fn try_validate(
    input: ImportInput<'_>,
    settings: &ImportSettings,
) -> Result<ValidatedImport, ImportError> {
    let root = match input {
        ImportInput::Text(text) => {
            serde_json::from_str(text).map_err(|e| ImportError::InvalidJson(e.to_string()))?
        }
        ImportInput::Parsed(value) => value,
    };

    let collection = root
        .as_object()
        .and_then(|obj| obj.get(&settings.wrapper_key))
        .unwrap_or(&root);

    let Some(servers) = collection.as_object() else {
        return Err(ImportError::NotAnObject {
            found: json_kind(collection),
        });
    };
    if servers.is_empty() {
        return Err(ImportError::Empty);
    }

    for (name, entry) in servers {
        validate_entry(name, entry)?;
    }

    let servers: Map<String, Value> = servers.clone();
    Ok(ValidatedImport { root, servers })
}

/// Check one named entry.
pub(crate) fn validate_entry(name: &str, entry: &Value) -> Result<(), ImportError> {
    let Some(entry) = entry.as_object() else {
        return Err(ImportError::EntryNotObject {
            name: name.to_string(),
            found: json_kind(entry),
        });
    };

    let has_command = fields::trimmed_str(entry, "command").is_some();
    let has_url = fields::url_value(entry).is_some();
    let remote_like = fields::is_remote_like(&fields::declared_type(entry), has_command, has_url);

    if !has_command && !remote_like {
        return Err(ImportError::MissingCommandOrUrl {
            name: name.to_string(),
        });
    }
    if remote_like && !has_url {
        return Err(ImportError::MissingUrl {
            name: name.to_string(),
        });
    }

    for field in LIST_FIELDS {
        match entry.get(field) {
            None | Some(Value::Null | Value::Array(_)) => {}
            Some(other) => {
                return Err(ImportError::NotAnArray {
                    name: name.to_string(),
                    field,
                    found: json_kind(other),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_of(input: &str) -> String {
        let result = validate(input);
        assert!(!result.valid, "expected {input} to be rejected");
        assert!(result.data.is_none());
        result.error.unwrap()
    }

    #[test]
    fn test_rejects_malformed_json() {
        let error = error_of("{not json");
        assert!(error.starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_rejects_empty_collections() {
        assert_eq!(error_of("{}"), "No servers found in configuration");
        assert_eq!(
            error_of(r#"{"mcpServers": {}}"#),
            "No servers found in configuration"
        );
    }

    #[test]
    fn test_rejects_non_object_collections() {
        assert!(error_of("[1, 2]").contains("got array"));
        assert!(error_of(r#"{"mcpServers": null}"#).contains("got null"));
        assert!(error_of("\"servers\"").contains("got string"));
    }

    #[test]
    fn test_accepts_bare_and_wrapped_collections() {
        let result = validate(r#"{"foo": {"command": "node", "args": ["x"]}}"#);
        assert!(result.valid);
        assert!(result.servers().unwrap().contains_key("foo"));

        let result = validate(r#"{"mcpServers": {"foo": {"type":"sse","url":"http://x"}}}"#);
        assert!(result.valid);
        let data = result.data.unwrap();
        assert_eq!(data.names().collect::<Vec<_>>(), vec!["foo"]);
        assert!(data.root.get("mcpServers").is_some());
    }

    #[test]
    fn test_accepts_already_parsed_value() {
        let result = validate(json!({"foo": {"url": "http://x"}}));
        assert!(result.valid);
    }

    #[test]
    fn test_entry_must_be_object() {
        let error = error_of(r#"{"foo": "npx server"}"#);
        assert_eq!(
            error,
            "Server \"foo\": configuration must be an object, got string"
        );
    }

    #[test]
    fn test_entry_needs_command_or_url() {
        let error = error_of(r#"{"foo": {"command": "   ", "args": []}}"#);
        assert!(error.contains("\"foo\""));
        assert!(error.contains("command"));
    }

    #[test]
    fn test_remote_type_requires_url() {
        let error = error_of(r#"{"foo": {"type": "sse"}}"#);
        assert!(error.contains("remoteUrl"));

        let error = error_of(r#"{"foo": {"type": " Streamable-HTTP ", "command": "node"}}"#);
        assert!(error.contains("\"foo\""));
    }

    #[test]
    fn test_remote_url_alias_accepted() {
        assert!(validate(r#"{"foo": {"type": "http", "remoteUrl": "http://x"}}"#).valid);
    }

    #[test]
    fn test_list_fields_must_be_arrays() {
        let error = error_of(r#"{"foo": {"command": "node", "args": "not-an-array"}}"#);
        assert_eq!(error, "Server \"foo\": \"args\" must be an array, got string");

        let error = error_of(r#"{"foo": {"command": "node", "alwaysAllow": {"a": true}}}"#);
        assert!(error.contains("alwaysAllow"));

        let error = error_of(r#"{"foo": {"command": "node", "neverAllow": "b"}}"#);
        assert!(error.contains("neverAllow"));

        assert!(validate(r#"{"foo": {"command": "node", "args": null}}"#).valid);
    }

    #[test]
    fn test_fails_fast_on_first_bad_entry() {
        let error = error_of(
            r#"{"ok": {"command": "node"}, "bad1": {"type": "sse"}, "bad2": 5}"#,
        );
        assert!(error.contains("\"bad1\""));
    }

    #[test]
    fn test_wrapper_siblings_ignored() {
        let result = validate(r#"{"mcpServers": {"a": {"command": "node"}}, "other": 1}"#);
        let names: Vec<&str> = result.servers().unwrap().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a"]);
    }

    #[test]
    fn test_custom_wrapper_key() {
        let settings = ImportSettings::with_wrapper_key("servers");
        let result = validate_with(r#"{"servers": {"a": {"command": "node"}}}"#, &settings);
        assert!(result.valid);
        assert!(result.servers().unwrap().contains_key("a"));

        let result = validate_with(r#"{"mcpServers": {"a": {"command": "node"}}}"#, &settings);
        assert!(!result.valid);
    }

    #[test]
    fn test_preserves_input_order() {
        let result = validate(
            r#"{"zeta": {"command": "a"}, "alpha": {"command": "b"}, "mid": {"command": "c"}}"#,
        );
        let data = result.data.unwrap();
        assert_eq!(data.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }
}
