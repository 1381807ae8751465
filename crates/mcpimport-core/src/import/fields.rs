//! Field extraction shared by validation and normalization.
//!
//! Entries are read from untyped JSON objects. Each helper is a guard that
//! accepts only the expected JSON type and treats anything else as absent.
//! Alias chains (`url`/`remoteUrl`, the bearer credential sources) are
//! checked in a fixed order; the first match wins.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::ServerType;

/// Declared types that mean the entry is a remote server.
pub(crate) const REMOTE_TYPES: [&str; 6] = [
    "http",
    "sse",
    "remote",
    "remote-streamable",
    "streamable-http",
    "streamable_http",
];

/// Declared types that select the streamable-HTTP transport.
const STREAMABLE_TYPES: [&str; 3] = ["streamable-http", "streamable_http", "remote-streamable"];

/// Declared types that select the plain HTTP/SSE transport.
const PLAIN_REMOTE_TYPES: [&str; 3] = ["http", "sse", "remote"];

pub(crate) type Entry = Map<String, Value>;

/// A string field, trimmed, if non-empty.
pub(crate) fn trimmed_str<'a>(entry: &'a Entry, key: &str) -> Option<&'a str> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// The remote endpoint: `url`, else `remoteUrl`.
pub(crate) fn url_value(entry: &Entry) -> Option<&str> {
    trimmed_str(entry, "url").or_else(|| trimmed_str(entry, "remoteUrl"))
}

/// The declared `type`, trimmed and lower-cased; empty when absent.
pub(crate) fn declared_type(entry: &Entry) -> String {
    entry
        .get("type")
        .and_then(Value::as_str)
        .map(|t| t.trim().to_lowercase())
        .unwrap_or_default()
}

/// Whether the entry should be reached over the network.
pub(crate) fn is_remote_like(declared_type: &str, has_command: bool, has_url: bool) -> bool {
    REMOTE_TYPES.contains(&declared_type) || (!has_command && has_url)
}

/// Map the declared type to a server type.
///
/// Unknown types fall back to `remote` when the entry only has a URL.
pub(crate) fn resolve_server_type(
    declared_type: &str,
    has_command: bool,
    has_url: bool,
) -> ServerType {
    if STREAMABLE_TYPES.contains(&declared_type) {
        ServerType::RemoteStreamable
    } else if PLAIN_REMOTE_TYPES.contains(&declared_type) || (!has_command && has_url) {
        ServerType::Remote
    } else {
        ServerType::Local
    }
}

/// String form of a scalar or nested JSON value; `None` for null.
///
/// Nested arrays and objects are rendered as compact JSON.
pub(crate) fn string_form(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// A list field as trimmed, non-empty strings; empty when not an array.
///
/// Every element is kept in string form, so `null` becomes `"null"`.
pub(crate) fn string_list(value: Option<&Value>) -> Vec<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| string_form(item).unwrap_or_else(|| item.to_string()))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// An object field as a string map; empty when not an object.
///
/// Null values are dropped; other non-string values are stringified.
pub(crate) fn string_map(value: Option<&Value>) -> BTreeMap<String, String> {
    let Some(obj) = value.and_then(Value::as_object) else {
        return BTreeMap::new();
    };
    obj.iter()
        .filter_map(|(key, v)| string_form(v).map(|s| (key.clone(), s)))
        .collect()
}

/// Build tool permissions from allow/deny lists.
///
/// A tool in both lists stays allowed.
pub(crate) fn tool_permissions(
    always_allow: &[String],
    never_allow: &[String],
) -> BTreeMap<String, bool> {
    let mut permissions = BTreeMap::new();
    for tool in always_allow {
        permissions.insert(tool.clone(), true);
    }
    for tool in never_allow {
        permissions.entry(tool.clone()).or_insert(false);
    }
    permissions
}

/// The bearer credential, without its `Bearer` scheme prefix.
///
/// Sources in order: `bearerToken`, `authorization`,
/// `headers.Authorization`, `headers.authorization`. The first string found
/// is used even if it turns out empty.
pub(crate) fn bearer_token(entry: &Entry) -> Option<String> {
    let headers = entry.get("headers").and_then(Value::as_object);
    let raw = entry
        .get("bearerToken")
        .and_then(Value::as_str)
        .or_else(|| entry.get("authorization").and_then(Value::as_str))
        .or_else(|| headers.and_then(|h| h.get("Authorization")).and_then(Value::as_str))
        .or_else(|| headers.and_then(|h| h.get("authorization")).and_then(Value::as_str))?;

    Some(strip_bearer(raw).to_string()).filter(|token| !token.is_empty())
}

/// Drop a leading `Bearer` scheme followed by any ASCII whitespace.
fn strip_bearer(raw: &str) -> &str {
    const SCHEME: &str = "bearer";
    let raw = raw.trim();
    match raw.split_once(|c: char| c.is_ascii_whitespace()) {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case(SCHEME) => token.trim(),
        _ if raw.eq_ignore_ascii_case(SCHEME) => "",
        _ => raw,
    }
}
