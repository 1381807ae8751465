//! Import error types.

use thiserror::Error;

/// Errors raised while validating or normalizing an import.
///
/// Display strings are user-facing and deterministic; each per-entry variant
/// names the offending server and field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The input text is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The server collection is not a JSON object.
    #[error("Server configuration must be a JSON object mapping server names to configurations, got {found}")]
    NotAnObject { found: &'static str },

    /// The server collection has no entries.
    #[error("No servers found in configuration")]
    Empty,

    /// An entry is not a JSON object.
    #[error("Server \"{name}\": configuration must be an object, got {found}")]
    EntryNotObject { name: String, found: &'static str },

    /// An entry has neither a command nor a remote endpoint.
    #[error("Server \"{name}\": must have either a non-empty \"command\" or a remote \"type\" with a \"url\"")]
    MissingCommandOrUrl { name: String },

    /// A remote entry has no endpoint.
    #[error("Server \"{name}\": remote servers require a non-empty \"url\" or \"remoteUrl\"")]
    MissingUrl { name: String },

    /// A list field holds something other than an array.
    #[error("Server \"{name}\": \"{field}\" must be an array, got {found}")]
    NotAnArray {
        name: String,
        field: &'static str,
        found: &'static str,
    },

    /// The identifier generator failed.
    #[error("failed to generate server id: {0}")]
    IdGeneration(String),

    /// A normalized record broke a type/target invariant.
    #[error("{0}")]
    Invariant(String),
}

/// JSON type name used in error messages.
pub(crate) const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
