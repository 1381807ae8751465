//! Validator input and result types.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ImportError;

/// Raw import input: JSON text or an already-parsed value.
#[derive(Debug, Clone)]
pub enum ImportInput<'a> {
    /// JSON text as typed or pasted by a user.
    Text(&'a str),
    /// A value the caller already parsed.
    Parsed(Value),
}

impl<'a> From<&'a str> for ImportInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for ImportInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl From<Value> for ImportInput<'_> {
    fn from(value: Value) -> Self {
        Self::Parsed(value)
    }
}

/// Successfully validated import data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedImport {
    /// The whole parsed document.
    pub root: Value,
    /// Server entries keyed by name, in input order.
    pub servers: Map<String, Value>,
}

impl ValidatedImport {
    /// Server names in input order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.servers.keys().map(String::as_str)
    }
}

/// Outcome of validating an import, with failures carried as data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,

    /// Why validation failed (if invalid).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The parsed data (if valid).
    #[serde(flatten)]
    pub data: Option<ValidatedImport>,
}

impl ValidationResult {
    /// Create a valid result.
    #[must_use]
    pub fn valid(data: ValidatedImport) -> Self {
        Self {
            valid: true,
            error: None,
            data: Some(data),
        }
    }

    /// Create an invalid result.
    pub fn invalid(error: &ImportError) -> Self {
        Self {
            valid: false,
            error: Some(error.to_string()),
            data: None,
        }
    }

    /// Server entries (if valid).
    pub fn servers(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref().map(|data| &data.servers)
    }
}

impl From<Result<ValidatedImport, ImportError>> for ValidationResult {
    fn from(result: Result<ValidatedImport, ImportError>) -> Self {
        match result {
            Ok(data) => Self::valid(data),
            Err(err) => Self::invalid(&err),
        }
    }
}
