//! Import settings and validation.

use serde::{Deserialize, Serialize};

/// Wrapper property most MCP clients put around their server map.
pub const DEFAULT_WRAPPER_KEY: &str = "mcpServers";

/// Settings that shape how input JSON is read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportSettings {
    /// Property that, when present at the top level, holds the server map.
    pub wrapper_key: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            wrapper_key: DEFAULT_WRAPPER_KEY.to_string(),
        }
    }
}

impl ImportSettings {
    /// Settings with a custom wrapper key.
    pub fn with_wrapper_key(wrapper_key: impl Into<String>) -> Self {
        Self {
            wrapper_key: wrapper_key.into(),
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Wrapper key cannot be empty")]
    EmptyWrapperKey,
}

/// Validate import settings.
pub fn validate_settings(settings: &ImportSettings) -> Result<(), SettingsError> {
    if settings.wrapper_key.trim().is_empty() {
        return Err(SettingsError::EmptyWrapperKey);
    }
    Ok(())
}
