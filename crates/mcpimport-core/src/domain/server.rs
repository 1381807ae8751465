//! Server record domain types.
//!
//! These types are serialized in camelCase so they can be handed straight to
//! a frontend or a JSON store.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::launch::with_auto_confirm;

/// How a server is reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerType {
    /// A process launched from `command`.
    #[default]
    #[serde(rename = "local")]
    Local,
    /// An HTTP/SSE endpoint at `remoteUrl`.
    #[serde(rename = "remote")]
    Remote,
    /// A streamable-HTTP endpoint at `remoteUrl`.
    #[serde(rename = "remote-streamable")]
    RemoteStreamable,
}

impl ServerType {
    /// Wire name of the server type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::RemoteStreamable => "remote-streamable",
        }
    }

    /// Whether the server is reached over the network.
    #[must_use]
    pub const fn is_remote(self) -> bool {
        matches!(self, Self::Remote | Self::RemoteStreamable)
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized server configuration produced by an import.
///
/// Optional fields are omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    /// Opaque unique identifier.
    pub id: String,

    /// Name, unique within the import batch and the existing names.
    pub name: String,

    /// Command to launch (local servers only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Command arguments; never empty when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Environment variables for the launched process.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    pub server_type: ServerType,

    /// Endpoint for remote servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    /// Bearer credential for remote servers, without the `Bearer ` prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,

    /// Per-tool allow (`true`) / deny (`false`) decisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_permissions: Option<BTreeMap<String, bool>>,

    #[serde(default)]
    pub auto_start: bool,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServerRecord {
    /// Check the type/target pairing.
    ///
    /// Local servers must carry a command; remote servers must carry a URL.
    pub fn check_invariants(&self) -> Result<(), String> {
        match self.server_type {
            ServerType::Local => {
                if self.command.as_deref().is_none_or(str::is_empty) {
                    return Err(format!(
                        "local server \"{}\" has no command to launch",
                        self.name
                    ));
                }
            }
            ServerType::Remote | ServerType::RemoteStreamable => {
                if self.remote_url.as_deref().is_none_or(str::is_empty) {
                    return Err(format!(
                        "{} server \"{}\" has no remote URL",
                        self.server_type, self.name
                    ));
                }
            }
        }
        Ok(())
    }

    /// Arguments a process launcher should use for this server.
    ///
    /// `npx` invocations gain `-y` so they never block on a prompt.
    pub fn launch_args(&self) -> Cow<'_, [String]> {
        with_auto_confirm(self.command.as_deref(), self.args.as_deref().unwrap_or_default())
    }

    /// Human-readable launch target: the command line or the remote URL.
    pub fn target(&self) -> String {
        if self.server_type.is_remote() {
            return self.remote_url.clone().unwrap_or_default();
        }
        let mut parts: Vec<&str> = self.command.iter().map(String::as_str).collect();
        if let Some(args) = &self.args {
            parts.extend(args.iter().map(String::as_str));
        }
        parts.join(" ")
    }
}

/// Result of importing one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    /// Final (unique) name on success, the entry's key on failure.
    pub name: String,

    /// Whether the entry was imported.
    pub success: bool,

    /// Name as written in the input, when it had to be renamed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,

    /// The imported record (if success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerRecord>,

    /// Failure message (if failed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ImportOutcome {
    /// Create a success outcome.
    #[must_use]
    pub fn imported(server: ServerRecord, original_name: Option<String>) -> Self {
        Self {
            name: server.name.clone(),
            success: true,
            original_name,
            server: Some(server),
            message: None,
        }
    }

    /// Create a failure outcome.
    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            success: false,
            original_name: None,
            server: None,
            message: Some(message.into()),
        }
    }
}
