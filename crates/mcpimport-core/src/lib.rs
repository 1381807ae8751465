//! Core logic for importing MCP server configurations.
//!
//! Users paste loosely-shaped JSON describing one or more servers (the
//! `mcpServers` block most MCP clients use, or a bare name → config map).
//! This crate turns that text into fully typed [`ServerRecord`]s:
//!
//! - [`import::validate`] checks shape and required fields, fail-fast.
//! - [`import::normalize`] produces one [`ImportOutcome`] per entry with
//!   unique names, resolved server type, credentials and tool permissions.
//! - [`launch::with_auto_confirm`] makes `npx` invocations non-interactive.
//!
//! Persistence and identifier generation are ports; see [`ports`].
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod import;
pub mod launch;
pub mod ports;
pub mod settings;

pub use domain::{ImportOutcome, ServerRecord, ServerType};
pub use error::ImportError;
pub use import::{
    ImportInput, ValidatedImport, ValidationResult, import_servers, normalize, validate,
    validate_with,
};
pub use launch::{is_package_runner, with_auto_confirm};
pub use ports::{IdGenerationError, IdGenerator, UuidGenerator};
pub use settings::{DEFAULT_WRAPPER_KEY, ImportSettings, SettingsError, validate_settings};
