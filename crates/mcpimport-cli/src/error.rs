//! CLI-specific error types and exit codes.

use mcpimport_core::ImportError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input was rejected by validation.
    #[error("{0}")]
    Invalid(String),

    /// Some entries could not be imported.
    #[error("{failed} of {total} server(s) failed to import")]
    PartialImport { failed: usize, total: usize },

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Invalid(_) => 65,          // EX_DATAERR
            Self::PartialImport { .. } => 1, // General error
            Self::Arguments(_) => 2,         // EX_USAGE
            Self::Io(_) => 74,               // EX_IOERR
            Self::Config(_) => 78,           // EX_CONFIG
        }
    }
}

impl From<ImportError> for CliError {
    fn from(err: ImportError) -> Self {
        Self::Invalid(err.to_string())
    }
}
