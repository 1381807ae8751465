//! CLI bootstrap - the composition root.
//!
//! This module is the only place where concrete collaborators are chosen for
//! the CLI adapter: the import settings and the identifier generator.

use std::sync::Arc;

use anyhow::Result;
use mcpimport_core::{IdGenerator, ImportSettings, UuidGenerator, validate_settings};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// How input JSON is read.
    pub settings: ImportSettings,
    /// Enable debug logging when `RUST_LOG` is unset.
    pub verbose: bool,
}

impl CliConfig {
    /// Build config from parsed arguments, falling back to defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let settings = cli
            .wrapper_key
            .as_deref()
            .map_or_else(ImportSettings::default, ImportSettings::with_wrapper_key);
        Self {
            settings,
            verbose: cli.verbose,
        }
    }
}

/// Fully composed context for command handlers.
pub struct CliContext {
    /// Validated import settings.
    pub settings: ImportSettings,
    /// Identifier source for new records.
    pub ids: Arc<dyn IdGenerator>,
}

impl CliContext {
    /// Access the import settings.
    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    /// Access the identifier generator.
    pub fn ids(&self) -> &dyn IdGenerator {
        self.ids.as_ref()
    }
}

/// Initialize stderr logging.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Bootstrap the CLI application.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    validate_settings(&config.settings).map_err(|e| CliError::Config(e.to_string()))?;
    tracing::debug!(wrapper_key = %config.settings.wrapper_key, "cli bootstrapped");

    Ok(CliContext {
        settings: config.settings,
        ids: Arc::new(UuidGenerator),
    })
}
