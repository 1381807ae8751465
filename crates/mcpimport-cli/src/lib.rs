//! Command-line adapter for `mcpimport-core`.
//!
//! Reads server JSON from a file or stdin, runs it through the import
//! pipeline, and prints the result for humans or scripts.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

pub use bootstrap::{CliConfig, CliContext, bootstrap, init_logging};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
