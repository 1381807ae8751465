//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that read input, call `mcpimport-core`, and format output
//!
//! Handlers should NOT contain validation or normalization rules.

pub mod import;
pub mod launch_args;
pub mod validate;
