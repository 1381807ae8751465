//! Validate command handler.

use anyhow::Result;
use mcpimport_core::validate_with;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::utils::input::read_source;

/// Execute the validate command.
///
/// Prints the validated server names, or fails with the validation message.
pub fn execute(ctx: &CliContext, input: &str) -> Result<()> {
    let text = read_source(input)?;
    let result = validate_with(&text, ctx.settings());

    let Some(data) = result.data else {
        let message = result.error.unwrap_or_else(|| "validation failed".to_string());
        return Err(CliError::Invalid(message).into());
    };

    println!("Valid: {} server(s)", data.servers.len());
    for name in data.names() {
        println!("  {name}");
    }
    Ok(())
}
