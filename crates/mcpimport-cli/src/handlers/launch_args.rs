//! Launch-args command handler.

use anyhow::Result;
use mcpimport_core::with_auto_confirm;

use crate::error::CliError;

/// Execute the launch-args command.
///
/// Prints the argument list as a JSON array so it can be fed to other tools.
pub fn execute(command: &str, args: &[String]) -> Result<()> {
    println!("{}", render(command, args)?);
    Ok(())
}

fn render(command: &str, args: &[String]) -> Result<String> {
    if command.trim().is_empty() {
        return Err(CliError::Arguments("command cannot be empty".to_string()).into());
    }
    let launch_args = with_auto_confirm(Some(command), args);
    Ok(serde_json::to_string(&*launch_args)?)
}
