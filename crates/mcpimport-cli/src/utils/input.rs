//! Input sources for CLI commands.

use std::collections::HashSet;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Result;

use crate::error::CliError;

/// Marker for "read from standard input".
pub const STDIN_MARKER: &str = "-";

/// Read JSON text from a file path, or stdin for `-`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file or stdin cannot be read.
pub fn read_source(source: &str) -> Result<String> {
    if source == STDIN_MARKER {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CliError::Io(format!("Failed to read server JSON from stdin: {e}")))?;
        return Ok(text);
    }

    let text = std::fs::read_to_string(source)
        .map_err(|e| CliError::Io(format!("Failed to read {source}: {e}")))?;
    Ok(text)
}

/// Parse a names file: one name per line, blank lines and `#` comments ignored.
pub fn parse_names(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Collect names already in use from flags and an optional names file.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the names file cannot be read.
pub fn existing_names(names: &[String], names_file: Option<&Path>) -> Result<HashSet<String>> {
    let mut existing: HashSet<String> = names.iter().cloned().collect();

    if let Some(path) = names_file {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::Io(format!("Failed to read names file {}: {e}", path.display()))
        })?;
        existing.extend(parse_names(&text).map(str::to_string));
    }

    Ok(existing)
}
