//! Table formatting utilities for CLI output.

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use mcpimport_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("filesystem", 12), "filesystem");
/// assert_eq!(truncate_string("https://mcp.linear.app/mcp", 12), "https://m...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_string("héllo wörld", 8), "héllo...");
        assert_eq!(truncate_string("short", 5), "short");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some("foo"), "--"), "foo");
        assert_eq!(format_optional(None::<&str>, "--"), "--");
    }
}
