//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Validate and normalize MCP server configurations.
///
/// Accepts the `mcpServers` JSON block used by most MCP clients, or a bare
/// map of server names to configurations.
#[derive(Parser)]
#[command(name = "mcpimport")]
#[command(about = "Validate and normalize MCP server configurations")]
#[command(version)]
pub struct Cli {
    /// Top-level property that holds the server map
    #[arg(long = "wrapper-key", global = true, env = "MCPIMPORT_WRAPPER_KEY")]
    pub wrapper_key: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "mcpimport",
            "--verbose",
            "--wrapper-key",
            "servers",
            "validate",
            "config.json",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.wrapper_key.as_deref(), Some("servers"));
        assert!(matches!(cli.command, Some(Commands::Validate { .. })));
    }

    #[test]
    fn test_import_args() {
        let cli = Cli::parse_from([
            "mcpimport",
            "import",
            "-",
            "--existing",
            "git",
            "--existing",
            "fs",
            "--auto-confirm",
            "--json",
        ]);
        let Some(Commands::Import {
            input,
            existing,
            existing_file,
            auto_confirm,
            json,
        }) = cli.command
        else {
            panic!("expected import command");
        };
        assert_eq!(input, "-");
        assert_eq!(existing, vec!["git", "fs"]);
        assert!(existing_file.is_none());
        assert!(auto_confirm);
        assert!(json);
    }

    #[test]
    fn test_launch_args_accepts_hyphenated_args() {
        let cli = Cli::parse_from(["mcpimport", "launch-args", "npx", "--yes", "pkg"]);
        let Some(Commands::LaunchArgs { command, args }) = cli.command else {
            panic!("expected launch-args command");
        };
        assert_eq!(command, "npx");
        assert_eq!(args, vec!["--yes", "pkg"]);
    }
}
