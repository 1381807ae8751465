//! Import command handler.
//!
//! Validates and normalizes server JSON and prints one row (or JSON object)
//! per entry. Records are printed, not stored.

use std::path::Path;

use anyhow::Result;
use mcpimport_core::{ImportOutcome, import_servers};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_optional, print_separator, truncate_string};
use crate::utils::input::{existing_names, read_source};

/// Arguments for the import command.
pub struct ImportArgs<'a> {
    pub input: &'a str,
    pub existing: &'a [String],
    pub existing_file: Option<&'a Path>,
    pub auto_confirm: bool,
    pub json: bool,
}

/// Execute the import command.
///
/// # Errors
///
/// Fails on unreadable input, a validation error, or when any entry could
/// not be imported (after printing every outcome).
pub fn execute(ctx: &CliContext, args: &ImportArgs<'_>) -> Result<()> {
    let text = read_source(args.input)?;
    let existing = existing_names(args.existing, args.existing_file)?;

    let mut outcomes =
        import_servers(&text, ctx.settings(), &existing, ctx.ids()).map_err(CliError::from)?;
    if args.auto_confirm {
        apply_auto_confirm(&mut outcomes);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print_table(&outcomes);
    }

    let failed = outcomes.iter().filter(|o| !o.success).count();
    if failed > 0 {
        return Err(CliError::PartialImport {
            failed,
            total: outcomes.len(),
        }
        .into());
    }
    Ok(())
}

/// Rewrite each imported record's args to what a launcher would use.
pub fn apply_auto_confirm(outcomes: &mut [ImportOutcome]) {
    for server in outcomes.iter_mut().filter_map(|o| o.server.as_mut()) {
        let launch_args = server.launch_args().into_owned();
        if !launch_args.is_empty() {
            server.args = Some(launch_args);
        }
    }
}

fn print_table(outcomes: &[ImportOutcome]) {
    println!(
        "{:<24} {:<18} {:<8} {:<40} Renamed From",
        "Name", "Type", "Status", "Target / Message"
    );
    print_separator(110);

    for outcome in outcomes {
        let (server_type, detail) = match (&outcome.server, &outcome.message) {
            (Some(server), _) => (server.server_type.to_string(), server.target()),
            (None, message) => ("--".to_string(), message.clone().unwrap_or_default()),
        };
        println!(
            "{:<24} {:<18} {:<8} {:<40} {}",
            truncate_string(&outcome.name, 23),
            server_type,
            if outcome.success { "ok" } else { "failed" },
            truncate_string(&detail, 39),
            format_optional(outcome.original_name.as_deref(), "--"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use mcpimport_core::{ImportSettings, UuidGenerator};

    fn outcomes(input: &str) -> Vec<ImportOutcome> {
        import_servers(
            input,
            &ImportSettings::default(),
            &HashSet::new(),
            &UuidGenerator,
        )
        .unwrap()
    }

    #[test]
    fn test_apply_auto_confirm_only_touches_npx() {
        let mut outcomes = outcomes(
            r#"{
                "fs": {"command": "npx", "args": ["@modelcontextprotocol/server-filesystem"]},
                "git": {"command": "uvx", "args": ["mcp-server-git"]},
                "api": {"type": "sse", "url": "http://x"}
            }"#,
        );
        apply_auto_confirm(&mut outcomes);

        let args = |i: usize| outcomes[i].server.as_ref().unwrap().args.clone();
        assert_eq!(
            args(0),
            Some(vec![
                "-y".to_string(),
                "@modelcontextprotocol/server-filesystem".to_string()
            ])
        );
        assert_eq!(args(1), Some(vec!["mcp-server-git".to_string()]));
        assert_eq!(args(2), None);
    }

    #[test]
    fn test_execute_reports_missing_input() {
        let ctx = crate::bootstrap(crate::CliConfig::default()).unwrap();
        let args = ImportArgs {
            input: "/nonexistent/servers.json",
            existing: &[],
            existing_file: None,
            auto_confirm: false,
            json: true,
        };
        let err = execute(&ctx, &args).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
        assert_eq!(
            err.downcast_ref::<CliError>().map(CliError::exit_code),
            Some(74)
        );
    }

    #[test]
    fn test_execute_imports_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("servers.json");
        std::fs::write(
            &path,
            r#"{"mcpServers": {"ok": {"command": "node"}, "api": {"remoteUrl": "http://x"}}}"#,
        )
        .unwrap();

        let ctx = crate::bootstrap(crate::CliConfig::default()).unwrap();
        let existing = vec!["ok".to_string()];
        let args = ImportArgs {
            input: path.to_str().unwrap(),
            existing: &existing,
            existing_file: None,
            auto_confirm: false,
            json: true,
        };
        assert!(execute(&ctx, &args).is_ok());
    }
}
