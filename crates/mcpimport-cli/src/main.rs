//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers, which delegate to `mcpimport-core`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use mcpimport_cli::handlers::import::ImportArgs;
use mcpimport_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, init_logging};

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(CliConfig::from_cli(&cli))?;

    // No command provided - show help
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Validate { input } => {
            handlers::validate::execute(&ctx, &input)?;
        }
        Commands::Import {
            input,
            existing,
            existing_file,
            auto_confirm,
            json,
        } => {
            let args = ImportArgs {
                input: &input,
                existing: &existing,
                existing_file: existing_file.as_deref(),
                auto_confirm,
                json,
            };
            handlers::import::execute(&ctx, &args)?;
        }
        Commands::LaunchArgs { command, args } => {
            handlers::launch_args::execute(&command, &args)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
