//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Check server JSON without importing it
    Validate {
        /// Path to a JSON file, or "-" to read stdin
        input: String,
    },

    /// Validate and normalize server JSON into server records
    Import {
        /// Path to a JSON file, or "-" to read stdin
        input: String,
        /// Name already in use (repeatable)
        #[arg(long = "existing", value_name = "NAME")]
        existing: Vec<String>,
        /// File listing names already in use, one per line
        #[arg(long = "existing-file", value_name = "PATH")]
        existing_file: Option<PathBuf>,
        /// Add -y to npx invocations so they never prompt
        #[arg(long)]
        auto_confirm: bool,
        /// Print outcomes as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the arguments a launcher would use for a command
    LaunchArgs {
        /// Executable to launch (e.g. "npx")
        command: String,
        /// Arguments for the executable
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
