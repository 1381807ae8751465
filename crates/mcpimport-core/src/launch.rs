//! Launch-time argument fixups for package runners.
//!
//! `npx` asks for confirmation before installing a package it has not cached
//! yet. A server launched without a terminal would hang on that prompt, so
//! `npx` invocations get `-y` unless they already carry a yes flag.

use std::borrow::Cow;

/// Executable names recognized as the `npx` package runner.
const PACKAGE_RUNNERS: [&str; 3] = ["npx", "npx.cmd", "npx.exe"];

/// Whether `command` invokes the `npx` package runner.
///
/// Matches a bare runner name or a path ending in one, with either `/` or `\`
/// as the separator. Comparison ignores case and surrounding whitespace.
pub fn is_package_runner(command: &str) -> bool {
    let command = command.trim().to_lowercase();
    PACKAGE_RUNNERS.iter().any(|runner| {
        command == *runner
            || command
                .strip_suffix(runner)
                .is_some_and(|prefix| prefix.ends_with('/') || prefix.ends_with('\\'))
    })
}

fn is_yes_flag(arg: &str) -> bool {
    let arg = arg.trim().to_lowercase();
    arg == "-y" || arg == "--yes" || arg.starts_with("--yes=")
}

/// Ensure a package-runner invocation skips its confirmation prompt.
///
/// Returns `args` untouched (borrowed) unless `command` is `npx`, `args` is
/// non-empty, and no yes flag is present; in that case a new list with `-y`
/// prepended is returned.
pub fn with_auto_confirm<'a>(command: Option<&str>, args: &'a [String]) -> Cow<'a, [String]> {
    let Some(command) = command.filter(|c| !c.trim().is_empty()) else {
        return Cow::Borrowed(args);
    };
    if args.is_empty() || !is_package_runner(command) {
        return Cow::Borrowed(args);
    }
    if args.iter().any(|arg| is_yes_flag(arg)) {
        return Cow::Borrowed(args);
    }

    tracing::debug!(command, "prepending -y to package runner arguments");
    let mut with_flag = Vec::with_capacity(args.len() + 1);
    with_flag.push("-y".to_string());
    with_flag.extend_from_slice(args);
    Cow::Owned(with_flag)
}
