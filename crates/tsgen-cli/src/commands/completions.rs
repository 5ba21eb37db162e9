//! Shell completion generation command.

use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use tracing::debug;
use tsgen_core::cli::ExitCode;

/// Writes the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Prints the completion script for `shell` to stdout.
///
/// # Examples
///
/// ```no_run
/// use clap::CommandFactory;
/// use clap_complete::Shell;
/// use tsgen_cli::{Cli, commands::completions};
///
/// let code = completions::run(Shell::Bash, &mut Cli::command());
/// assert!(code.is_success());
/// ```
pub fn run(shell: Shell, cmd: &mut Command) -> ExitCode {
    debug!("Generating {shell} completions");
    write_completions(shell, cmd, &mut io::stdout());
    ExitCode::SUCCESS
}
