//! `cipherdesk completions` — generate shell completion scripts.
//!
//! The shell names come from `clap_complete::Shell`, so clap rejects
//! unknown shells before this runs:
//!   cipherdesk completions bash > ~/.bash_completion.d/cipherdesk

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout();
    write_completions(shell, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Write the completion script for `shell` into `out`.
///
/// The script is generated from the live `Cli` definition, so it always
/// offers the current subcommands and the `--cipher` values.
pub fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}
