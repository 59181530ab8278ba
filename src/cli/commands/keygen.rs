//! `cipherdesk keygen` — print a random key for the selected cipher.

use std::io::{self, IsTerminal};

use crate::cipher::generate_key;
use crate::cli::output;
use crate::cli::{load_settings, resolve_cipher, Cli};
use crate::errors::Result;

/// Execute the `keygen` command.
pub fn execute(cli: &Cli, length: Option<usize>) -> Result<()> {
    let settings = load_settings()?;
    let cipher = resolve_cipher(cli, &settings);

    let key = generate_key(cipher, length)?;
    println!("{key}");

    // Keep stdout clean when the key is captured by a script.
    if io::stdout().is_terminal() {
        output::tip(&format!(
            "Use it: cipherdesk --cipher {cipher} --key {key} encrypt <TEXT>"
        ));
    }

    Ok(())
}
