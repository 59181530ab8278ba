//! `cipherdesk encrypt` / `cipherdesk decrypt` — run a cipher over text.

use serde::Serialize;

use crate::cipher::{process_with, CipherKind, Direction};
use crate::cli::output;
use crate::cli::{
    group_output, load_settings, read_text, resolve_cipher, resolve_key, Cli, OutputArgs,
    OutputFormat,
};
use crate::errors::{CipherDeskError, Result};

/// Machine-readable result printed by `--format json`.
#[derive(Debug, Serialize)]
pub struct CipherReport<'a> {
    pub cipher: CipherKind,
    pub direction: Direction,
    pub input: &'a str,
    pub output: &'a str,
}

/// Execute the `encrypt` or `decrypt` command.
pub fn execute(
    cli: &Cli,
    direction: Direction,
    text: Option<&str>,
    args: &OutputArgs,
) -> Result<()> {
    let settings = load_settings()?;
    let cipher = resolve_cipher(cli, &settings);
    let options = settings.cipher_options()?;

    let input = read_text(text)?;
    let key = resolve_key(cli)?;

    let result = process_with(&input, &key, cipher, direction, &options)?;

    match args.format {
        OutputFormat::Text => println!("{}", group_output(&result, settings.group_size)),
        OutputFormat::Json => {
            let report = CipherReport {
                cipher,
                direction,
                input: &input,
                output: &result,
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CipherDeskError::SerializationError(e.to_string()))?;
            println!("{json}");
        }
    }

    if args.copy {
        match copy_to_clipboard(&result) {
            Ok(()) => output::confirm("Result copied to clipboard"),
            // A missing clipboard (headless session) should not fail the command.
            Err(e) => output::warning(&format!("Could not copy to clipboard: {e}")),
        }
    }

    Ok(())
}

fn copy_to_clipboard(text: &str) -> std::result::Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_lowercase_names() {
        let report = CipherReport {
            cipher: CipherKind::Vigenere,
            direction: Direction::Encrypt,
            input: "HELLO",
            output: "RIJVS",
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cipher"], "vigenere");
        assert_eq!(json["direction"], "encrypt");
        assert_eq!(json["output"], "RIJVS");
    }
}
