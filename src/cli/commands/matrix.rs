//! `cipherdesk matrix` — show the matrix a key produces.

use crate::cipher::alphabet::normalize_key;
use crate::cipher::{CipherKind, KeyMatrix, PlayfairMatrix};
use crate::cli::output;
use crate::cli::{load_settings, resolve_cipher, resolve_key, Cli};
use crate::errors::Result;

/// Execute the `matrix` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;
    let cipher = resolve_cipher(cli, &settings);
    let key = resolve_key(cli)?;

    match cipher {
        CipherKind::Vigenere => {
            let normalized = normalize_key(&key)?;
            output::info(&format!("Vigenere key {normalized} ({} letters)", normalized.len()));
            output::print_vigenere_shifts(&normalized);
        }
        CipherKind::Playfair => {
            output::info("Playfair square (J shares a cell with I)");
            output::print_playfair_square(&PlayfairMatrix::build(&key));
        }
        CipherKind::Hill => {
            let matrix = KeyMatrix::from_key(&key)?;
            output::print_hill_matrix("Key matrix", &matrix);
            output::info(&format!("Determinant mod 26: {}", matrix.determinant()));

            match matrix.inverse() {
                Ok(inverse) => output::print_hill_matrix("Inverse mod 26", &inverse),
                Err(e) => {
                    output::warning(&e.to_string());
                    output::tip("Pick a key whose determinant is odd and not 13, or run `cipherdesk --cipher hill keygen`.");
                }
            }
        }
    }

    Ok(())
}
