//! The single entry point callers use to run a cipher.
//!
//! A caller supplies the text, the key, which cipher family to use and
//! which direction to run it in, and gets one result string back (or an
//! error). Nothing is kept between calls.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cipher::{hill, playfair, vigenere};
use crate::errors::Result;

/// The cipher families the engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// Vigenère polyalphabetic substitution.
    Vigenere,
    /// Playfair digraph substitution over a 5×5 square.
    Playfair,
    /// Hill cipher with a 2×2 key matrix.
    Hill,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherKind::Vigenere => "vigenere",
            CipherKind::Playfair => "playfair",
            CipherKind::Hill => "hill",
        };
        f.write_str(name)
    }
}

/// Which way to run a cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Tunables for the block ciphers.
///
/// The defaults reproduce the classic behavior: Playfair pads with `X`,
/// Hill pads with `A`, and non-letters are silently stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherOptions {
    /// Letter appended to odd-length Playfair text.
    pub playfair_filler: char,
    /// Letter used to fill a short final Hill block.
    pub hill_filler: char,
    /// Reject non-letters in Playfair/Hill text instead of stripping them.
    pub strict: bool,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            playfair_filler: 'X',
            hill_filler: 'A',
            strict: false,
        }
    }
}

/// Run `cipher` over `text` in `direction` with default options.
pub fn process(text: &str, key: &str, cipher: CipherKind, direction: Direction) -> Result<String> {
    process_with(text, key, cipher, direction, &CipherOptions::default())
}

/// Run `cipher` over `text` in `direction` with explicit options.
pub fn process_with(
    text: &str,
    key: &str,
    cipher: CipherKind,
    direction: Direction,
    options: &CipherOptions,
) -> Result<String> {
    tracing::debug!(
        %cipher,
        %direction,
        text_len = text.chars().count(),
        strict = options.strict,
        "processing text"
    );

    match (cipher, direction) {
        (CipherKind::Vigenere, Direction::Encrypt) => vigenere::encode(text, key),
        (CipherKind::Vigenere, Direction::Decrypt) => vigenere::decode(text, key),
        (CipherKind::Playfair, direction) => playfair::transform(text, key, direction, options),
        (CipherKind::Hill, direction) => hill::transform(text, key, direction, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CipherDeskError;

    #[test]
    fn dispatches_to_each_cipher() {
        assert_eq!(
            process("HELLO", "KEY", CipherKind::Vigenere, Direction::Encrypt).unwrap(),
            "RIJVS"
        );
        assert_eq!(
            process("HI", "HILL", CipherKind::Hill, Direction::Encrypt).unwrap(),
            "HO"
        );
        assert_eq!(
            process("instruments", "monarchy", CipherKind::Playfair, Direction::Encrypt)
                .unwrap(),
            "GATLMZCLRQXA"
        );
    }

    #[test]
    fn errors_surface_unchanged() {
        let err = process("HI", "ABCD", CipherKind::Hill, Direction::Decrypt).unwrap_err();
        assert!(matches!(err, CipherDeskError::NonInvertibleMatrix { .. }));
    }

    #[test]
    fn options_reach_the_block_ciphers() {
        let options = CipherOptions {
            playfair_filler: 'Q',
            ..CipherOptions::default()
        };
        let padded_x = process("ABC", "KEY", CipherKind::Playfair, Direction::Encrypt).unwrap();
        let padded_q =
            process_with("ABC", "KEY", CipherKind::Playfair, Direction::Encrypt, &options)
                .unwrap();
        assert_ne!(padded_x, padded_q);
        assert_eq!(&padded_x[..2], &padded_q[..2]);
    }

    #[test]
    fn names_are_lowercase() {
        assert_eq!(CipherKind::Playfair.to_string(), "playfair");
        assert_eq!(Direction::Decrypt.to_string(), "decrypt");
    }
}
