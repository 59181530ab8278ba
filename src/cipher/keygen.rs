//! Random key generation for each cipher.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cipher::alphabet::letter_at;
use crate::cipher::engine::CipherKind;
use crate::cipher::hill::KeyMatrix;
use crate::errors::{CipherDeskError, Result};

/// Default length of a generated Vigenère key.
pub const DEFAULT_VIGENERE_LEN: usize = 8;

/// Generate a random key suitable for `cipher`.
///
/// `length` only applies to Vigenère; Playfair keys are always a full
/// 25-letter square and Hill keys always 4 letters.
pub fn generate_key(cipher: CipherKind, length: Option<usize>) -> Result<String> {
    let mut rng = rand::rng();
    match cipher {
        CipherKind::Vigenere => {
            let len = length.unwrap_or(DEFAULT_VIGENERE_LEN);
            if len == 0 {
                return Err(CipherDeskError::EmptyKey);
            }
            Ok(random_letters(&mut rng, len))
        }
        CipherKind::Playfair => {
            let mut letters: Vec<char> = "ABCDEFGHIKLMNOPQRSTUVWXYZ".chars().collect();
            letters.shuffle(&mut rng);
            Ok(letters.into_iter().collect())
        }
        CipherKind::Hill => loop {
            // About 30% of 2×2 matrices are invertible mod 26.
            let key = random_letters(&mut rng, 4);
            if KeyMatrix::from_key(&key)?.is_invertible() {
                return Ok(key);
            }
        },
    }
}

fn random_letters(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| letter_at(rng.random_range(0..26))).collect()
}
