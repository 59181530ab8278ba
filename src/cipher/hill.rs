//! Hill cipher with a 2×2 key matrix over Z/26.
//!
//! The text is treated as a sequence of row vectors of length 2; each
//! block `v` becomes `v · K` (mod 26). Decryption multiplies by the
//! modular inverse of `K`, which exists only when `det(K)` is coprime
//! with 26.
//!
//! Larger matrices are rejected with `InvalidKeySize`.

use crate::cipher::alphabet::{
    index_of, letter_at, letters_only, mod_inverse, modulo, normalize_key, reject_non_letters,
    MODULUS,
};
use crate::cipher::engine::{CipherOptions, Direction};
use crate::errors::{CipherDeskError, Result};

/// Supported matrix order (block size).
pub const ORDER: usize = 2;

/// A 2×2 key matrix with entries in `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatrix {
    cells: [[u32; ORDER]; ORDER],
}

impl KeyMatrix {
    /// Build the matrix row-major from the letters of `key`.
    ///
    /// The normalized key must be exactly `ORDER²` letters long.
    pub fn from_key(key: &str) -> Result<Self> {
        let key = normalize_key(key)?;
        let values: Vec<u32> = key.chars().filter_map(index_of).collect();

        let order = integer_sqrt(values.len());
        if order * order != values.len() || order != ORDER {
            return Err(CipherDeskError::InvalidKeySize { len: values.len() });
        }

        let mut cells = [[0; ORDER]; ORDER];
        for (i, value) in values.into_iter().enumerate() {
            cells[i / ORDER][i % ORDER] = value;
        }
        Ok(Self { cells })
    }

    /// The matrix rows.
    pub fn rows(&self) -> &[[u32; ORDER]; ORDER] {
        &self.cells
    }

    /// Determinant mod 26, in `0..26`.
    pub fn determinant(&self) -> u32 {
        let [[a, b], [c, d]] = self.cells;
        modulo(i64::from(a) * i64::from(d) - i64::from(b) * i64::from(c))
    }

    /// True when the matrix has an inverse mod 26.
    pub fn is_invertible(&self) -> bool {
        mod_inverse(self.determinant()).is_some()
    }

    /// Inverse matrix mod 26: the adjugate scaled by `det⁻¹`.
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        let det_inv = mod_inverse(determinant)
            .ok_or(CipherDeskError::NonInvertibleMatrix { determinant })?;

        let [[a, b], [c, d]] = self.cells;
        let scale = |v: u32| (v * det_inv) % MODULUS;
        Ok(Self {
            cells: [
                [scale(d), scale(MODULUS - b)],
                [scale(MODULUS - c), scale(a)],
            ],
        })
    }

    /// Multiply the row vector `block` by this matrix, mod 26.
    pub fn apply(&self, block: [u32; ORDER]) -> [u32; ORDER] {
        let mut out = [0; ORDER];
        for (j, slot) in out.iter_mut().enumerate() {
            let sum: u32 = (0..ORDER).map(|k| block[k] * self.cells[k][j]).sum();
            *slot = sum % MODULUS;
        }
        out
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = 0;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

/// Encrypt `text` with `key` using default options.
pub fn encode(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Encrypt, &CipherOptions::default())
}

/// Decrypt `text` with `key` using default options.
pub fn decode(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Decrypt, &CipherOptions::default())
}

/// Run Hill in `direction`.
///
/// Non-letters are stripped (or rejected in strict mode) and a short
/// final block is filled with `options.hill_filler`.
pub fn transform(
    text: &str,
    key: &str,
    direction: Direction,
    options: &CipherOptions,
) -> Result<String> {
    if options.strict {
        reject_non_letters(text)?;
    }

    let key_matrix = KeyMatrix::from_key(key)?;
    let matrix = match direction {
        Direction::Encrypt => {
            if !key_matrix.is_invertible() {
                tracing::warn!(
                    determinant = key_matrix.determinant(),
                    "Hill key matrix is not invertible mod 26; ciphertext cannot be decrypted"
                );
            }
            key_matrix
        }
        Direction::Decrypt => key_matrix.inverse()?,
    };

    let filler = index_of(options.hill_filler).unwrap_or(0);
    let values: Vec<u32> = letters_only(text).chars().filter_map(index_of).collect();

    let mut output = String::with_capacity(values.len() + ORDER);
    for chunk in values.chunks(ORDER) {
        let mut block = [filler; ORDER];
        block[..chunk.len()].copy_from_slice(chunk);
        output.extend(matrix.apply(block).into_iter().map(letter_at));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hill_key_matrix() {
        let m = KeyMatrix::from_key("HILL").unwrap();
        assert_eq!(m.rows(), &[[7, 8], [11, 11]]);
        assert_eq!(m.determinant(), 15);
    }

    #[test]
    fn inverse_undoes_the_key() {
        let m = KeyMatrix::from_key("HILL").unwrap();
        let inv = m.inverse().unwrap();
        assert_eq!(inv.rows(), &[[25, 22], [1, 23]]);
        for block in [[0, 0], [7, 8], [25, 1], [13, 13]] {
            assert_eq!(inv.apply(m.apply(block)), block);
        }
    }

    #[test]
    fn encode_known_blocks() {
        assert_eq!(encode("HI", "HILL").unwrap(), "HO");
        assert_eq!(encode("SHORTEXAMPLE", "HILL").unwrap(), "VNZNVOFCPBRC");
        assert_eq!(decode("VNZNVOFCPBRC", "HILL").unwrap(), "SHORTEXAMPLE");
    }

    #[test]
    fn short_block_is_padded() {
        let encoded = encode("abc", "hill").unwrap();
        assert_eq!(encoded, "LLOQ");
        assert_eq!(decode(&encoded, "HILL").unwrap(), "ABCA");
    }

    #[test]
    fn short_block_uses_configured_filler() {
        let options = CipherOptions {
            hill_filler: 'Z',
            ..CipherOptions::default()
        };
        let encoded = transform("ABC", "HILL", Direction::Encrypt, &options).unwrap();
        assert_eq!(encoded, "LLDF");
        assert_eq!(
            transform(&encoded, "HILL", Direction::Decrypt, &options).unwrap(),
            "ABCZ"
        );
    }

    #[test]
    fn non_letters_are_stripped() {
        assert_eq!(
            encode("Attack at dawn!", "HILL").unwrap(),
            encode("ATTACKATDAWN", "HILL").unwrap()
        );
    }

    #[test]
    fn non_invertible_key_fails_to_decode() {
        // det = 0·3 − 1·2 = −2 ≡ 24
        let err = decode("LLOQ", "ABCD").unwrap_err();
        assert!(matches!(
            err,
            CipherDeskError::NonInvertibleMatrix { determinant: 24 }
        ));
        // det = 13
        let err = decode("LLOQ", "NAAB").unwrap_err();
        assert!(matches!(
            err,
            CipherDeskError::NonInvertibleMatrix { determinant: 13 }
        ));
    }

    #[test]
    fn non_invertible_key_still_encodes() {
        assert!(encode("HELLO", "ABCD").is_ok());
    }

    #[test]
    fn key_sizes_other_than_two_by_two_are_rejected() {
        assert!(matches!(
            KeyMatrix::from_key("GYBNQKURP"),
            Err(CipherDeskError::InvalidKeySize { len: 9 })
        ));
        assert!(matches!(
            KeyMatrix::from_key("HILLS"),
            Err(CipherDeskError::InvalidKeySize { len: 5 })
        ));
        assert!(matches!(
            KeyMatrix::from_key("H"),
            Err(CipherDeskError::InvalidKeySize { len: 1 })
        ));
        assert!(matches!(
            KeyMatrix::from_key(""),
            Err(CipherDeskError::EmptyKey)
        ));
    }

    #[test]
    fn strict_mode_rejects_non_letters() {
        let strict = CipherOptions {
            strict: true,
            ..CipherOptions::default()
        };
        assert!(matches!(
            transform("HI THERE", "HILL", Direction::Encrypt, &strict),
            Err(CipherDeskError::UnsupportedCharacter(' '))
        ));
    }

    #[test]
    fn integer_sqrt_floors() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(4), 2);
        assert_eq!(integer_sqrt(8), 2);
        assert_eq!(integer_sqrt(9), 3);
    }
}
