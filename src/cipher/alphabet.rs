//! Shared alphabet helpers for every cipher.
//!
//! All arithmetic happens over the 26 Latin letters `A..=Z`, mapped to
//! the indices `0..26`. Only ASCII letters count as letters; anything
//! else is left to each cipher's own non-letter policy.

use crate::errors::{CipherDeskError, Result};

/// Size of the alphabet and modulus of all cipher arithmetic.
pub const MODULUS: u32 = 26;

/// Returns true for `A..=Z` and `a..=z`.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Index of a letter in the alphabet (`'A'`/`'a'` → 0, `'Z'`/`'z'` → 25).
///
/// Returns `None` for non-letters.
pub fn index_of(c: char) -> Option<u32> {
    if is_letter(c) {
        Some(u32::from(c.to_ascii_uppercase()) - u32::from(b'A'))
    } else {
        None
    }
}

/// Uppercase letter at `index mod 26`.
pub fn letter_at(index: u32) -> char {
    char::from(b'A' + (index % MODULUS) as u8)
}

/// Uppercase the letters of `text` and drop everything else.
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(|c| is_letter(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Fail with `UnsupportedCharacter` on the first non-letter in `text`.
pub fn reject_non_letters(text: &str) -> Result<()> {
    match text.chars().find(|c| !is_letter(*c)) {
        Some(c) => Err(CipherDeskError::UnsupportedCharacter(c)),
        None => Ok(()),
    }
}

/// Normalize a cipher key: uppercase letters only, non-letters dropped.
///
/// A key with no letters left is an `EmptyKey` error.
pub fn normalize_key(key: &str) -> Result<String> {
    let normalized = letters_only(key);
    if normalized.is_empty() {
        return Err(CipherDeskError::EmptyKey);
    }
    Ok(normalized)
}

/// Validate a single-letter setting (padding letters) and return it uppercased.
pub fn parse_letter(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_letter(c) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Non-negative remainder of `value` modulo 26.
pub fn modulo(value: i64) -> u32 {
    value.rem_euclid(i64::from(MODULUS)) as u32
}

/// Multiplicative inverse of `a` modulo 26, if one exists.
///
/// An inverse exists iff `gcd(a, 26) == 1`. The search space is tiny,
/// so a linear scan is enough.
pub fn mod_inverse(a: u32) -> Option<u32> {
    let a = a % MODULUS;
    (1..MODULUS).find(|x| (a * x) % MODULUS == 1)
}
