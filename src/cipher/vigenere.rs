//! Vigenère polyalphabetic substitution.
//!
//! Each letter of the text is shifted by the corresponding key letter.
//! The key cursor advances on *every* character position, including
//! non-letters, which are emitted uppercased but otherwise unchanged.
//! Output therefore always has the same number of characters as input.

use crate::cipher::alphabet::{index_of, letter_at, modulo, normalize_key};
use crate::errors::Result;

/// Encrypt `text` with `key`.
pub fn encode(text: &str, key: &str) -> Result<String> {
    apply(text, key, |c, k| modulo(i64::from(c) + i64::from(k)))
}

/// Decrypt `text` with `key`.
pub fn decode(text: &str, key: &str) -> Result<String> {
    apply(text, key, |c, k| modulo(i64::from(c) - i64::from(k)))
}

/// Walk the text, combining each letter with the key letter at the same
/// position (mod key length).
fn apply(text: &str, key: &str, shift: impl Fn(u32, u32) -> u32) -> Result<String> {
    let key: Vec<u32> = normalize_key(key)?
        .chars()
        .filter_map(index_of)
        .collect();

    let output = text
        .chars()
        .enumerate()
        .map(|(i, c)| match index_of(c) {
            Some(c) => letter_at(shift(c, key[i % key.len()])),
            None => c.to_ascii_uppercase(),
        })
        .collect();

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CipherDeskError;

    #[test]
    fn classic_hello_key() {
        assert_eq!(encode("HELLO", "KEY").unwrap(), "RIJVS");
        assert_eq!(decode("RIJVS", "KEY").unwrap(), "HELLO");
    }

    #[test]
    fn lowercase_input_is_uppercased() {
        assert_eq!(encode("hello", "key").unwrap(), "RIJVS");
    }

    #[test]
    fn non_letters_pass_through_and_advance_the_key() {
        // The space and '!' consume key positions too.
        let encoded = encode("Attack at dawn!", "LEMON").unwrap();
        assert_eq!(encoded, "LXFOPV MH OEIB!");
        assert_eq!(decode(&encoded, "LEMON").unwrap(), "ATTACK AT DAWN!");
    }

    #[test]
    fn output_length_matches_input() {
        let text = "Mixed 123 ünïcode text";
        let encoded = encode(text, "abc").unwrap();
        assert_eq!(encoded.chars().count(), text.chars().count());
    }

    #[test]
    fn key_non_letters_are_ignored() {
        assert_eq!(encode("HELLO", "K-E Y").unwrap(), "RIJVS");
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(encode("HELLO", ""), Err(CipherDeskError::EmptyKey)));
        assert!(matches!(decode("HELLO", "12"), Err(CipherDeskError::EmptyKey)));
    }

    #[test]
    fn empty_text_gives_empty_output() {
        assert_eq!(encode("", "KEY").unwrap(), "");
    }
}
