//! Playfair digraph cipher.
//!
//! Text is reduced to uppercase letters (J folded into I), padded to an
//! even length and processed two letters at a time against a 5×5 square
//! built from the key.
//!
//! Equal letters inside one pair are not split with a filler, so this is
//! not the canonical textbook variant; `encode("BALLOON")` pairs
//! `LL` as-is. Decoding the result still recovers the formatted text.

use crate::cipher::alphabet::{index_of, is_letter, letters_only, reject_non_letters};
use crate::cipher::engine::{CipherOptions, Direction};
use crate::errors::Result;

/// Side length of the square.
pub const SIZE: usize = 5;

/// The 25-letter alphabet used to fill the square (no J).
const ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// A 5×5 Playfair square plus a letter → (row, col) lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairMatrix {
    cells: [[char; SIZE]; SIZE],
    positions: [Option<(usize, usize)>; 26],
}

impl PlayfairMatrix {
    /// Build the square for `key`.
    ///
    /// Key letters come first in order of appearance (duplicates, J and
    /// non-letters dropped), then the rest of the alphabet. An empty key
    /// yields the plain alphabet square.
    pub fn build(key: &str) -> Self {
        let mut cells = [[' '; SIZE]; SIZE];
        let mut positions = [None; 26];

        let key_letters = letters_only(key);
        let letters = key_letters
            .chars()
            .filter(|c| *c != 'J')
            .chain(ALPHABET.chars());

        let mut placed = 0;
        for c in letters {
            let Some(idx) = index_of(c) else { continue };
            if positions[idx as usize].is_some() {
                continue;
            }
            let (row, col) = (placed / SIZE, placed % SIZE);
            cells[row][col] = c;
            positions[idx as usize] = Some((row, col));
            placed += 1;
        }

        Self { cells, positions }
    }

    /// The letter at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row % SIZE][col % SIZE]
    }

    /// The square as rows of letters.
    pub fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.cells
    }

    /// Position of `c` in the square; J resolves to I's cell.
    pub fn position(&self, c: char) -> Option<(usize, usize)> {
        let c = fold_j(c.to_ascii_uppercase());
        index_of(c).and_then(|idx| self.positions[idx as usize])
    }

    /// Substitute one pair of letters.
    ///
    /// Same row shifts right (encrypt) or left (decrypt), same column
    /// shifts down or up, otherwise each letter keeps its row and takes
    /// the other letter's column.
    pub fn substitute_pair(&self, a: char, b: char, direction: Direction) -> Option<(char, char)> {
        let (row_a, col_a) = self.position(a)?;
        let (row_b, col_b) = self.position(b)?;
        let step = match direction {
            Direction::Encrypt => 1,
            Direction::Decrypt => SIZE - 1,
        };

        let pair = if row_a == row_b {
            (self.at(row_a, col_a + step), self.at(row_b, col_b + step))
        } else if col_a == col_b {
            (self.at(row_a + step, col_a), self.at(row_b + step, col_b))
        } else {
            (self.at(row_a, col_b), self.at(row_b, col_a))
        };
        Some(pair)
    }
}

fn fold_j(c: char) -> char {
    if c == 'J' {
        'I'
    } else {
        c
    }
}

/// Reduce `text` to Playfair form with the default `X` padding.
pub fn format_for_playfair(text: &str) -> String {
    format_with_filler(text, 'X')
}

/// Reduce `text` to uppercase letters, fold J into I and pad to even
/// length with `filler`.
pub fn format_with_filler(text: &str, filler: char) -> String {
    let mut formatted: String = letters_only(text).chars().map(fold_j).collect();
    if formatted.len() % 2 != 0 {
        formatted.push(fold_j(filler.to_ascii_uppercase()));
    }
    formatted
}

/// Encrypt `text` with `key` using default options.
pub fn encode(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Encrypt, &CipherOptions::default())
}

/// Decrypt `text` with `key` using default options.
pub fn decode(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Decrypt, &CipherOptions::default())
}

/// Run Playfair in `direction`.
pub fn transform(
    text: &str,
    key: &str,
    direction: Direction,
    options: &CipherOptions,
) -> Result<String> {
    if options.strict {
        reject_non_letters(text)?;
    }

    let filler = if is_letter(options.playfair_filler) {
        options.playfair_filler
    } else {
        CipherOptions::default().playfair_filler
    };

    let matrix = PlayfairMatrix::build(key);
    let formatted: Vec<char> = format_with_filler(text, filler).chars().collect();

    let mut output = String::with_capacity(formatted.len());
    for pair in formatted.chunks_exact(2) {
        // Every formatted letter is in the square, so lookup cannot miss.
        if let Some((a, b)) = matrix.substitute_pair(pair[0], pair[1], direction) {
            output.push(a);
            output.push(b);
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(matrix: &PlayfairMatrix, r: usize) -> String {
        matrix.rows()[r].iter().collect()
    }

    #[test]
    fn monarchy_square() {
        let m = PlayfairMatrix::build("MONARCHY");
        assert_eq!(row(&m, 0), "MONAR");
        assert_eq!(row(&m, 1), "CHYBD");
        assert_eq!(row(&m, 2), "EFGIK");
        assert_eq!(row(&m, 3), "LPQST");
        assert_eq!(row(&m, 4), "UVWXZ");
    }

    #[test]
    fn square_holds_each_letter_once() {
        for key in ["", "JJJJ", "playfair example", "ZYXWVUTSRQPONMLKIHGFEDCBA", "a1b2c3"] {
            let m = PlayfairMatrix::build(key);
            let mut seen: Vec<char> = m.rows().iter().flatten().copied().collect();
            seen.sort_unstable();
            let expected: Vec<char> = ALPHABET.chars().collect();
            assert_eq!(seen, expected, "key {key:?}");
        }
    }

    #[test]
    fn lookup_table_matches_cells() {
        let m = PlayfairMatrix::build("MONARCHY");
        assert_eq!(m.position('H'), Some((1, 1)));
        assert_eq!(m.position('e'), Some((2, 0)));
        assert_eq!(m.position('J'), m.position('I'));
        assert_eq!(m.position('?'), None);
    }

    #[test]
    fn formatting_pads_and_folds() {
        assert_eq!(format_for_playfair("Hello!"), "HELLOX");
        assert_eq!(format_for_playfair("jump"), "IUMP");
        assert_eq!(format_for_playfair(""), "");
        assert_eq!(format_with_filler("abc", 'q'), "ABCQ");
    }

    #[test]
    fn textbook_instruments() {
        assert_eq!(encode("instruments", "MONARCHY").unwrap(), "GATLMZCLRQXA");
        assert_eq!(decode("GATLMZCLRQXA", "MONARCHY").unwrap(), "INSTRUMENTSX");
    }

    #[test]
    fn rectangle_rule_swaps_columns() {
        // H(1,1) and E(2,0) form a rectangle.
        assert_eq!(encode("HE", "MONARCHY").unwrap(), "CF");
        assert_eq!(decode("CF", "MONARCHY").unwrap(), "HE");
    }

    #[test]
    fn rectangle_rule_is_self_inverse() {
        let m = PlayfairMatrix::build("MONARCHY");
        let once = m.substitute_pair('H', 'E', Direction::Encrypt).unwrap();
        let twice = m.substitute_pair(once.0, once.1, Direction::Encrypt).unwrap();
        assert_eq!(twice, ('H', 'E'));
    }

    #[test]
    fn row_and_column_rules_wrap() {
        let m = PlayfairMatrix::build("MONARCHY");
        // Same row, last column wraps to first.
        assert_eq!(m.substitute_pair('A', 'R', Direction::Encrypt), Some(('R', 'M')));
        assert_eq!(m.substitute_pair('R', 'M', Direction::Decrypt), Some(('A', 'R')));
        // Same column, last row wraps to first.
        assert_eq!(m.substitute_pair('L', 'U', Direction::Encrypt), Some(('U', 'M')));
        assert_eq!(m.substitute_pair('U', 'M', Direction::Decrypt), Some(('L', 'U')));
    }

    #[test]
    fn repeated_letters_are_not_split() {
        let encoded = encode("BALLOON", "MONARCHY").unwrap();
        assert_eq!(encoded.len(), 8);
        assert_eq!(decode(&encoded, "MONARCHY").unwrap(), "BALLOONX");
    }

    #[test]
    fn strict_mode_rejects_non_letters() {
        let strict = CipherOptions {
            strict: true,
            ..CipherOptions::default()
        };
        assert!(transform("HIDE IT", "KEY", Direction::Encrypt, &strict).is_err());
        assert!(transform("HIDEIT", "KEY", Direction::Encrypt, &strict).is_ok());
    }
}
