//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{Cell, ContentArrangement, Table};
use console::style;

use crate::cipher::{KeyMatrix, PlayfairMatrix};

/// Print a green confirmation on stderr, for side effects that must
/// not mix with results on stdout.
pub fn confirm(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

fn grid() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Print the normalized Vigenère key with each letter's shift.
pub fn print_vigenere_shifts(key: &str) {
    let mut table = grid();
    table.set_header(vec!["Position", "Letter", "Shift"]);
    for (i, c) in key.chars().enumerate() {
        let shift = u32::from(c) - u32::from('A');
        table.add_row(vec![i.to_string(), c.to_string(), shift.to_string()]);
    }
    println!("{table}");
}

/// Print a Playfair square as a 5×5 grid.
pub fn print_playfair_square(matrix: &PlayfairMatrix) {
    let mut table = grid();
    for row in matrix.rows() {
        table.add_row(row.iter().map(|c| Cell::new(c)));
    }
    println!("{table}");
}

/// Print a Hill matrix with a title row.
pub fn print_hill_matrix(title: &str, matrix: &KeyMatrix) {
    let mut table = grid();
    table.set_header(vec![title.to_string()]);
    for row in matrix.rows() {
        table.add_row(row.iter().map(|v| Cell::new(v)));
    }
    println!("{table}");
}
