//! CipherDesk: Vigenère, Playfair and Hill ciphers.
//!
//! The `cipher` module is the engine and can be used on its own:
//!
//! ```
//! use cipherdesk::cipher::{process, CipherKind, Direction};
//!
//! let secret = process("HELLO", "KEY", CipherKind::Vigenere, Direction::Encrypt).unwrap();
//! assert_eq!(secret, "RIJVS");
//! ```
//!
//! `cli` and `config` wire the engine to the `cipherdesk` binary.

pub mod cipher;
pub mod cli;
pub mod config;
pub mod errors;
