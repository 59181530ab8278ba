//! The cipher engine.
//!
//! This module provides:
//! - Shared alphabet and mod-26 helpers (`alphabet`)
//! - Vigenère, Playfair and Hill ciphers (`vigenere`, `playfair`, `hill`)
//! - The `process` entry point and its selector enums (`engine`)
//! - Random key generation (`keygen`)
//!
//! Every operation is a pure function of its inputs.

pub mod alphabet;
pub mod engine;
pub mod hill;
pub mod keygen;
pub mod playfair;
pub mod vigenere;

// Re-export the most commonly used items so callers can write:
//   use crate::cipher::{process, CipherKind, Direction};
pub use engine::{process, process_with, CipherKind, CipherOptions, Direction};
pub use hill::KeyMatrix;
pub use keygen::generate_key;
pub use playfair::PlayfairMatrix;
