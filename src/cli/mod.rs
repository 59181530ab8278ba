//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};

use clap::Parser;

use zeroize::Zeroizing;

use crate::cipher::CipherKind;
use crate::config::Settings;
use crate::errors::{CipherDeskError, Result};

/// CipherDesk CLI: classical cipher workbench.
#[derive(Parser)]
#[command(
    name = "cipherdesk",
    about = "Classical cipher workbench: Vigenere, Playfair and Hill",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Cipher to use (default: from .cipherdesk.toml, else vigenere)
    #[arg(short, long, value_enum, global = true)]
    pub cipher: Option<CipherKind>,

    /// Cipher key (prompted for when omitted)
    #[arg(short, long, env = "CIPHERDESK_KEY", hide_env_values = true, global = true)]
    pub key: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt text (argument, piped stdin, or prompt)
    Encrypt {
        /// Plaintext (omit to read stdin or prompt)
        text: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Decrypt text (argument, piped stdin, or prompt)
    Decrypt {
        /// Ciphertext (omit to read stdin or prompt)
        text: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the matrix derived from the key
    Matrix,

    /// Generate a random key for the selected cipher
    Keygen {
        /// Key length (Vigenere only, default: 8)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum, ignore_case = true)]
        shell: clap_complete::Shell,
    },
}

/// How to present a cipher result.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also copy the result to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Output formats for `encrypt`/`decrypt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load `.cipherdesk.toml` from the current directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// The cipher to use: `--cipher` wins over the configured default.
pub fn resolve_cipher(cli: &Cli, settings: &Settings) -> CipherKind {
    cli.cipher.unwrap_or(settings.default_cipher)
}

/// Get the cipher key, trying in order:
/// 1. `--key` / `CIPHERDESK_KEY`
/// 2. Interactive hidden prompt
///
/// Returns `Zeroizing<String>` so the key is wiped from memory on drop.
pub fn resolve_key(cli: &Cli) -> Result<Zeroizing<String>> {
    if let Some(key) = &cli.key {
        return Ok(Zeroizing::new(key.clone()));
    }

    let key = dialoguer::Password::new()
        .with_prompt("Enter cipher key")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| CipherDeskError::CommandFailed(format!("key prompt: {e}")))?;
    Ok(Zeroizing::new(key))
}

/// Get the text to process from one of three sources.
pub fn read_text(text: Option<&str>) -> Result<String> {
    if let Some(t) = text {
        // Source 1: Inline text on the command line.
        Ok(t.to_string())
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    } else {
        // Source 3: Interactive prompt.
        dialoguer::Input::<String>::new()
            .with_prompt("Enter text")
            .interact_text()
            .map_err(|e| CipherDeskError::CommandFailed(format!("input prompt: {e}")))
    }
}

/// Split `text` into space-separated groups of `size` characters.
///
/// A size of 0 returns the text unchanged.
pub fn group_output(text: &str, size: usize) -> String {
    if size == 0 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
