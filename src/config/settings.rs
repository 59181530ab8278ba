use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cipher::alphabet::parse_letter;
use crate::cipher::{CipherKind, CipherOptions};
use crate::errors::{CipherDeskError, Result};

/// Project-level configuration, loaded from `.cipherdesk.toml`.
///
/// Every field has a sensible default so CipherDesk works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Cipher to use when `--cipher` is not given.
    #[serde(default = "default_cipher")]
    pub default_cipher: CipherKind,

    /// Padding letter for odd-length Playfair text.
    #[serde(default = "default_playfair_filler")]
    pub playfair_filler: String,

    /// Padding letter for a short final Hill block.
    #[serde(default = "default_hill_filler")]
    pub hill_filler: String,

    /// Reject non-letters in Playfair/Hill text instead of stripping them.
    #[serde(default)]
    pub strict: bool,

    /// Split text output into space-separated groups of this many
    /// characters (0 disables grouping).
    #[serde(default)]
    pub group_size: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_cipher() -> CipherKind {
    CipherKind::Vigenere
}

fn default_playfair_filler() -> String {
    "X".to_string()
}

fn default_hill_filler() -> String {
    "A".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_cipher: default_cipher(),
            playfair_filler: default_playfair_filler(),
            hill_filler: default_hill_filler(),
            strict: false,
            group_size: 0,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".cipherdesk.toml";

    /// Load settings from `<project_dir>/.cipherdesk.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed or holds invalid values,
    /// an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            CipherDeskError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Check that the filler settings are single letters.
    ///
    /// The Playfair filler cannot be `J`: it has no cell of its own.
    pub fn validate(&self) -> Result<()> {
        match parse_letter(&self.playfair_filler) {
            Some('J') => {
                return Err(CipherDeskError::ConfigError(
                    "playfair_filler cannot be 'J' (it shares a cell with 'I')".into(),
                ))
            }
            Some(_) => {}
            None => {
                return Err(CipherDeskError::ConfigError(format!(
                    "playfair_filler must be a single letter (got {:?})",
                    self.playfair_filler
                )))
            }
        }

        if parse_letter(&self.hill_filler).is_none() {
            return Err(CipherDeskError::ConfigError(format!(
                "hill_filler must be a single letter (got {:?})",
                self.hill_filler
            )));
        }

        Ok(())
    }

    /// Convert the settings into engine options.
    pub fn cipher_options(&self) -> Result<CipherOptions> {
        self.validate()?;
        let defaults = CipherOptions::default();
        Ok(CipherOptions {
            playfair_filler: parse_letter(&self.playfair_filler)
                .unwrap_or(defaults.playfair_filler),
            hill_filler: parse_letter(&self.hill_filler).unwrap_or(defaults.hill_filler),
            strict: self.strict,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────
