use thiserror::Error;

/// All errors that can occur in CipherDesk.
#[derive(Debug, Error)]
pub enum CipherDeskError {
    // --- Engine errors ---
    #[error("Key is empty — it must contain at least one letter")]
    EmptyKey,

    #[error("Invalid key size: {len} letters (Hill keys must be exactly 4 letters, a 2×2 matrix)")]
    InvalidKeySize { len: usize },

    #[error("Key matrix is not invertible mod 26 (determinant {determinant})")]
    NonInvertibleMatrix { determinant: u32 },

    #[error("Unsupported character {0:?} — only letters A-Z are accepted")]
    UnsupportedCharacter(char),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for CipherDesk results.
pub type Result<T> = std::result::Result<T, CipherDeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_have_readable_messages() {
        assert!(CipherDeskError::EmptyKey.to_string().contains("empty"));
        assert!(CipherDeskError::InvalidKeySize { len: 9 }
            .to_string()
            .contains("9 letters"));
        assert_eq!(
            CipherDeskError::NonInvertibleMatrix { determinant: 24 }.to_string(),
            "Key matrix is not invertible mod 26 (determinant 24)"
        );
        assert!(CipherDeskError::UnsupportedCharacter('!')
            .to_string()
            .contains("'!'"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CipherDeskError = io.into();
        assert!(matches!(err, CipherDeskError::Io(_)));
    }
}
