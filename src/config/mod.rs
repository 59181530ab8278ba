//! Project configuration (`.cipherdesk.toml`).

pub mod settings;

pub use settings::Settings;
