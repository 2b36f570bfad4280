//! Error types shared across the crate

use std::path::PathBuf;

/// Error produced when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color format: {input:?} (expected #RRGGBB)")]
    InvalidColorFormat { input: String },
}

/// Library-level error type.
#[derive(Debug, thiserror::Error)]
pub enum VthemeError {
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Theme mode string was neither "light" nor "dark"
    #[error("unknown theme mode: {0:?} (expected \"light\" or \"dark\")")]
    UnknownMode(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("palette not found: {0}")]
    PaletteNotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VthemeError>;
