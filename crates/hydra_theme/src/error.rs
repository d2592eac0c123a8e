use thiserror::Error;

use crate::theme::ThemeField;

/// A color string that is not six hex digits (with an optional leading `#`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color `{0}` (expected #RRGGBB)")]
    InvalidHex(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: ThemeField,
        value: f64,
        expected: &'static str,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("config error: {0}")]
    Config(String),
}
