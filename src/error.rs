//! Error types.

use thiserror::Error;

/// Reasons a generation request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("at least one character class must be enabled")]
    NoClasses,
    #[error("length {length} cannot hold one character from each of {classes} classes")]
    TooShort { length: usize, classes: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read settings: {0}")]
    ConfigRead(#[from] toml::de::Error),

    #[error("failed to write settings: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("length {length} is above the limit of {max}")]
    LengthLimit { length: usize, max: usize },

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;
