//! Error types for the scalegen library

use std::io;

/// Library error type for scalegen operations
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// MIDI serialization error
    #[error("midi error: {0}")]
    MidiError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<io::Error> for ScaleError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}
