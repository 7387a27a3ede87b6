//! # Error Types
//!
//! Custom error types for FDAI Replay using `thiserror`.

use thiserror::Error;

/// Main error type for FDAI Replay
#[derive(Debug, Error)]
pub enum FdaiReplayError {
    /// No serial device could be opened at any of the candidate paths
    #[error("no FDAI device found (tried: {0})")]
    SerialPortNotFound(String),

    /// Serial port I/O errors
    #[error("serial error: {0}")]
    Serial(String),

    /// A log line matched the sample pattern but a captured field is invalid
    #[error("malformed sample in line {line:?}: {reason}")]
    MalformedSample { line: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for FDAI Replay
pub type Result<T> = std::result::Result<T, FdaiReplayError>;
