//! Error types for khi_robot_msgs
//!
//! Provides a unified error type for all codec operations.

use thiserror::Error;

/// Result type alias using MsgError
pub type Result<T> = std::result::Result<T, MsgError>;

/// Unified error type for message encoding and decoding
#[derive(Debug, Error)]
pub enum MsgError {
    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MsgError {
    /// True for buffer underrun and malformed input failures
    pub fn is_decoding(&self) -> bool {
        matches!(self, MsgError::Decoding(_))
    }

    /// True when a value could not be written
    pub fn is_encoding(&self) -> bool {
        matches!(self, MsgError::Encoding(_))
    }
}
