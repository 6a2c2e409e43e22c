//! Error types for the BPE codec.

use thiserror::Error;

/// Main error type for the codec.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Decoding encountered a token ID with no vocabulary entry
    #[error("unknown token ID: {0}")]
    UnknownToken(u32),

    /// Decoded byte stream is not valid UTF-8
    #[error("malformed UTF-8 at byte {offset}: {reason}")]
    MalformedUtf8 { offset: usize, reason: String },

    /// Merge rule referencing token IDs that do not exist yet
    #[error("invalid merge rule: {0}")]
    InvalidMerge(String),

    /// Error loading a persisted vocabulary
    #[error("load error: {0}")]
    Load(String),

    /// Error saving a vocabulary
    #[error("save error: {0}")]
    Save(String),
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
