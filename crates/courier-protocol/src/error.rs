//! Error types for the Courier wire protocol.

use thiserror::Error;

/// Result type alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors produced while encoding or decoding relay messages.
///
/// Encoding errors are detected before any byte is written, so a failed
/// encode never leaves a partially written buffer behind.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Topic exceeds the 32767-byte limit imposed by the relay's on-wire
    /// 16-bit signed topic-length field.
    #[error("topic of {size} bytes exceeds maximum of {max}", max = crate::wire::MAX_TOPIC_SIZE)]
    TopicTooLarge { size: usize },

    /// Total encoded size would exceed the 32-bit signed size field.
    #[error("encoded message of {size} bytes exceeds maximum of {max}", max = crate::wire::MAX_MSG_SIZE)]
    MessageTooLarge { size: u64 },

    /// Malformed or truncated input while decoding.
    #[error("decode error: {0}")]
    Decode(String),
}
