//! Error types for the Courier client.

use std::path::PathBuf;

use thiserror::Error;

use courier_protocol::ProtocolError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced to producer code.
///
/// Transport failures are not retried here; the caller decides whether to
/// retry, log, or abort.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Message failed validation while encoding.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A socket operation against the relay failed.
    #[error("{op} failed on {}: {source}", .path.display())]
    Transport {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub(crate) fn transport(
        op: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        ClientError::Transport {
            op,
            path: path.into(),
            source,
        }
    }
}
