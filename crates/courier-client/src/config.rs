//! Client configuration.
//!
//! The relay's socket path is deployment-specific and always supplied by the
//! operator, either directly or through the environment.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Environment variable naming the relay's listening socket path.
pub const RELAY_SOCKET_ENV: &str = "COURIER_RELAY_SOCKET";
/// Environment variable selecting the socket mode (`datagram` or `stream`).
pub const SOCKET_MODE_ENV: &str = "COURIER_SOCKET_MODE";

/// Delivery mode for the relay socket.
///
/// This is a transport-level choice; the message encoding is identical in
/// both modes. Datagram sockets preserve message boundaries on their own,
/// stream sockets rely on the leading size field of each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocketMode {
    #[default]
    Datagram,
    Stream,
}

impl FromStr for SocketMode {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "datagram" => Ok(SocketMode::Datagram),
            "stream" => Ok(SocketMode::Stream),
            other => Err(ClientError::Config(format!(
                "unknown socket mode {:?}, expected \"datagram\" or \"stream\"",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SocketMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocketMode::Datagram => f.write_str("datagram"),
            SocketMode::Stream => f.write_str("stream"),
        }
    }
}

/// Where and how to reach the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Path to the relay's listening Unix-domain socket.
    pub socket_path: PathBuf,
    /// Delivery mode; defaults to datagram.
    #[serde(default)]
    pub mode: SocketMode,
}

impl RelayConfig {
    /// Config for the given socket path, in datagram mode.
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
            mode: SocketMode::Datagram,
        }
    }

    /// Select the socket mode.
    pub fn with_mode(mut self, mode: SocketMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build a config from `COURIER_RELAY_SOCKET` and (optionally)
    /// `COURIER_SOCKET_MODE`.
    pub fn from_env() -> Result<Self> {
        let socket_path = std::env::var(RELAY_SOCKET_ENV)
            .map_err(|_| ClientError::Config(format!("{} is not set", RELAY_SOCKET_ENV)))?;

        let mode = match std::env::var(SOCKET_MODE_ENV) {
            Ok(v) => v.parse()?,
            Err(_) => SocketMode::default(),
        };

        Ok(Self {
            socket_path: PathBuf::from(socket_path),
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_from_str() {
        assert_eq!("datagram".parse::<SocketMode>().unwrap(), SocketMode::Datagram);
        assert_eq!("stream".parse::<SocketMode>().unwrap(), SocketMode::Stream);
        assert!("tcp".parse::<SocketMode>().is_err());
    }

    #[test]
    fn mode_defaults_to_datagram() {
        let cfg = RelayConfig::new("/run/courier/relay.sock");
        assert_eq!(cfg.mode, SocketMode::Datagram);

        let cfg: RelayConfig =
            serde_json::from_str(r#"{"socket_path": "/run/courier/relay.sock"}"#).unwrap();
        assert_eq!(cfg.mode, SocketMode::Datagram);
    }
}
