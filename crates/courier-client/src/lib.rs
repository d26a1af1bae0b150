//! Producer-side client for the Courier relay daemon.
//!
//! The relay listens on a Unix-domain socket and forwards produce messages
//! to the downstream broker; delivery at this layer is send-and-hope. This
//! crate supplies the transport (datagram or stream mode), the socket-path
//! configuration, and a thin [`RelayClient`] that encodes and delivers in
//! one call.

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::RelayClient;
pub use config::{RelayConfig, SocketMode};
pub use error::{ClientError, Result};
pub use transport::send;
