//! High-level producer client: encode and deliver in one call.

use bytes::Bytes;
use tracing::debug;

use courier_protocol::{encode_any_partition, encode_partition_key};

use crate::config::RelayConfig;
use crate::error::Result;
use crate::transport;

/// Producer handle for one relay.
///
/// Holds only configuration; every send opens its own connection, so a
/// `RelayClient` is cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct RelayClient {
    config: RelayConfig,
}

impl RelayClient {
    /// Create a client for the given relay config.
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    /// Create a client from `COURIER_RELAY_SOCKET` / `COURIER_SOCKET_MODE`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(RelayConfig::from_env()?))
    }

    /// The relay this client talks to.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Encode and deliver one message, letting the relay pick the
    /// destination partition.
    pub async fn send_any_partition(
        &self,
        topic: &[u8],
        timestamp_ms: i64,
        key: &[u8],
        value: &[u8],
    ) -> Result<()> {
        let msg = encode_any_partition(topic, timestamp_ms, key, value)?;
        debug!(bytes = msg.len(), "sending AnyPartition message");
        self.send_encoded(&[msg]).await
    }

    /// Encode and deliver one message routed by an explicit partition key.
    pub async fn send_partition_key(
        &self,
        partition_key: u32,
        topic: &[u8],
        timestamp_ms: i64,
        key: &[u8],
        value: &[u8],
    ) -> Result<()> {
        let msg = encode_partition_key(partition_key, topic, timestamp_ms, key, value)?;
        debug!(bytes = msg.len(), partition_key, "sending PartitionKey message");
        self.send_encoded(&[msg]).await
    }

    /// Deliver already-encoded messages, in order, over one connection.
    pub async fn send_encoded(&self, msgs: &[Bytes]) -> Result<()> {
        transport::send(&self.config.socket_path, self.config.mode, msgs).await
    }
}
