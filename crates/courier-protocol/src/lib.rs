//! Wire protocol for the Courier relay daemon.
//!
//! The relay accepts produce requests over a Unix-domain socket and forwards
//! them to the downstream broker on the producer's behalf. This crate
//! implements the client side of that contract:
//! - The two message encodings (AnyPartition and PartitionKey)
//! - Length-prefixed framing so stream sockets can recover message boundaries
//! - Size validation performed before any byte is written
//!
//! Encoding is pure and reentrant: every call allocates a fresh buffer and
//! reads only its own arguments, so concurrent callers need no coordination.

pub mod codec;
pub mod error;
pub mod message;
pub mod wire;

pub use codec::{Decoder, Encoder};
pub use error::{ProtocolError, Result};
pub use message::{
    decode, encode_any_partition, encode_any_partition_into, encode_partition_key,
    encode_partition_key_into, DecodedMessage,
};
pub use wire::{
    any_partition_msg_size, partition_key_msg_size, ANY_PARTITION_API_KEY, MAX_MSG_SIZE,
    MAX_TOPIC_SIZE, PARTITION_KEY_API_KEY,
};
