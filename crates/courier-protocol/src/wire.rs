//! Wire-level constants shared by both message encodings.
//!
//! Every field is big-endian with no padding. The leading size field counts
//! the entire message, itself included, which is what lets a stream-socket
//! receiver recover message boundaries; datagram sockets preserve boundaries
//! anyway but use the same layout.

/// Width of the leading total-size field (i32).
pub const MSG_SIZE_FIELD_SIZE: usize = 4;
/// Width of the request-kind field (u16).
pub const API_KEY_FIELD_SIZE: usize = 2;
/// Width of the format-version field (u16).
pub const API_VERSION_FIELD_SIZE: usize = 2;
/// Width of the reserved flags field (u16).
pub const FLAGS_FIELD_SIZE: usize = 2;
/// Width of the partition-key field (u32), PartitionKey messages only.
pub const PARTITION_KEY_FIELD_SIZE: usize = 4;
/// Width of the topic-length field (i16).
pub const TOPIC_SIZE_FIELD_SIZE: usize = 2;
/// Width of the timestamp field (i64, milliseconds since the Unix epoch).
pub const TIMESTAMP_FIELD_SIZE: usize = 8;
/// Width of the key-length field (i32).
pub const KEY_SIZE_FIELD_SIZE: usize = 4;
/// Width of the value-length field (i32).
pub const VALUE_SIZE_FIELD_SIZE: usize = 4;

/// Fixed overhead of an AnyPartition message: everything except the
/// topic, key, and value payload bytes. 26 bytes.
pub const ANY_PARTITION_FIXED_BYTES: usize = MSG_SIZE_FIELD_SIZE
    + API_KEY_FIELD_SIZE
    + API_VERSION_FIELD_SIZE
    + FLAGS_FIELD_SIZE
    + TOPIC_SIZE_FIELD_SIZE
    + TIMESTAMP_FIELD_SIZE
    + KEY_SIZE_FIELD_SIZE
    + VALUE_SIZE_FIELD_SIZE;

/// Fixed overhead of a PartitionKey message. 30 bytes.
pub const PARTITION_KEY_FIXED_BYTES: usize =
    ANY_PARTITION_FIXED_BYTES + PARTITION_KEY_FIELD_SIZE;

/// Request kind for a message whose destination partition is chosen by the
/// relay.
pub const ANY_PARTITION_API_KEY: u16 = 256;
/// Format version for AnyPartition messages.
pub const ANY_PARTITION_API_VERSION: u16 = 0;

/// Request kind for a message carrying an explicit partition-selection key.
pub const PARTITION_KEY_API_KEY: u16 = 257;
/// Format version for PartitionKey messages.
pub const PARTITION_KEY_API_VERSION: u16 = 0;

/// Maximum topic size in bytes. The relay's topic-length field is a 16-bit
/// signed integer, so this ceiling is an external contract, not a local
/// choice.
pub const MAX_TOPIC_SIZE: usize = (1 << 15) - 1;

/// Loose upper bound on total message size, from the 32-bit signed size
/// field. The practical limit is much smaller: datagram sockets are capped
/// by the OS datagram size, and stream delivery is capped by the broker's
/// configured maximum.
pub const MAX_MSG_SIZE: u64 = (1 << 31) - 1;

/// Total size in bytes of an AnyPartition message with the given topic,
/// key, and value payload sizes.
pub fn any_partition_msg_size(topic_size: usize, key_size: usize, value_size: usize) -> u64 {
    ANY_PARTITION_FIXED_BYTES as u64 + topic_size as u64 + key_size as u64 + value_size as u64
}

/// Total size in bytes of a PartitionKey message with the given topic,
/// key, and value payload sizes.
pub fn partition_key_msg_size(topic_size: usize, key_size: usize, value_size: usize) -> u64 {
    PARTITION_KEY_FIXED_BYTES as u64 + topic_size as u64 + key_size as u64 + value_size as u64
}
