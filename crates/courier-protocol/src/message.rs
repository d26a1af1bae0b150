//! The two relay message encodings.
//!
//! An AnyPartition message (request kind 256) lets the relay pick the
//! destination partition; a PartitionKey message (request kind 257) carries
//! an explicit 32-bit partition-selection key between the flags and
//! topic-length fields. Apart from that, the layouts are identical:
//!
//! ```text
//! total size (i32) | kind (u16) | version (u16) | flags (u16)
//!   [partition key (u32)]
//!   topic len (i16) | topic | timestamp ms (i64)
//!   key len (i32) | key | value len (i32) | value
//! ```
//!
//! All lengths are byte lengths. Validation happens before any byte is
//! written, so a failed encode allocates nothing.

use bytes::{Buf, Bytes, BytesMut};

use crate::codec::{Decoder, Encoder};
use crate::error::{ProtocolError, Result};
use crate::wire::{
    any_partition_msg_size, partition_key_msg_size, ANY_PARTITION_API_KEY,
    ANY_PARTITION_API_VERSION, MAX_MSG_SIZE, MAX_TOPIC_SIZE, PARTITION_KEY_API_KEY,
    PARTITION_KEY_API_VERSION,
};

/// A relay message decoded field-by-field. Produced by [`decode`]; used by
/// tests and relay-side tooling, never on the producer hot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub msg_size: i32,
    pub api_key: u16,
    pub api_version: u16,
    pub flags: u16,
    /// Present only for PartitionKey messages.
    pub partition_key: Option<u32>,
    pub topic: Bytes,
    pub timestamp_ms: i64,
    pub key: Bytes,
    pub value: Bytes,
}

fn check_sizes(topic_size: usize, total_size: u64) -> Result<()> {
    if topic_size > MAX_TOPIC_SIZE {
        return Err(ProtocolError::TopicTooLarge { size: topic_size });
    }
    if total_size > MAX_MSG_SIZE {
        return Err(ProtocolError::MessageTooLarge { size: total_size });
    }
    Ok(())
}

/// Encode an AnyPartition produce message.
///
/// `timestamp_ms` is milliseconds since the Unix epoch. `key` and `value`
/// may be empty. Fails with [`ProtocolError::TopicTooLarge`] or
/// [`ProtocolError::MessageTooLarge`] before anything is written.
pub fn encode_any_partition(
    topic: &[u8],
    timestamp_ms: i64,
    key: &[u8],
    value: &[u8],
) -> Result<Bytes> {
    let total = any_partition_msg_size(topic.len(), key.len(), value.len());
    check_sizes(topic.len(), total)?;

    let mut buf = BytesMut::with_capacity(total as usize);
    encode_any_partition_unchecked(&mut buf, total as i32, topic, timestamp_ms, key, value);
    Ok(buf.freeze())
}

/// Append an AnyPartition message to `buf`, for callers batching several
/// messages into one stream write. Validation is identical to
/// [`encode_any_partition`]; on failure `buf` is untouched.
pub fn encode_any_partition_into(
    buf: &mut BytesMut,
    topic: &[u8],
    timestamp_ms: i64,
    key: &[u8],
    value: &[u8],
) -> Result<()> {
    let total = any_partition_msg_size(topic.len(), key.len(), value.len());
    check_sizes(topic.len(), total)?;

    buf.reserve(total as usize);
    encode_any_partition_unchecked(buf, total as i32, topic, timestamp_ms, key, value);
    Ok(())
}

fn encode_any_partition_unchecked(
    buf: &mut BytesMut,
    total: i32,
    topic: &[u8],
    timestamp_ms: i64,
    key: &[u8],
    value: &[u8],
) {
    let mut enc = Encoder::new(buf);
    enc.write_i32(total);
    enc.write_u16(ANY_PARTITION_API_KEY);
    enc.write_u16(ANY_PARTITION_API_VERSION);
    enc.write_u16(0); // flags, reserved
    enc.write_i16(topic.len() as i16);
    enc.write_raw_bytes(topic);
    enc.write_i64(timestamp_ms);
    enc.write_i32(key.len() as i32);
    enc.write_raw_bytes(key);
    enc.write_i32(value.len() as i32);
    enc.write_raw_bytes(value);
}

/// Encode a PartitionKey produce message.
///
/// The relay maps `partition_key` deterministically onto a destination
/// partition. Validation and failure behavior match
/// [`encode_any_partition`].
pub fn encode_partition_key(
    partition_key: u32,
    topic: &[u8],
    timestamp_ms: i64,
    key: &[u8],
    value: &[u8],
) -> Result<Bytes> {
    let total = partition_key_msg_size(topic.len(), key.len(), value.len());
    check_sizes(topic.len(), total)?;

    let mut buf = BytesMut::with_capacity(total as usize);
    encode_partition_key_unchecked(
        &mut buf,
        total as i32,
        partition_key,
        topic,
        timestamp_ms,
        key,
        value,
    );
    Ok(buf.freeze())
}

/// Append a PartitionKey message to `buf`. See
/// [`encode_any_partition_into`].
pub fn encode_partition_key_into(
    buf: &mut BytesMut,
    partition_key: u32,
    topic: &[u8],
    timestamp_ms: i64,
    key: &[u8],
    value: &[u8],
) -> Result<()> {
    let total = partition_key_msg_size(topic.len(), key.len(), value.len());
    check_sizes(topic.len(), total)?;

    buf.reserve(total as usize);
    encode_partition_key_unchecked(buf, total as i32, partition_key, topic, timestamp_ms, key, value);
    Ok(())
}

fn encode_partition_key_unchecked(
    buf: &mut BytesMut,
    total: i32,
    partition_key: u32,
    topic: &[u8],
    timestamp_ms: i64,
    key: &[u8],
    value: &[u8],
) {
    let mut enc = Encoder::new(buf);
    enc.write_i32(total);
    enc.write_u16(PARTITION_KEY_API_KEY);
    enc.write_u16(PARTITION_KEY_API_VERSION);
    enc.write_u16(0); // flags, reserved
    enc.write_u32(partition_key);
    enc.write_i16(topic.len() as i16);
    enc.write_raw_bytes(topic);
    enc.write_i64(timestamp_ms);
    enc.write_i32(key.len() as i32);
    enc.write_raw_bytes(key);
    enc.write_i32(value.len() as i32);
    enc.write_raw_bytes(value);
}

/// Decode one encoded message field-by-field.
///
/// The request-kind field decides whether a partition-key field is expected.
/// Fails with [`ProtocolError::Decode`] on truncation, an unknown request
/// kind, a size field that disagrees with the buffer length, or trailing
/// garbage.
pub fn decode(msg: &[u8]) -> Result<DecodedMessage> {
    let mut buf = msg;
    let mut dec = Decoder::new(&mut buf as &mut dyn Buf);

    let msg_size = dec.read_i32()?;
    if msg_size < 0 || msg_size as usize != msg.len() {
        return Err(ProtocolError::Decode(format!(
            "size field {} disagrees with buffer length {}",
            msg_size,
            msg.len()
        )));
    }

    let api_key = dec.read_u16()?;
    let api_version = dec.read_u16()?;
    let flags = dec.read_u16()?;

    let partition_key = match api_key {
        ANY_PARTITION_API_KEY => None,
        PARTITION_KEY_API_KEY => Some(dec.read_u32()?),
        other => {
            return Err(ProtocolError::Decode(format!(
                "unknown request kind {}",
                other
            )))
        }
    };

    let topic_len = dec.read_i16()?;
    if topic_len < 0 {
        return Err(ProtocolError::Decode(format!(
            "negative topic length {}",
            topic_len
        )));
    }
    let topic = dec.read_raw_bytes(topic_len as usize)?;

    let timestamp_ms = dec.read_i64()?;

    let key_len = dec.read_i32()?;
    if key_len < 0 {
        return Err(ProtocolError::Decode(format!(
            "negative key length {}",
            key_len
        )));
    }
    let key = dec.read_raw_bytes(key_len as usize)?;

    let value_len = dec.read_i32()?;
    if value_len < 0 {
        return Err(ProtocolError::Decode(format!(
            "negative value length {}",
            value_len
        )));
    }
    let value = dec.read_raw_bytes(value_len as usize)?;

    if dec.remaining() != 0 {
        return Err(ProtocolError::Decode(format!(
            "{} trailing bytes after value",
            dec.remaining()
        )));
    }

    Ok(DecodedMessage {
        msg_size,
        api_key,
        api_version,
        flags,
        partition_key,
        topic,
        timestamp_ms,
        key,
        value,
    })
}
