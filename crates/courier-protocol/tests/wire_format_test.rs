//! Wire format verification tests for relay compatibility.
//!
//! These tests pin the exact byte layout the relay expects, so any
//! conforming client implementation in any language produces identical
//! buffers.

use courier_protocol::{
    decode, encode_any_partition, encode_partition_key, ANY_PARTITION_API_KEY,
    PARTITION_KEY_API_KEY,
};

#[test]
fn any_partition_exact_bytes() {
    let msg = encode_any_partition(b"topic", 0x0102030405060708, b"k", b"val").unwrap();

    let expected = vec![
        0x00, 0x00, 0x00, 0x23, // total size: 26 + 5 + 1 + 3 = 35
        0x01, 0x00, // request kind: 256
        0x00, 0x00, // format version: 0
        0x00, 0x00, // flags: 0
        0x00, 0x05, // topic length: 5
        b't', b'o', b'p', b'i', b'c',
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, // timestamp
        0x00, 0x00, 0x00, 0x01, // key length: 1
        b'k',
        0x00, 0x00, 0x00, 0x03, // value length: 3
        b'v', b'a', b'l',
    ];

    assert_eq!(msg.to_vec(), expected);
}

#[test]
fn partition_key_exact_bytes() {
    let msg = encode_partition_key(0xdeadbeef, b"t", -2, b"", b"x").unwrap();

    let expected = vec![
        0x00, 0x00, 0x00, 0x20, // total size: 30 + 1 + 0 + 1 = 32
        0x01, 0x01, // request kind: 257
        0x00, 0x00, // format version: 0
        0x00, 0x00, // flags: 0
        0xde, 0xad, 0xbe, 0xef, // partition key
        0x00, 0x01, // topic length: 1
        b't',
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, // timestamp: -2
        0x00, 0x00, 0x00, 0x00, // key length: 0
        0x00, 0x00, 0x00, 0x01, // value length: 1
        b'x',
    ];

    assert_eq!(msg.to_vec(), expected);
}

#[test]
fn leading_size_field_equals_buffer_length() {
    let cases: Vec<(&[u8], &[u8], &[u8])> = vec![
        (b"a", b"", b""),
        (b"some topic", b"", b"hello world"),
        (b"events.clicks", b"user-42", b"{\"n\":1}"),
    ];
    for (topic, key, value) in cases {
        let msg = encode_any_partition(topic, 1_404_762_561_000, key, value).unwrap();
        let size = i32::from_be_bytes(msg[0..4].try_into().unwrap());
        assert_eq!(size as usize, msg.len());

        let msg = encode_partition_key(3, topic, 1_404_762_561_000, key, value).unwrap();
        let size = i32::from_be_bytes(msg[0..4].try_into().unwrap());
        assert_eq!(size as usize, msg.len());
    }
}

#[test]
fn round_trip_recovers_all_fields() {
    let topic = "caf\u{e9}".as_bytes(); // length prefixes count bytes, not chars
    let key = b"\x00\x01\x02";
    let value = vec![0xaau8; 1024];

    let msg = encode_any_partition(topic, i64::MIN, key, &value).unwrap();
    let dec = decode(&msg).unwrap();
    assert_eq!(dec.api_key, ANY_PARTITION_API_KEY);
    assert_eq!(&dec.topic[..], topic);
    assert_eq!(dec.timestamp_ms, i64::MIN);
    assert_eq!(&dec.key[..], key);
    assert_eq!(&dec.value[..], &value[..]);

    let msg = encode_partition_key(u32::MAX, topic, i64::MAX, key, &value).unwrap();
    let dec = decode(&msg).unwrap();
    assert_eq!(dec.api_key, PARTITION_KEY_API_KEY);
    assert_eq!(dec.partition_key, Some(u32::MAX));
    assert_eq!(dec.timestamp_ms, i64::MAX);
}

#[test]
fn concurrent_encodes_do_not_interfere() {
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            std::thread::spawn(move || {
                let topic = format!("topic-{}", i);
                let value = vec![i as u8; 512];
                let msg =
                    encode_partition_key(i, topic.as_bytes(), i as i64, b"k", &value).unwrap();
                let dec = decode(&msg).unwrap();
                assert_eq!(dec.partition_key, Some(i));
                assert_eq!(&dec.topic[..], topic.as_bytes());
                assert_eq!(&dec.value[..], &value[..]);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
