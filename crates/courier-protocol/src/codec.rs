//! Primitive encoder/decoder for the relay's big-endian wire format.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{ProtocolError, Result};

/// Writer for wire-format primitives.
pub struct Encoder<'a> {
    buf: &'a mut BytesMut,
}

impl<'a> Encoder<'a> {
    /// Create a new encoder appending to `buf`.
    pub fn new(buf: &'a mut BytesMut) -> Self {
        Self { buf }
    }

    /// Write an i16
    pub fn write_i16(&mut self, value: i16) {
        self.buf.put_i16(value);
    }

    /// Write a u16
    pub fn write_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
    }

    /// Write an i32
    pub fn write_i32(&mut self, value: i32) {
        self.buf.put_i32(value);
    }

    /// Write a u32
    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32(value);
    }

    /// Write an i64
    pub fn write_i64(&mut self, value: i64) {
        self.buf.put_i64(value);
    }

    /// Write raw bytes with no length prefix
    pub fn write_raw_bytes(&mut self, value: &[u8]) {
        self.buf.put_slice(value);
    }
}

/// Reader for wire-format primitives.
pub struct Decoder<'a> {
    buf: &'a mut dyn Buf,
}

impl<'a> Decoder<'a> {
    /// Create a new decoder reading from `buf`.
    pub fn new(buf: &'a mut dyn Buf) -> Self {
        Self { buf }
    }

    /// Bytes left unread.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Read an i16
    pub fn read_i16(&mut self) -> Result<i16> {
        if self.buf.remaining() < 2 {
            return Err(ProtocolError::Decode("not enough bytes for i16".into()));
        }
        Ok(self.buf.get_i16())
    }

    /// Read a u16
    pub fn read_u16(&mut self) -> Result<u16> {
        if self.buf.remaining() < 2 {
            return Err(ProtocolError::Decode("not enough bytes for u16".into()));
        }
        Ok(self.buf.get_u16())
    }

    /// Read an i32
    pub fn read_i32(&mut self) -> Result<i32> {
        if self.buf.remaining() < 4 {
            return Err(ProtocolError::Decode("not enough bytes for i32".into()));
        }
        Ok(self.buf.get_i32())
    }

    /// Read a u32
    pub fn read_u32(&mut self) -> Result<u32> {
        if self.buf.remaining() < 4 {
            return Err(ProtocolError::Decode("not enough bytes for u32".into()));
        }
        Ok(self.buf.get_u32())
    }

    /// Read an i64
    pub fn read_i64(&mut self) -> Result<i64> {
        if self.buf.remaining() < 8 {
            return Err(ProtocolError::Decode("not enough bytes for i64".into()));
        }
        Ok(self.buf.get_i64())
    }

    /// Read exactly `len` raw bytes
    pub fn read_raw_bytes(&mut self, len: usize) -> Result<Bytes> {
        if self.buf.remaining() < len {
            return Err(ProtocolError::Decode(format!(
                "not enough bytes for payload of length {}",
                len
            )));
        }
        Ok(self.buf.copy_to_bytes(len))
    }
}
