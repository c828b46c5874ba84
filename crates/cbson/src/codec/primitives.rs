//! Primitive encoding/decoding for BSON wire bytes.
//!
//! All multi-byte integers are little-endian regardless of host.

use crate::error::{DecodeError, EncodeError};

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads a little-endian i32.
    #[inline]
    pub fn read_i32(&mut self, context: &'static str) -> Result<i32, DecodeError> {
        let bytes = self.read_bytes(4, context)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        Ok(i32::from_le_bytes(buf))
    }

    /// Reads a NUL-terminated UTF-8 string, consuming the terminator.
    pub fn read_cstring(&mut self, field: &'static str) -> Result<&'a str, DecodeError> {
        let rest = &self.data[self.pos..];
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::MissingTerminator { context: field })?;
        let bytes = &rest[..nul];
        self.pos += nul + 1;
        std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { field })
    }

    /// Reads a BSON string: i32 length (including NUL), UTF-8 bytes, NUL.
    ///
    /// The content may itself contain NUL bytes; only the declared length
    /// bounds it.
    pub fn read_string(&mut self, field: &'static str) -> Result<&'a str, DecodeError> {
        let len = self.read_i32(field)?;
        let remaining = self.remaining_len();
        if len < 1 || len as usize > remaining {
            return Err(DecodeError::InvalidStringLength { len, remaining });
        }
        let bytes = self.read_bytes(len as usize, field)?;
        let (content, terminator) = bytes.split_at(bytes.len() - 1);
        if terminator != [0u8] {
            return Err(DecodeError::MissingTerminator { context: field });
        }
        std::str::from_utf8(content).map_err(|_| DecodeError::InvalidUtf8 { field })
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer with exactly `capacity` bytes reserved.
    ///
    /// Fails with [`EncodeError::OutOfMemory`] instead of aborting when the
    /// allocator refuses the request.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, EncodeError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| EncodeError::OutOfMemory { requested: capacity })?;
        Ok(Self { buf })
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a little-endian i32.
    #[inline]
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a BSON string: i32 length (including NUL), UTF-8 bytes, NUL.
    ///
    /// Callers check `len` against [`crate::limits::MAX_STRING_LEN`] first.
    pub fn write_string(&mut self, s: &str, len: i32) {
        self.write_i32(len);
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.push(0);
    }
}
