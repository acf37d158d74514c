//! Byte cursor and numeric codec for IconVG data.
//!
//! IconVG packs numbers into 1, 2 or 4 little-endian bytes. The low bits of
//! the first byte select the width:
//!
//! | low bits   | width | payload bits |
//! |------------|-------|--------------|
//! | `.......0` | 1     | 7            |
//! | `......01` | 2     | 14           |
//! | `......11` | 4     | 30           |
//!
//! Decoding never panics. A consumed length of zero means the bytes do not
//! hold a complete number and the caller must not continue.

/// A read-only view over the bytes that have not been decoded yet.
///
/// `Buffer` is `Copy`: decode steps return a value plus a consumed length,
/// and the caller moves on with [`Buffer::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buffer<'a> {
    /// The remaining bytes.
    data: &'a [u8],
}

impl<'a> Buffer<'a> {
    /// Creates a new Buffer over the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Returns the remaining bytes.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the number of remaining bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no bytes remain.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the next byte without consuming it.
    pub fn first(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// Returns the first `n` remaining bytes, or fewer if the buffer is shorter.
    pub fn head(&self, n: usize) -> &'a [u8] {
        &self.data[..n.min(self.data.len())]
    }

    /// Returns the buffer with its first `n` bytes consumed.
    ///
    /// Advancing past the end yields an empty buffer.
    pub fn advance(self, n: usize) -> Self {
        Self {
            data: self.data.get(n..).unwrap_or_default(),
        }
    }

    /// Returns true if the buffer starts with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.data.starts_with(prefix)
    }

    /// Decodes a natural (unsigned) number.
    ///
    /// # Returns
    ///
    /// The value and the number of bytes it occupied, or `(0, 0)` if the
    /// buffer is too short for the width the first byte selects.
    pub fn decode_natural(&self) -> (u32, usize) {
        match *self.data {
            [x, ..] if x & 0x01 == 0 => (u32::from(x) >> 1, 1),
            [x, y, ..] if x & 0x02 == 0 => {
                let v = u32::from(x) | u32::from(y) << 8;
                (v >> 2, 2)
            }
            [x, y, z, w, ..] => (u32::from_le_bytes([x, y, z, w]) >> 2, 4),
            _ => (0, 0),
        }
    }

    /// Decodes a coordinate (signed real) number.
    ///
    /// The 1-byte form holds an integer in `-64..=63`, the 2-byte form a
    /// 1/64 fixed-point value in `-128..128`, and the 4-byte form the bits of
    /// an `f32` whose two lowest mantissa bits are taken to be zero.
    ///
    /// # Returns
    ///
    /// The value and the number of bytes it occupied, or `(0.0, 0)` if the
    /// buffer does not hold a complete number.
    pub fn decode_coordinate(&self) -> (f32, usize) {
        match self.decode_natural() {
            (_, 0) => (0.0, 0),
            (u, 1) => ((u as i32 - 64) as f32, 1),
            (u, 2) => ((u as i32 - 64 * 128) as f32 / 64.0, 2),
            (u, n) => (f32::from_bits(u << 2), n),
        }
    }
}
