//! Bit-level packing primitives
//!
//! Bits are packed most-significant-bit first within each byte: the first
//! bit written lands in bit 7 of byte 0. The final byte is zero-padded; the
//! pad bits are not part of the logical payload and the exact bit count
//! travels alongside the bytes so decoders never read into the padding.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A packed bit sequence plus its exact logical bit length
///
/// `bytes.len()` is always `bit_len.div_ceil(8)`; any bits in the final byte
/// past `bit_len` are zero padding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncodedPayload {
    /// Packed payload bytes, MSB-first per byte
    pub bytes: Vec<u8>,
    /// Number of meaningful bits, excluding final-byte padding
    pub bit_len: u64,
}

impl EncodedPayload {
    /// Number of payload bytes required for `bit_len` bits
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Accumulates bits MSB-first into a byte buffer
#[derive(Debug, Default)]
pub(crate) struct BitWriter {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl BitWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_bit(&mut self, bit: bool) {
        let offset = (self.bit_len % 8) as u8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            // offset 0 is the high bit
            if let Some(last) = self.bytes.last_mut() {
                *last |= 1 << (7 - offset);
            }
        }
        self.bit_len += 1;
    }

    pub(crate) fn push_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.push_bit(bit);
        }
    }

    pub(crate) fn finish(self) -> EncodedPayload {
        EncodedPayload {
            bytes: self.bytes,
            bit_len: self.bit_len,
        }
    }
}

/// Reads the logical bits of a packed payload, MSB-first
#[derive(Debug)]
pub(crate) struct BitReader<'a> {
    bytes: &'a [u8],
    bit_len: u64,
    pos: u64,
}

impl<'a> BitReader<'a> {
    /// Reader over the first `bit_len` bits of `bytes`
    ///
    /// Callers must have verified that `bytes` holds at least
    /// `bit_len.div_ceil(8)` bytes.
    pub(crate) fn new(bytes: &'a [u8], bit_len: u64) -> Self {
        Self {
            bytes,
            bit_len,
            pos: 0,
        }
    }

    /// Next logical bit, or `None` once `bit_len` bits were consumed
    pub(crate) fn next_bit(&mut self) -> Option<bool> {
        if self.pos >= self.bit_len {
            return None;
        }
        let byte = self.bytes[(self.pos / 8) as usize];
        let bit = (byte >> (7 - (self.pos % 8))) & 1 == 1;
        self.pos += 1;
        Some(bit)
    }
}
