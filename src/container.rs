//! Persisted container format
//!
//! Serializes a frequency table and an encoded payload into one
//! self-describing byte stream. Persisting frequencies rather than code
//! strings is more compact and lets the reader rebuild the exact tree via
//! the pinned tie-break order (see [`crate::tree`]).
//!
//! Byte layout, all integers little-endian:
//!
//! ```text
//! [u32 entry_count]                 1..=256
//! entry_count times:
//!     [u8 symbol] [u64 count]       count > 0, no duplicate symbols
//! [u64 logical_bit_length]
//! [payload bytes]                   ceil(bit_length / 8), MSB-first per byte
//! ```
//!
//! Writers emit entries in ascending symbol order; readers accept any order
//! (the rebuilt tree depends only on the counts) but reject duplicates.

use std::io::{Read, Write};

use tracing::debug;

use crate::bits::EncodedPayload;
use crate::decode::HuffmanDecoder;
use crate::encode::HuffmanEncoder;
use crate::error::{HuffError, Result};
use crate::freq::FrequencyTable;
use crate::tree::HuffmanTree;

/// Size in bytes of one serialized `(symbol, count)` entry
const ENTRY_SIZE: usize = 1 + 8;

/// A frequency table paired with the payload it decodes
#[derive(Debug, Clone)]
pub struct PersistedContainer {
    frequencies: FrequencyTable,
    payload: EncodedPayload,
}

impl PersistedContainer {
    /// Pair a frequency table with an encoded payload
    pub fn new(frequencies: FrequencyTable, payload: EncodedPayload) -> Self {
        Self {
            frequencies,
            payload,
        }
    }

    /// Encode `data` and wrap the result in a container
    pub fn from_data(data: &[u8]) -> Result<Self> {
        let frequencies = FrequencyTable::from_data(data)?;
        let encoder = HuffmanEncoder::from_frequencies(&frequencies)?;
        let payload = encoder.encode(data)?;
        Ok(Self {
            frequencies,
            payload,
        })
    }

    /// Rebuild the tree and decode the payload
    pub fn decode(&self) -> Result<Vec<u8>> {
        let tree = HuffmanTree::from_frequencies(&self.frequencies)?;
        HuffmanDecoder::new(tree).decode(&self.payload)
    }

    /// The persisted frequency table
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The persisted payload
    pub fn payload(&self) -> &EncodedPayload {
        &self.payload
    }

    /// Serialize to the container byte layout
    pub fn to_bytes(&self) -> Vec<u8> {
        let entry_count = self.frequencies.distinct_count();
        let mut bytes =
            Vec::with_capacity(4 + entry_count * ENTRY_SIZE + 8 + self.payload.byte_len());

        bytes.extend_from_slice(&(entry_count as u32).to_le_bytes());
        for (symbol, count) in self.frequencies.iter() {
            bytes.push(symbol);
            bytes.extend_from_slice(&count.to_le_bytes());
        }
        bytes.extend_from_slice(&self.payload.bit_len.to_le_bytes());
        bytes.extend_from_slice(&self.payload.bytes);
        bytes
    }

    /// Parse a container, validating every declared size against the bytes
    /// actually present
    ///
    /// Fails with [`HuffError::CorruptContainer`] on a short header, an
    /// entry count outside `1..=256`, duplicate or zero-count entries, a
    /// truncated entry list, a payload shorter than the declared bit length
    /// requires, or trailing bytes past the payload.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut offset = 0usize;

        let entry_count = read_u32(data, &mut offset)? as usize;
        if entry_count == 0 || entry_count > 256 {
            return Err(HuffError::corrupt_container(format!(
                "entry count {} outside 1..=256",
                entry_count
            )));
        }

        let mut entries = Vec::with_capacity(entry_count);
        for _ in 0..entry_count {
            let symbol = read_u8(data, &mut offset)?;
            let count = read_u64(data, &mut offset)?;
            entries.push((symbol, count));
        }
        let frequencies = FrequencyTable::from_entries(&entries)
            .map_err(|e| HuffError::corrupt_container(e.to_string()))?;

        let bit_len = read_u64(data, &mut offset)?;
        let payload_len = usize::try_from(bit_len.div_ceil(8))
            .map_err(|_| HuffError::corrupt_container("bit length does not fit in memory"))?;

        let remaining = data.len() - offset;
        if remaining < payload_len {
            return Err(HuffError::corrupt_container(format!(
                "payload needs {} bytes, {} remain",
                payload_len, remaining
            )));
        }
        if remaining > payload_len {
            return Err(HuffError::corrupt_container(format!(
                "{} trailing bytes after payload",
                remaining - payload_len
            )));
        }

        let payload = EncodedPayload {
            bytes: data[offset..offset + payload_len].to_vec(),
            bit_len,
        };
        debug!(
            entries = entry_count,
            payload_bits = bit_len,
            "parsed container"
        );

        Ok(Self {
            frequencies,
            payload,
        })
    }

    /// Write the serialized container to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read a serialized container from `reader` until EOF
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }
}

/// One-call compression: encode `data` and serialize the container
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    Ok(PersistedContainer::from_data(data)?.to_bytes())
}

/// One-call decompression: parse a serialized container and decode it
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    PersistedContainer::from_bytes(bytes)?.decode()
}

fn read_u8(data: &[u8], offset: &mut usize) -> Result<u8> {
    let value = *data
        .get(*offset)
        .ok_or_else(|| HuffError::corrupt_container("truncated container"))?;
    *offset += 1;
    Ok(value)
}

fn read_u32(data: &[u8], offset: &mut usize) -> Result<u32> {
    let end = offset
        .checked_add(4)
        .filter(|&e| e <= data.len())
        .ok_or_else(|| HuffError::corrupt_container("truncated container"))?;
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[*offset..end]);
    *offset = end;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64(data: &[u8], offset: &mut usize) -> Result<u64> {
    let end = offset
        .checked_add(8)
        .filter(|&e| e <= data.len())
        .ok_or_else(|| HuffError::corrupt_container("truncated container"))?;
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[*offset..end]);
    *offset = end;
    Ok(u64::from_le_bytes(buf))
}
