//! Huffman encoding
//!
//! Substitutes each input byte with its code, in input order, and packs the
//! concatenated bits MSB-first. The exact bit count is recorded so the
//! decoder can strip final-byte padding.

use tracing::debug;

use crate::bits::{BitWriter, EncodedPayload};
use crate::code::CodeTable;
use crate::error::{HuffError, Result};
use crate::freq::FrequencyTable;
use crate::tree::HuffmanTree;

/// Huffman encoder: a tree and its derived code table
#[derive(Debug, Clone)]
pub struct HuffmanEncoder {
    tree: HuffmanTree,
    table: CodeTable,
}

impl HuffmanEncoder {
    /// Build an encoder whose tree is fitted to `data`
    pub fn new(data: &[u8]) -> Result<Self> {
        let frequencies = FrequencyTable::from_data(data)?;
        Self::from_frequencies(&frequencies)
    }

    /// Build an encoder from precomputed frequencies
    ///
    /// Useful when the frequency pass already happened elsewhere (e.g. when
    /// rebuilding from a persisted container to re-encode).
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        let tree = HuffmanTree::from_frequencies(frequencies)?;
        let table = CodeTable::from_tree(&tree);
        Ok(Self { tree, table })
    }

    /// Encode `data` into a packed bit payload
    ///
    /// Fails with [`HuffError::InvalidInput`] on empty input and with
    /// [`HuffError::UnknownSymbol`] if `data` contains a byte the code table
    /// does not cover (possible only when the encoder was fitted to
    /// different data).
    pub fn encode(&self, data: &[u8]) -> Result<EncodedPayload> {
        if data.is_empty() {
            return Err(HuffError::invalid_input("cannot encode empty input"));
        }

        let mut writer = BitWriter::new();
        for &byte in data {
            let code = self
                .table
                .code(byte)
                .ok_or_else(|| HuffError::unknown_symbol(byte))?;
            writer.push_bits(code);
        }

        let payload = writer.finish();
        debug!(
            input_bytes = data.len(),
            payload_bits = payload.bit_len,
            payload_bytes = payload.byte_len(),
            "encoded input"
        );
        Ok(payload)
    }

    /// The tree this encoder was built from
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The symbol → code table in use
    pub fn table(&self) -> &CodeTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::HuffmanDecoder;

    #[test]
    fn test_encode_reference_input() {
        let data = b"aaaaabbbccd";
        let encoder = HuffmanEncoder::new(data).unwrap();
        let payload = encoder.encode(data).unwrap();

        // Sum of per-symbol code lengths, in input order.
        let expected_bits: u64 = data
            .iter()
            .map(|&b| encoder.table().code(b).unwrap().len() as u64)
            .sum();
        assert_eq!(payload.bit_len, expected_bits);
        assert_eq!(payload.byte_len(), expected_bits.div_ceil(8) as usize);
    }

    #[test]
    fn test_empty_input_rejected() {
        let encoder = HuffmanEncoder::new(b"abc").unwrap();
        let err = encoder.encode(b"").unwrap_err();
        assert!(matches!(err, HuffError::InvalidInput { .. }));
    }

    #[test]
    fn test_unknown_symbol_with_stale_table() {
        let encoder = HuffmanEncoder::new(b"aabb").unwrap();
        let err = encoder.encode(b"aazb").unwrap_err();
        assert!(matches!(err, HuffError::UnknownSymbol { symbol: b'z' }));
    }

    #[test]
    fn test_single_symbol_bit_per_occurrence() {
        let data = b"aaaa";
        let encoder = HuffmanEncoder::new(data).unwrap();
        let payload = encoder.encode(data).unwrap();
        assert_eq!(payload.bit_len, 4);
        // Code "0" four times, MSB-first: one zero byte.
        assert_eq!(payload.bytes, vec![0u8]);
    }

    #[test]
    fn test_encode_decode_identity() {
        let data = b"hello world! this is a test message for huffman coding.";
        let encoder = HuffmanEncoder::new(data).unwrap();
        let payload = encoder.encode(data).unwrap();

        let decoder = HuffmanDecoder::new(encoder.tree().clone());
        let decoded = decoder.decode(&payload).unwrap();
        assert_eq!(decoded, data.to_vec());
    }
}
