//! Read-only diagnostics
//!
//! Post-hoc queries a presentation layer can display: Shannon entropy of the
//! input's empirical distribution, the achieved average code length, and the
//! compression ratio. None of these participate in encode/decode
//! correctness.

use crate::bits::EncodedPayload;
use crate::code::CodeTable;
use crate::error::Result;
use crate::freq::FrequencyTable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shannon entropy of the empirical distribution, in bits per symbol
///
/// The theoretical lower bound on average code length; Huffman coding
/// achieves an average within one bit of it.
pub fn shannon_entropy(frequencies: &FrequencyTable) -> f64 {
    let total = frequencies.total() as f64;
    frequencies
        .iter()
        .map(|(_, count)| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Frequency-weighted average code length, in bits per symbol
pub fn average_code_length(frequencies: &FrequencyTable, table: &CodeTable) -> f64 {
    let total = frequencies.total() as f64;
    frequencies
        .iter()
        .filter_map(|(symbol, count)| {
            table
                .code(symbol)
                .map(|code| count as f64 * code.len() as f64)
        })
        .sum::<f64>()
        / total
}

/// Snapshot of encoding statistics for one input
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncodingStats {
    /// Original input length in bytes
    pub input_len: u64,
    /// Encoded payload length in logical bits
    pub payload_bits: u64,
    /// Shannon entropy of the input distribution, bits per symbol
    pub entropy: f64,
    /// Achieved average code length, bits per symbol
    pub average_code_length: f64,
    /// Packed payload size over input size (smaller is better, 1.0 is break-even)
    pub compression_ratio: f64,
}

impl EncodingStats {
    /// Measure `data` against the codec it would get
    pub fn measure(data: &[u8]) -> Result<Self> {
        let frequencies = FrequencyTable::from_data(data)?;
        let encoder = crate::encode::HuffmanEncoder::from_frequencies(&frequencies)?;
        let payload = encoder.encode(data)?;
        Ok(Self::from_parts(&frequencies, encoder.table(), &payload))
    }

    /// Assemble statistics from already-computed pieces
    pub fn from_parts(
        frequencies: &FrequencyTable,
        table: &CodeTable,
        payload: &EncodedPayload,
    ) -> Self {
        Self {
            input_len: frequencies.total(),
            payload_bits: payload.bit_len,
            entropy: shannon_entropy(frequencies),
            average_code_length: average_code_length(frequencies, table),
            compression_ratio: payload.byte_len() as f64 / frequencies.total() as f64,
        }
    }
}
