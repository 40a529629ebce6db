//! Huffman decoding
//!
//! Walks the tree bit-by-bit: 0 descends left, 1 descends right, reaching a
//! leaf emits its symbol and resets the cursor to the root. Decoding
//! consumes exactly the payload's logical bit length and never examines
//! padding bits.
//!
//! Truncation policy is strict: a bit stream that ends while the cursor is
//! mid-traversal is rejected as [`HuffError::MalformedPayload`] rather than
//! silently dropping the partial code. Legitimate final-byte padding never
//! trips this because it lies past the recorded bit length.

use tracing::debug;

use crate::bits::{BitReader, EncodedPayload};
use crate::error::{HuffError, Result};
use crate::tree::{HuffmanTree, NodeId, NodeKind};

/// Huffman decoder over a built tree
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    tree: HuffmanTree,
}

impl HuffmanDecoder {
    /// Create a decoder for `tree`
    pub fn new(tree: HuffmanTree) -> Self {
        Self { tree }
    }

    /// Decode a packed payload back to the original byte sequence
    ///
    /// Fails with [`HuffError::MalformedPayload`] when the declared bit
    /// length does not fit in the payload bytes, when a lone-leaf stream
    /// contains a 1 bit, or when the stream ends mid-code.
    pub fn decode(&self, payload: &EncodedPayload) -> Result<Vec<u8>> {
        let needed = payload.bit_len.div_ceil(8) as usize;
        if payload.bytes.len() < needed {
            return Err(HuffError::malformed_payload(format!(
                "bit length {} needs {} bytes, payload has {}",
                payload.bit_len,
                needed,
                payload.bytes.len()
            )));
        }

        let mut reader = BitReader::new(&payload.bytes, payload.bit_len);
        let output = self.walk(|| reader.next_bit().map(Ok))?;
        debug!(
            payload_bits = payload.bit_len,
            output_bytes = output.len(),
            "decoded payload"
        );
        Ok(output)
    }

    /// Decode from raw bit values, one per element
    ///
    /// This is the reference tree-walk entry point: each element must be 0
    /// or 1, anything else is [`HuffError::MalformedPayload`]. For the same
    /// logical bits it returns exactly what [`Self::decode`] does.
    pub fn decode_bits(&self, bits: &[u8]) -> Result<Vec<u8>> {
        let mut iter = bits.iter();
        self.walk(|| {
            iter.next().map(|&b| match b {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(HuffError::malformed_payload(format!(
                    "bit value {} is not 0 or 1",
                    other
                ))),
            })
        })
    }

    /// Core traversal loop shared by both entry points
    ///
    /// `next` yields `None` at end of stream, or the next bit (itself
    /// fallible, for the raw-bit path's value check).
    fn walk<F>(&self, mut next: F) -> Result<Vec<u8>>
    where
        F: FnMut() -> Option<Result<bool>>,
    {
        // Lone-leaf tree: one bit per occurrence, every bit must be 0.
        if let Some(symbol) = self.tree.single_symbol() {
            let mut output = Vec::new();
            while let Some(bit) = next() {
                if bit? {
                    return Err(HuffError::malformed_payload(
                        "1 bit in single-symbol stream",
                    ));
                }
                output.push(symbol);
            }
            return Ok(output);
        }

        let root = self.tree.root();
        let mut output = Vec::new();
        let mut cursor: NodeId = root;

        while let Some(bit) = next() {
            cursor = match self.tree.node(cursor).kind {
                NodeKind::Internal { left, right } => {
                    if bit? {
                        right
                    } else {
                        left
                    }
                }
                // Leaves are emitted below before the next descent, so the
                // cursor can never rest on one here.
                NodeKind::Leaf(_) => unreachable!("cursor parked on a leaf"),
            };

            if let NodeKind::Leaf(symbol) = self.tree.node(cursor).kind {
                output.push(symbol);
                cursor = root;
            }
        }

        if cursor != root {
            return Err(HuffError::malformed_payload(
                "bit stream ends in the middle of a code",
            ));
        }
        Ok(output)
    }

    /// The tree this decoder walks
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }
}
