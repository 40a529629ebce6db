//! # huffstream: static Huffman coding
//!
//! This crate implements whole-input binary Huffman coding over byte
//! alphabets: frequency analysis, min-heap tree construction with a pinned
//! deterministic tie-break, prefix-free code generation, MSB-first bit
//! packing, strict tree-walk decoding, and a self-describing binary
//! container so a decoder can rebuild the tree without the original input.
//!
//! ## Quick start
//!
//! ```rust
//! use huffstream::{compress, decompress};
//!
//! let data = b"aaaaabbbccd";
//! let packed = compress(data)?;
//! assert_eq!(decompress(&packed)?, data.to_vec());
//! # Ok::<(), huffstream::HuffError>(())
//! ```
//!
//! The staged API exposes each pass separately:
//!
//! ```rust
//! use huffstream::{FrequencyTable, HuffmanDecoder, HuffmanEncoder};
//!
//! let data = b"mississippi";
//! let frequencies = FrequencyTable::from_data(data)?;
//! let encoder = HuffmanEncoder::from_frequencies(&frequencies)?;
//! let payload = encoder.encode(data)?;
//!
//! let decoder = HuffmanDecoder::new(encoder.tree().clone());
//! assert_eq!(decoder.decode(&payload)?, data.to_vec());
//! # Ok::<(), huffstream::HuffError>(())
//! ```
//!
//! ## Determinism
//!
//! Equal-frequency merges are ordered by the smallest symbol in each
//! subtree, so encoding is reproducible bit-for-bit across runs and across
//! serialize/deserialize of the container.

#![warn(missing_docs)]

pub mod bits;
pub mod code;
pub mod container;
pub mod decode;
pub mod encode;
pub mod error;
pub mod freq;
pub mod stats;
pub mod tree;

pub use bits::EncodedPayload;
pub use code::CodeTable;
pub use container::{compress, decompress, PersistedContainer};
pub use decode::HuffmanDecoder;
pub use encode::HuffmanEncoder;
pub use error::{HuffError, Result};
pub use freq::FrequencyTable;
pub use stats::{average_code_length, shannon_entropy, EncodingStats};
pub use tree::HuffmanTree;
