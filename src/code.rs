//! Code generation from a built Huffman tree
//!
//! A depth-first walk of the tree yields each symbol's code as its
//! root-to-leaf path: 0 on every left edge, 1 on every right edge. The walk
//! uses an explicit stack rather than recursion so pathological frequency
//! skews (tree depth up to 255) cost nothing but a small heap allocation.

use std::collections::HashMap;

use crate::tree::{HuffmanTree, NodeKind};

/// Bijective symbol ↔ code mapping derived from a Huffman tree
///
/// Codes are prefix-free by construction: a symbol only ever sits at a leaf,
/// so no symbol's path can continue into another's. The reverse map supports
/// table-driven decoding; it always agrees with walking the tree directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<u8, Vec<bool>>,
    reverse: HashMap<Vec<bool>, u8>,
    max_code_length: usize,
}

impl CodeTable {
    /// Derive the code table from `tree`
    ///
    /// A lone-leaf tree (single distinct symbol) gets the one-bit code `0`
    /// rather than an empty path, so every code is non-empty and encoding
    /// `n` occurrences always produces exactly `n` bits in that case.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::new();
        let mut reverse = HashMap::new();
        let mut max_code_length = 0;

        let mut stack = vec![(tree.root(), Vec::new())];
        while let Some((id, path)) = stack.pop() {
            match tree.node(id).kind {
                NodeKind::Leaf(symbol) => {
                    let code = if path.is_empty() { vec![false] } else { path };
                    max_code_length = max_code_length.max(code.len());
                    reverse.insert(code.clone(), symbol);
                    codes.insert(symbol, code);
                }
                NodeKind::Internal { left, right } => {
                    let mut left_path = path.clone();
                    left_path.push(false);
                    let mut right_path = path;
                    right_path.push(true);
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }

        Self {
            codes,
            reverse,
            max_code_length,
        }
    }

    /// The code assigned to `symbol`, if present
    pub fn code(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(|c| c.as_slice())
    }

    /// The symbol owning exactly this code, if any
    pub fn symbol(&self, code: &[bool]) -> Option<u8> {
        self.reverse.get(code).copied()
    }

    /// Length in bits of the longest code
    pub fn max_code_length(&self) -> usize {
        self.max_code_length
    }

    /// Number of symbols in the table
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when the table holds no symbols
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_slice()))
    }
}
