//! Huffman tree construction
//!
//! Builds the minimum-redundancy prefix-code tree from a frequency table by
//! repeated minimum-pair merging. Nodes live in a flat arena and refer to
//! their children by index, so the tree needs no recursive teardown, cannot
//! form cycles, and traversal never risks call-stack overflow on skewed
//! frequency distributions.
//!
//! # Tie-break order
//!
//! Heap extraction order is pinned to the total order
//! `(frequency, min_symbol, node_id)` ascending, where `min_symbol` is the
//! smallest byte value in a node's subtree. Subtrees partition the alphabet,
//! so `min_symbol` differs between any two live nodes and the built tree is
//! reproducible bit-for-bit. The first node extracted becomes the left
//! (0-edge) child, the second the right (1-edge) child. Container decoding
//! relies on this order to rebuild an identical tree from frequencies alone.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{HuffError, Result};
use crate::freq::FrequencyTable;

/// Index of a node within the tree arena
pub(crate) type NodeId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Leaf(u8),
    Internal { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) frequency: u64,
    pub(crate) kind: NodeKind,
}

/// Heap key; field order gives the pinned (frequency, min_symbol, id) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    frequency: u64,
    min_symbol: u8,
    id: NodeId,
}

/// Frequency-weighted binary prefix-code tree over a byte alphabet
///
/// For `n >= 2` distinct symbols the tree has `n` leaves and exactly
/// `n - 1` internal nodes; for a single distinct symbol it is a lone leaf
/// and the code layer assigns the one-bit code `0`.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree for `frequencies` via min-heap pair merging
    ///
    /// Fails with [`HuffError::InvalidInput`] when the table contains no
    /// symbols (which [`FrequencyTable`] itself already prevents for tables
    /// built through its constructors).
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        let mut nodes: Vec<Node> = Vec::new();
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

        for (symbol, count) in frequencies.iter() {
            let id = nodes.len() as NodeId;
            nodes.push(Node {
                frequency: count,
                kind: NodeKind::Leaf(symbol),
            });
            heap.push(Reverse(HeapEntry {
                frequency: count,
                min_symbol: symbol,
                id,
            }));
        }

        if heap.is_empty() {
            return Err(HuffError::invalid_input(
                "cannot build tree from empty frequency table",
            ));
        }

        // Single distinct symbol: the lone leaf at index 0 is the root.
        if nodes.len() == 1 {
            return Ok(Self { nodes, root: 0 });
        }

        while heap.len() > 1 {
            // Non-empty by the loop condition, so these two pops never fail.
            let Reverse(first) = heap.pop().ok_or_else(Self::heap_underflow)?;
            let Reverse(second) = heap.pop().ok_or_else(Self::heap_underflow)?;

            let id = nodes.len() as NodeId;
            let frequency = first.frequency + second.frequency;
            nodes.push(Node {
                frequency,
                kind: NodeKind::Internal {
                    left: first.id,
                    right: second.id,
                },
            });
            heap.push(Reverse(HeapEntry {
                frequency,
                min_symbol: first.min_symbol.min(second.min_symbol),
                id,
            }));
        }

        let Reverse(root) = heap.pop().ok_or_else(Self::heap_underflow)?;
        debug!(
            leaves = frequencies.distinct_count(),
            nodes = nodes.len(),
            root_frequency = root.frequency,
            "built huffman tree"
        );

        Ok(Self {
            nodes,
            root: root.id,
        })
    }

    /// Count frequencies in `data` and build its tree
    pub fn from_data(data: &[u8]) -> Result<Self> {
        let frequencies = FrequencyTable::from_data(data)?;
        Self::from_frequencies(&frequencies)
    }

    fn heap_underflow() -> HuffError {
        HuffError::invalid_input("heap underflow during tree construction")
    }

    #[inline]
    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    /// True when the tree is a lone leaf (single distinct symbol)
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.node(self.root).kind, NodeKind::Leaf(_))
    }

    /// The symbol of a lone-leaf tree, if it is one
    pub fn single_symbol(&self) -> Option<u8> {
        match self.node(self.root).kind {
            NodeKind::Leaf(symbol) => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Total weight at the root (equals the source input's length)
    pub fn root_frequency(&self) -> u64 {
        self.node(self.root).frequency
    }

    /// Number of leaves (distinct symbols)
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Leaf(_)))
            .count()
    }

    /// Number of internal merge nodes
    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_shape_for_reference_input() {
        let tree = HuffmanTree::from_data(b"aaaaabbbccd").unwrap();
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.internal_count(), 3);
        assert_eq!(tree.root_frequency(), 11);
        assert!(!tree.is_single_leaf());
    }

    #[test]
    fn test_internal_count_invariant() {
        for n in 2..=16usize {
            let data: Vec<u8> = (0..n as u8).collect();
            let tree = HuffmanTree::from_data(&data).unwrap();
            assert_eq!(tree.internal_count(), n - 1);
        }
    }

    #[test]
    fn test_single_symbol_tree() {
        let tree = HuffmanTree::from_data(b"aaaa").unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.single_symbol(), Some(b'a'));
        assert_eq!(tree.root_frequency(), 4);
        assert_eq!(tree.internal_count(), 0);
    }

    #[test]
    fn test_internal_frequency_is_child_sum() {
        let tree = HuffmanTree::from_data(b"aaaaabbbccd").unwrap();
        for node in &tree.nodes {
            if let NodeKind::Internal { left, right } = node.kind {
                let sum = tree.node(left).frequency + tree.node(right).frequency;
                assert_eq!(node.frequency, sum);
            }
        }
    }

    #[test]
    fn test_deterministic_construction() {
        // Equal frequencies everywhere: tie-break must still give one shape.
        let data = b"abcdabcdabcd";
        let a = HuffmanTree::from_data(data).unwrap();
        let b = HuffmanTree::from_data(data).unwrap();
        let codes_a = crate::code::CodeTable::from_tree(&a);
        let codes_b = crate::code::CodeTable::from_tree(&b);
        for sym in [b'a', b'b', b'c', b'd'] {
            assert_eq!(codes_a.code(sym), codes_b.code(sym));
        }
    }

    #[test]
    fn test_rebuild_from_entries_matches() {
        // The container path rebuilds from (symbol, count) pairs; codes must
        // come out identical to the original construction.
        let data = b"the quick brown fox jumps over the lazy dog";
        let table = FrequencyTable::from_data(data).unwrap();
        let entries: Vec<(u8, u64)> = table.iter().collect();
        let rebuilt = FrequencyTable::from_entries(&entries).unwrap();

        let tree_a = HuffmanTree::from_frequencies(&table).unwrap();
        let tree_b = HuffmanTree::from_frequencies(&rebuilt).unwrap();
        let codes_a = crate::code::CodeTable::from_tree(&tree_a);
        let codes_b = crate::code::CodeTable::from_tree(&tree_b);
        for (symbol, _) in table.iter() {
            assert_eq!(codes_a.code(symbol), codes_b.code(symbol));
        }
    }

    #[test]
    fn test_empty_table_rejected() {
        // FrequencyTable cannot be constructed empty, so exercise the
        // builder's own guard through from_data.
        assert!(HuffmanTree::from_data(b"").is_err());
    }
}
