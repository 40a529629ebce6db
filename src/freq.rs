//! Frequency analysis over byte streams
//!
//! The first pass of every encode: count how often each distinct byte occurs.
//! The table is a pure function of its input and is the sole input to tree
//! construction, so two tables with equal counts always produce identical
//! trees.

use crate::error::{HuffError, Result};

/// Occurrence counts for every byte value present in an input stream
///
/// Stored as a dense 256-entry array; absent symbols have count zero.
/// The sum of all counts always equals the length of the input the table
/// was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
    total: u64,
}

impl FrequencyTable {
    /// Count symbol occurrences in `data`
    ///
    /// Empty input is rejected with [`HuffError::InvalidInput`] rather than
    /// producing a zero-entry table that downstream stages would have to
    /// re-reject.
    pub fn from_data(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(HuffError::invalid_input(
                "cannot build frequency table from empty input",
            ));
        }

        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }

        Ok(Self {
            counts,
            total: data.len() as u64,
        })
    }

    /// Build a table from explicit `(symbol, count)` entries
    ///
    /// Used when rebuilding from a persisted container. Rejects empty entry
    /// lists, zero counts, and duplicate symbols.
    pub fn from_entries(entries: &[(u8, u64)]) -> Result<Self> {
        if entries.is_empty() {
            return Err(HuffError::invalid_input("no frequency entries"));
        }

        let mut counts = [0u64; 256];
        let mut total = 0u64;
        for &(symbol, count) in entries {
            if count == 0 {
                return Err(HuffError::invalid_input(format!(
                    "zero count for symbol {:#04x}",
                    symbol
                )));
            }
            if counts[symbol as usize] != 0 {
                return Err(HuffError::invalid_input(format!(
                    "duplicate entry for symbol {:#04x}",
                    symbol
                )));
            }
            counts[symbol as usize] = count;
            total = total
                .checked_add(count)
                .ok_or_else(|| HuffError::invalid_input("frequency total overflows u64"))?;
        }

        Ok(Self { counts, total })
    }

    /// Occurrence count for `symbol` (zero if absent)
    #[inline]
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of symbols counted (equals input length)
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols present
    pub fn distinct_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterate over `(symbol, count)` pairs in ascending symbol order,
    /// skipping absent symbols
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}
