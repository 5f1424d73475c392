//! Temporal key index over the primary bar series
//!
//! Maps each bar's composite (date, time) key to its sequential position so
//! that a secondary dataset can be projected onto the primary index space.
//! Construction is O(n) over the source bars; lookup is O(1) amortized.
//!
//! When the same key occurs more than once, the last occurrence wins: later
//! bars overwrite earlier map entries. The duplicate count is retained so
//! callers can surface the condition instead of silently absorbing it.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::app::models::{Bar, TimeKey};

/// Lookup from composite (date, time) key to primary bar index
#[derive(Debug, Clone, Default)]
pub struct TemporalKeyIndex {
    index: HashMap<TimeKey, usize>,
    bar_count: usize,
    duplicate_keys: usize,
}

impl TemporalKeyIndex {
    /// Build the index over a primary bar series
    pub fn build(bars: &[Bar]) -> Self {
        let mut index = HashMap::with_capacity(bars.len());
        let mut duplicate_keys = 0;

        for bar in bars {
            if index.insert(bar.key(), bar.index).is_some() {
                duplicate_keys += 1;
                debug!(
                    "Duplicate bar key {} overwritten by index {}",
                    bar.key(),
                    bar.index
                );
            }
        }

        if duplicate_keys > 0 {
            warn!(
                "{} duplicate (date, time) keys in primary series; last occurrence wins",
                duplicate_keys
            );
        }

        Self {
            index,
            bar_count: bars.len(),
            duplicate_keys,
        }
    }

    /// Bar index for an exact (date, time) pair, or `None` when unmatched
    pub fn lookup(&self, key: TimeKey) -> Option<usize> {
        self.index.get(&key).copied()
    }

    /// Number of bars the index was built over
    pub fn bar_count(&self) -> usize {
        self.bar_count
    }

    /// Number of distinct keys in the index
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index holds no keys
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Keys that occurred more than once during the build
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }
}
