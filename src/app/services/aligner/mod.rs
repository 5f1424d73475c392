//! Series alignment onto the primary bar index space
//!
//! Projects reference rows through the temporal key index: each row's
//! (date, time) key selects the bar slot its field values land in. Rows with
//! no matching bar contribute nothing, and slots no row reaches stay
//! explicitly missing. Alignment is purely key-based; positional zipping
//! would silently misalign on the first session gap or coverage difference,
//! which is exactly the failure mode this service exists to prevent.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::models::{AlignedSeries, ReferenceData};
use crate::app::services::bar_index::TemporalKeyIndex;

#[cfg(test)]
pub mod tests;

/// Statistics for one alignment pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlignmentStats {
    /// Reference rows whose key matched a primary bar
    pub rows_matched: usize,

    /// Reference rows with no matching bar, silently dropped
    pub rows_unmatched: usize,

    /// Rows that landed on a slot an earlier row had already written
    pub slots_overwritten: usize,
}

impl AlignmentStats {
    /// Total reference rows seen
    pub fn rows_total(&self) -> usize {
        self.rows_matched + self.rows_unmatched
    }

    /// Matched rows as a percentage of all rows
    pub fn match_rate(&self) -> f64 {
        if self.rows_total() == 0 {
            0.0
        } else {
            (self.rows_matched as f64 / self.rows_total() as f64) * 100.0
        }
    }
}

/// Projects reference rows onto the primary bar index space
#[derive(Debug, Clone, Default)]
pub struct SeriesAligner;

impl SeriesAligner {
    /// Create a new aligner
    pub fn new() -> Self {
        Self
    }

    /// Align each reference column into a bar-indexed series
    ///
    /// Returns one series per reference column, every one exactly
    /// `index.bar_count()` slots long. A later row writing a slot an earlier
    /// row already filled overwrites it unconditionally, missing values
    /// included; input order decides.
    pub fn align(
        &self,
        index: &TemporalKeyIndex,
        reference: &ReferenceData,
    ) -> (Vec<AlignedSeries>, AlignmentStats) {
        let bar_count = index.bar_count();
        let mut series: Vec<AlignedSeries> = reference
            .columns
            .iter()
            .map(|c| AlignedSeries::missing(c.name.clone(), bar_count))
            .collect();
        let mut written = vec![false; bar_count];
        let mut stats = AlignmentStats::default();

        for row in &reference.rows {
            let Some(slot) = index.lookup(row.key()).filter(|&s| s < bar_count) else {
                stats.rows_unmatched += 1;
                debug!("Reference row {} has no matching bar", row.key());
                continue;
            };

            stats.rows_matched += 1;
            if written[slot] {
                stats.slots_overwritten += 1;
            }
            written[slot] = true;

            for (s, value) in series.iter_mut().zip(&row.values) {
                s.values[slot] = *value;
            }
        }

        info!(
            "Aligned {} of {} reference rows onto {} bars ({} unmatched)",
            stats.rows_matched,
            stats.rows_total(),
            bar_count,
            stats.rows_unmatched
        );

        (series, stats)
    }
}
