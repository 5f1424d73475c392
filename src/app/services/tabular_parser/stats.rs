//! Parsing statistics for tabular input processing
//!
//! Dropped records are part of the tolerance contract, not errors, so each
//! file's parse reports how many records it kept and why the rest fell away.

use crate::constants::MIN_PARSE_SUCCESS_RATE;

/// Statistics for one parsed input file
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of non-blank data records encountered
    pub total_records: usize,

    /// Number of records parsed into usable rows
    pub records_parsed: usize,

    /// Records dropped for carrying fewer than the minimum fields
    pub dropped_short: usize,

    /// Records dropped because a cell required for the row failed to parse
    pub dropped_malformed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            records_parsed: 0,
            dropped_short: 0,
            dropped_malformed: 0,
        }
    }

    /// Total records dropped for any reason
    pub fn dropped(&self) -> usize {
        self.dropped_short + self.dropped_malformed
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful
    pub fn is_successful(&self) -> bool {
        self.success_rate() > MIN_PARSE_SUCCESS_RATE
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
