//! Annotated log scanner
//!
//! Free-form validation logs carry per-indicator sections: a header echoing
//! the indicator name and its parameters, a table of bar/expected/computed
//! rows, then a summary block. Explanatory prose is interleaved throughout
//! and must be ignored, not rejected.
//!
//! The scanner is an explicit two-state automaton over lines: idle moves to
//! collecting on a section header for the indicator of interest, collecting
//! returns to idle on the summary marker, self-loop otherwise. The header,
//! summary, and data-line predicates are each independently testable.

use regex::Regex;
use tracing::{debug, warn};

use super::ExtractStats;
use crate::app::models::AlignedSeries;
use crate::app::services::tabular_parser::field_parsers::{
    parse_optional_f64, parse_optional_usize,
};
use crate::app::services::tabular_parser::{Delimiter, RawRecord};
use crate::constants::{LOG_SUMMARY_MARKER, LOG_TRIPLE_MIN_TOKENS};
use crate::{Error, Result};

/// Automaton states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    Collecting,
}

/// Extracts one indicator's computed values from an annotated text log
#[derive(Debug, Clone)]
pub struct LogScanner {
    name: String,
    header_pattern: Regex,
}

impl LogScanner {
    /// Create a scanner for one indicator name
    ///
    /// The section header is the indicator name followed by its parameter
    /// echo, e.g. `TGT_115 (Up=1, Down=1, Cutoff=5)`.
    pub fn new(indicator: &str) -> Result<Self> {
        let header_pattern = Regex::new(&format!(r"{}\s*\(", regex::escape(indicator)))
            .map_err(|e| Error::configuration(format!("invalid indicator name pattern: {e}")))?;

        Ok(Self {
            name: indicator.to_string(),
            header_pattern,
        })
    }

    /// Indicator name this scanner collects
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a line opens a section for this indicator
    pub fn is_section_header(&self, line: &str) -> bool {
        self.header_pattern.is_match(line)
    }

    /// Whether a line terminates the current section
    pub fn is_summary_marker(line: &str) -> bool {
        line.contains(LOG_SUMMARY_MARKER)
    }

    /// Parse a bar/expected/computed triple from a line, if it matches
    ///
    /// A data line is at least three whitespace tokens where the first parses
    /// as a bar index and the next two as floats. Table headers, separator
    /// rules, and prose all fail one of those parses and fall through.
    pub fn parse_triple(line: &str) -> Option<(usize, f64, f64)> {
        let record = RawRecord::tokenize(line, Delimiter::Whitespace);
        if !record.meets_minimum(LOG_TRIPLE_MIN_TOKENS) {
            return None;
        }

        let index = parse_optional_usize(&record, 0)?;
        let expected = parse_optional_f64(&record, 1)?;
        let computed = parse_optional_f64(&record, 2)?;
        Some((index, expected, computed))
    }

    /// Scan the log, producing this indicator's computed series
    ///
    /// Later entries for the same bar overwrite earlier ones, including when
    /// the log carries more than one section for the indicator.
    pub fn extract(&self, content: &str, bar_count: usize) -> (AlignedSeries, ExtractStats) {
        let mut series = AlignedSeries::missing(self.name.clone(), bar_count);
        let mut stats = ExtractStats::default();
        let mut state = ScanState::Idle;

        for line in content.lines() {
            stats.lines_read += 1;

            match state {
                ScanState::Idle => {
                    if self.is_section_header(line) {
                        state = ScanState::Collecting;
                        stats.sections += 1;
                        debug!("Entered section {} for '{}'", stats.sections, self.name);
                    }
                }
                ScanState::Collecting => {
                    if Self::is_summary_marker(line) {
                        state = ScanState::Idle;
                    } else if let Some((index, _expected, computed)) = Self::parse_triple(line) {
                        if index < bar_count {
                            series.values[index] = Some(computed);
                            stats.lines_applied += 1;
                        } else {
                            stats.out_of_range += 1;
                            debug!(
                                "Dropped log entry: bar {} outside 0..{}",
                                index, bar_count
                            );
                        }
                    }
                    // anything else is interleaved prose
                }
            }
        }

        if stats.sections == 0 {
            warn!("No section for indicator '{}' found in log", self.name);
        }

        (series, stats)
    }
}
