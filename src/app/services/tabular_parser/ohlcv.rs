//! Primary OHLCV series parser
//!
//! Whitespace-separated records with date, time, open, high, low, close and
//! volume in columns 0-6. Lines with fewer than seven fields are dropped. A
//! bar needs all seven values, so a row whose numeric cells fail to parse is
//! dropped as malformed rather than producing a partial bar.

use std::path::Path;

use tracing::{debug, info};

use super::field_parsers::{parse_optional_f64, parse_optional_i32};
use super::record::{Delimiter, RawRecord};
use super::stats::ParseStats;
use crate::app::models::Bar;
use crate::constants::{ohlcv_columns, OHLCV_MIN_FIELDS};
use crate::{Error, Result};

/// Parse result for a primary OHLCV file
#[derive(Debug, Clone)]
pub struct OhlcvParseResult {
    /// Bars in arrival order, indices assigned sequentially from 0
    pub bars: Vec<Bar>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Parser for the whitespace-delimited primary OHLCV format
#[derive(Debug, Clone, Default)]
pub struct OhlcvParser;

impl OhlcvParser {
    /// Create a new OHLCV parser
    pub fn new() -> Self {
        Self
    }

    /// Parse an OHLCV file into bars with statistics
    pub fn parse_file(&self, path: &Path) -> Result<OhlcvParseResult> {
        info!("Parsing OHLCV file: {}", path.display());

        let content = read_input(path)?;
        let result = self.parse_content(&content);

        info!(
            "Parsed {} bars from {} records ({:.1}% success)",
            result.bars.len(),
            result.stats.total_records,
            result.stats.success_rate()
        );

        Ok(result)
    }

    /// Parse OHLCV content already in memory
    pub fn parse_content(&self, content: &str) -> OhlcvParseResult {
        let mut stats = ParseStats::new();
        let mut bars = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            stats.total_records += 1;

            let record = RawRecord::tokenize(line, Delimiter::Whitespace);
            if !record.meets_minimum(OHLCV_MIN_FIELDS) {
                stats.dropped_short += 1;
                debug!(
                    "Dropped short OHLCV record {} ({} fields)",
                    stats.total_records,
                    record.len()
                );
                continue;
            }

            match parse_bar(&record, bars.len()) {
                Some(bar) => {
                    bars.push(bar);
                    stats.records_parsed += 1;
                }
                None => {
                    stats.dropped_malformed += 1;
                    debug!("Dropped malformed OHLCV record {}", stats.total_records);
                }
            }
        }

        OhlcvParseResult { bars, stats }
    }
}

/// Build a bar from a tokenized record, if every cell parses
fn parse_bar(record: &RawRecord<'_>, index: usize) -> Option<Bar> {
    Some(Bar {
        index,
        date: parse_optional_i32(record, ohlcv_columns::DATE)?,
        time: parse_optional_i32(record, ohlcv_columns::TIME)?,
        open: parse_optional_f64(record, ohlcv_columns::OPEN)?,
        high: parse_optional_f64(record, ohlcv_columns::HIGH)?,
        low: parse_optional_f64(record, ohlcv_columns::LOW)?,
        close: parse_optional_f64(record, ohlcv_columns::CLOSE)?,
        volume: parse_optional_f64(record, ohlcv_columns::VOLUME)?,
    })
}

/// Read an input file, mapping absence to a descriptive error
pub(crate) fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::io(format!("Failed to read {}", path.display()), e)
        }
    })
}
