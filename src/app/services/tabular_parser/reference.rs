//! Reference CSV parser
//!
//! The first line names the columns; indicator columns are located by header
//! lookup, with date and time fixed at positions 0-1. Unparsable numeric
//! cells become missing values, never zero. A row whose date or time cannot
//! be parsed cannot be keyed and is dropped.

use std::path::Path;

use tracing::{debug, info, warn};

use super::field_parsers::{parse_optional_f64, parse_optional_i32};
use super::header::ColumnMapping;
use super::ohlcv::read_input;
use super::record::{Delimiter, RawRecord};
use super::stats::ParseStats;
use crate::app::models::{ReferenceData, ReferenceRow};
use crate::constants::{reference_columns, REFERENCE_MIN_FIELDS};
use crate::{Error, Result};

/// Parse result for a reference CSV file
#[derive(Debug, Clone)]
pub struct ReferenceParseResult {
    /// Resolved columns and data rows
    pub data: ReferenceData,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Parser for the header-driven reference CSV format
#[derive(Debug, Clone)]
pub struct ReferenceParser {
    /// Indicator columns to extract, in request order
    fields: Vec<String>,
}

impl ReferenceParser {
    /// Create a parser that extracts the given named indicator columns
    pub fn new(fields: &[String]) -> Self {
        Self {
            fields: fields.to_vec(),
        }
    }

    /// Parse a reference CSV file
    pub fn parse_file(&self, path: &Path) -> Result<ReferenceParseResult> {
        info!("Parsing reference CSV: {}", path.display());

        let content = read_input(path)?;
        let result = self.parse_content(&content, &path.display().to_string())?;

        info!(
            "Parsed {} reference rows from {} records ({:.1}% success)",
            result.data.rows.len(),
            result.stats.total_records,
            result.stats.success_rate()
        );

        Ok(result)
    }

    /// Parse reference content already in memory
    ///
    /// `source` names the input in error messages.
    pub fn parse_content(&self, content: &str, source: &str) -> Result<ReferenceParseResult> {
        let mut lines = content.lines();

        let header_line = lines
            .by_ref()
            .find(|l| !l.trim().is_empty())
            .ok_or_else(|| Error::tabular_format(source, "missing header line"))?;

        let mapping = ColumnMapping::analyze(header_line, Delimiter::Whitespace);
        let columns = mapping.resolve(&self.fields);
        debug!(
            "Reference header carries {} columns; {} of {} requested fields located",
            mapping.len(),
            columns.iter().filter(|c| c.is_present()).count(),
            columns.len()
        );
        for column in columns.iter().filter(|c| !c.is_present()) {
            warn!(
                "Requested column '{}' not present in reference header",
                column.name
            );
        }

        let mut stats = ParseStats::new();
        let mut rows = Vec::new();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            stats.total_records += 1;

            let record = RawRecord::tokenize(line, Delimiter::Whitespace);
            if !record.meets_minimum(REFERENCE_MIN_FIELDS) {
                stats.dropped_short += 1;
                debug!(
                    "Dropped short reference record {} ({} fields)",
                    stats.total_records,
                    record.len()
                );
                continue;
            }

            let date = parse_optional_i32(&record, reference_columns::DATE);
            let time = parse_optional_i32(&record, reference_columns::TIME);
            let (Some(date), Some(time)) = (date, time) else {
                stats.dropped_malformed += 1;
                debug!(
                    "Dropped reference record {} with unparsable date/time",
                    stats.total_records
                );
                continue;
            };

            // Cells beyond the row's length or failing conversion stay missing
            let values = columns
                .iter()
                .map(|c| c.column.and_then(|idx| parse_optional_f64(&record, idx)))
                .collect();

            rows.push(ReferenceRow { date, time, values });
            stats.records_parsed += 1;
        }

        Ok(ReferenceParseResult {
            data: ReferenceData { columns, rows },
            stats,
        })
    }
}
