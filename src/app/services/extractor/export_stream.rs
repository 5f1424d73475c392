//! Structured export stream parser
//!
//! One line per bar: `<bar_index> <v1> ... <vk>`, values in a fixed declared
//! field order. The parse is direct: index selects the slot, values fill the
//! fields. A line with the wrong field count is dropped; individual values
//! that fail to parse become missing without taking the line down with them.

use std::path::Path;

use tracing::{debug, info};

use super::ExtractStats;
use crate::app::models::AlignedSeries;
use crate::app::services::tabular_parser::field_parsers::{
    parse_optional_f64, parse_optional_usize,
};
use crate::app::services::tabular_parser::ohlcv::read_input;
use crate::app::services::tabular_parser::{Delimiter, RawRecord};
use crate::Result;

/// Parser for the structured export stream format
#[derive(Debug, Clone)]
pub struct ExportStreamParser {
    /// Declared field order for the per-line values
    fields: Vec<String>,
}

impl ExportStreamParser {
    /// Create a parser with the declared per-line field order
    pub fn new(fields: &[String]) -> Self {
        Self {
            fields: fields.to_vec(),
        }
    }

    /// Parse an export file into one series per declared field
    pub fn parse_file(
        &self,
        path: &Path,
        bar_count: usize,
    ) -> Result<(Vec<AlignedSeries>, ExtractStats)> {
        info!("Parsing export stream: {}", path.display());

        let content = read_input(path)?;
        let (series, stats) = self.parse_content(&content, bar_count);

        info!(
            "Applied {} of {} export lines ({} dropped, {} out of range)",
            stats.lines_applied, stats.lines_read, stats.lines_dropped, stats.out_of_range
        );

        Ok((series, stats))
    }

    /// Parse export content already in memory
    pub fn parse_content(
        &self,
        content: &str,
        bar_count: usize,
    ) -> (Vec<AlignedSeries>, ExtractStats) {
        let mut series: Vec<AlignedSeries> = self
            .fields
            .iter()
            .map(|name| AlignedSeries::missing(name.clone(), bar_count))
            .collect();
        let mut stats = ExtractStats::default();
        let expected_fields = 1 + self.fields.len();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            stats.lines_read += 1;

            let record = RawRecord::tokenize(line, Delimiter::Whitespace);
            if record.len() != expected_fields {
                stats.lines_dropped += 1;
                debug!(
                    "Dropped export line {} with {} fields (expected {})",
                    stats.lines_read,
                    record.len(),
                    expected_fields
                );
                continue;
            }

            let Some(index) = parse_optional_usize(&record, 0) else {
                stats.lines_dropped += 1;
                debug!("Dropped export line {} with unparsable index", stats.lines_read);
                continue;
            };
            if index >= bar_count {
                stats.out_of_range += 1;
                debug!(
                    "Dropped export line {}: index {} outside 0..{}",
                    stats.lines_read, index, bar_count
                );
                continue;
            }

            for (offset, s) in series.iter_mut().enumerate() {
                s.values[index] = parse_optional_f64(&record, 1 + offset);
            }
            stats.lines_applied += 1;
        }

        (series, stats)
    }
}
