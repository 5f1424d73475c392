//! End-to-end validation pipeline
//!
//! Runs the complete validation workflow: parse the primary OHLCV bars, build
//! the temporal key index, parse and align the reference CSV, extract the
//! computed values, then compare field by field and evaluate tolerances.
//!
//! Per-field tolerance failures are part of the outcome, not errors; the run
//! itself only fails when an input cannot be parsed at all or when not a
//! single field has any overlapping data.
//!
//! # Example Usage
//!
//! ```rust
//! use indicator_validator::app::services::pipeline::ValidationPipeline;
//! use indicator_validator::config::ValidationConfig;
//!
//! # fn example() -> indicator_validator::Result<()> {
//! let config = ValidationConfig::new("prices.txt", "reference.csv", "export.txt");
//! let outcome = ValidationPipeline::new(config).run(None)?;
//!
//! println!(
//!     "{} of {} fields passed",
//!     outcome.stats.fields_passed, outcome.stats.fields_compared
//! );
//! # Ok(())
//! # }
//! ```

use std::time::{Duration, Instant};

use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::app::models::AlignedSeries;
use crate::app::services::aligner::SeriesAligner;
use crate::app::services::bar_index::TemporalKeyIndex;
use crate::app::services::comparison::{ComparisonEngine, ComparisonResult, Verdict};
use crate::app::services::extractor::{ExportStreamParser, LogScanner};
use crate::app::services::tabular_parser::ohlcv::read_input;
use crate::app::services::tabular_parser::{OhlcvParser, ReferenceParser};
use crate::config::{ComputedSource, ValidationConfig};
use crate::{Error, Result};

#[cfg(test)]
pub mod tests;

/// Comparison result and verdict for one indicator field
#[derive(Debug, Clone)]
pub struct FieldOutcome {
    /// Full comparison output
    pub result: ComparisonResult,
    /// Tolerance evaluation of that output
    pub verdict: Verdict,
}

/// Counters describing one validation run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Bars loaded from the primary OHLCV file
    pub bars_loaded: usize,
    /// Rows parsed from the reference CSV
    pub reference_rows: usize,
    /// Reference rows that matched a primary bar
    pub rows_matched: usize,
    /// Reference rows with no matching primary bar
    pub rows_unmatched: usize,
    /// Fields compared
    pub fields_compared: usize,
    /// Fields that passed all tolerance checks
    pub fields_passed: usize,
    /// Fields that breached a tolerance
    pub fields_failed: usize,
    /// Fields with no valid overlapping data
    pub fields_no_data: usize,
    /// Total wall-clock time for the run
    pub elapsed: Duration,
}

/// Complete outcome of a validation run
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Per-field results in configured field order
    pub fields: Vec<FieldOutcome>,
    /// Run-level counters
    pub stats: RunStats,
}

impl ValidationOutcome {
    /// Check whether every field passed its tolerance checks
    pub fn all_passed(&self) -> bool {
        !self.fields.is_empty() && self.fields.iter().all(|f| f.verdict.is_pass())
    }

    /// Number of fields that did not pass
    pub fn failed_count(&self) -> usize {
        self.fields.iter().filter(|f| !f.verdict.is_pass()).count()
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Validation summary: {} bars | {} of {} reference rows matched | \
             fields: {} passed, {} failed, {} without data | {:.2}s",
            self.stats.bars_loaded,
            self.stats.rows_matched,
            self.stats.reference_rows,
            self.stats.fields_passed,
            self.stats.fields_failed,
            self.stats.fields_no_data,
            self.stats.elapsed.as_secs_f64()
        )
    }
}

/// Orchestrates the parse, align, extract, and compare stages
pub struct ValidationPipeline {
    config: ValidationConfig,
}

impl ValidationPipeline {
    /// Create a pipeline for the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Run the full validation workflow
    pub fn run(&self, progress: Option<&ProgressBar>) -> Result<ValidationOutcome> {
        let start = Instant::now();

        info!(
            "Starting validation of {} field(s) from {} source",
            self.config.fields.len(),
            self.config.source
        );

        // Stage 1: primary bars
        if let Some(pb) = progress {
            pb.set_message("Parsing OHLCV bars...");
        }
        let ohlcv = OhlcvParser::new().parse_file(&self.config.ohlcv_path)?;
        if ohlcv.bars.is_empty() {
            return Err(Error::tabular_format(
                self.config.ohlcv_path.display().to_string(),
                "no usable bars found",
            ));
        }
        if !ohlcv.stats.is_successful() {
            warn!(
                "Low OHLCV parse success rate: {:.1}% ({} of {} records)",
                ohlcv.stats.success_rate(),
                ohlcv.stats.records_parsed,
                ohlcv.stats.total_records
            );
        }
        let bar_count = ohlcv.bars.len();

        // Stage 2: temporal key index over the bars
        if let Some(pb) = progress {
            pb.set_message("Indexing bar timeline...");
        }
        let index = TemporalKeyIndex::build(&ohlcv.bars);

        // Stage 3: reference CSV
        if let Some(pb) = progress {
            pb.set_message("Parsing reference data...");
        }
        let reference =
            ReferenceParser::new(&self.config.fields).parse_file(&self.config.reference_path)?;

        // Stage 4: project reference rows onto bar-index space
        if let Some(pb) = progress {
            pb.set_message("Aligning reference series...");
        }
        let (aligned_reference, alignment) = SeriesAligner::new().align(&index, &reference.data);

        // Stage 5: computed values in the same space
        if let Some(pb) = progress {
            pb.set_message("Extracting computed values...");
        }
        let computed = self.extract_computed(bar_count)?;

        // Stage 6: field-by-field comparison and tolerance checks
        if let Some(pb) = progress {
            pb.set_message("Comparing fields...");
        }
        let engine = ComparisonEngine::new();
        let mut fields = Vec::with_capacity(self.config.fields.len());
        for (reference_series, computed_series) in aligned_reference.iter().zip(computed.iter()) {
            let result = engine.compare(reference_series, computed_series)?;
            let verdict = self.config.tolerances.evaluate(&result);
            info!(
                "Field '{}': {} ({} of {} bars valid)",
                result.field, verdict, result.valid_bars, result.total_bars
            );
            fields.push(FieldOutcome { result, verdict });
        }

        if fields.iter().all(|f| f.verdict == Verdict::NoValidData) {
            return Err(Error::no_valid_overlap(format!(
                "no field had values on both sides for any bar \
                 ({} bars, {} reference rows matched)",
                bar_count, alignment.rows_matched
            )));
        }

        let stats = RunStats {
            bars_loaded: bar_count,
            reference_rows: reference.data.rows.len(),
            rows_matched: alignment.rows_matched,
            rows_unmatched: alignment.rows_unmatched,
            fields_compared: fields.len(),
            fields_passed: fields.iter().filter(|f| f.verdict.is_pass()).count(),
            fields_failed: fields
                .iter()
                .filter(|f| !f.verdict.is_pass() && f.verdict != Verdict::NoValidData)
                .count(),
            fields_no_data: fields
                .iter()
                .filter(|f| f.verdict == Verdict::NoValidData)
                .count(),
            elapsed: start.elapsed(),
        };

        let outcome = ValidationOutcome { fields, stats };
        info!("{}", outcome.summary());

        Ok(outcome)
    }

    /// Extract computed series for every configured field
    fn extract_computed(&self, bar_count: usize) -> Result<Vec<AlignedSeries>> {
        match self.config.source {
            ComputedSource::ExportStream => {
                let parser = ExportStreamParser::new(&self.config.fields);
                let (series, _stats) = parser.parse_file(&self.config.computed_path, bar_count)?;
                Ok(series)
            }
            ComputedSource::AnnotatedLog => {
                info!(
                    "Scanning program log: {}",
                    self.config.computed_path.display()
                );
                let content = read_input(&self.config.computed_path)?;

                let mut series = Vec::with_capacity(self.config.fields.len());
                for field in &self.config.fields {
                    let scanner = LogScanner::new(field)?;
                    let (extracted, stats) = scanner.extract(&content, bar_count);
                    info!(
                        "Extracted {} value(s) for '{}' from {} section(s)",
                        stats.lines_applied, field, stats.sections
                    );
                    series.push(extracted);
                }
                Ok(series)
            }
        }
    }
}
