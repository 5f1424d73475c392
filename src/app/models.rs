//! Data models for indicator validation
//!
//! This module contains the core data structures for the primary OHLCV bar
//! series, the external reference dataset, and the bar-indexed aligned series
//! derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Temporal Key
// =============================================================================

/// Composite temporal key identifying one bar of the primary series
///
/// Both halves are kept in their source integer encodings: `date` as YYYYMMDD
/// and `time` as HHMM or HHMMSS, whichever the files carry. Alignment only
/// needs exact equality, so the encodings are never decoded into calendar
/// types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct TimeKey {
    /// Integer trade date, e.g. 20240101
    pub date: i32,

    /// Integer intraday time, e.g. 930 or 93000
    pub time: i32,
}

impl TimeKey {
    /// Create a new composite key
    pub fn new(date: i32, time: i32) -> Self {
        Self { date, time }
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.date, self.time)
    }
}

// =============================================================================
// Primary Series
// =============================================================================

/// One time step of the primary OHLCV series
///
/// The index is assigned by arrival order in the source file and is the
/// address space every aligned series is projected onto.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Bar {
    /// Sequential 0-based position in the primary file
    pub index: usize,

    /// Integer trade date, e.g. 20240101
    pub date: i32,

    /// Integer intraday time, e.g. 930 or 93000
    pub time: i32,

    /// Opening price
    pub open: f64,

    /// Highest traded price
    pub high: f64,

    /// Lowest traded price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Traded volume
    pub volume: f64,
}

impl Bar {
    /// The bar's composite temporal key
    pub fn key(&self) -> TimeKey {
        TimeKey::new(self.date, self.time)
    }
}

// =============================================================================
// Reference Dataset
// =============================================================================

/// A requested indicator column resolved against the reference file header
///
/// `column` is `None` when the header does not carry the requested name at
/// all, a distinct state from a present column whose cells fail to parse.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReferenceColumn {
    /// Field name as requested by the caller
    pub name: String,

    /// Positional index in the data rows, if the header carries the name
    pub column: Option<usize>,
}

impl ReferenceColumn {
    /// Whether the reference header carries this column
    pub fn is_present(&self) -> bool {
        self.column.is_some()
    }
}

/// One row of the external reference dataset
///
/// `values` is parallel to the owning [`ReferenceData::columns`]; each slot
/// is either a parsed float or missing (unparsable cell, cell beyond the
/// row's length, or absent column).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReferenceRow {
    /// Integer trade date, same encoding as [`Bar::date`]
    pub date: i32,

    /// Integer intraday time, same encoding as [`Bar::time`]
    pub time: i32,

    /// Field values in column order; `None` marks a missing value
    pub values: Vec<Option<f64>>,
}

impl ReferenceRow {
    /// The row's composite temporal key
    pub fn key(&self) -> TimeKey {
        TimeKey::new(self.date, self.time)
    }
}

/// A parsed reference dataset: resolved columns plus data rows
///
/// Rows are not guaranteed to align 1:1 with the primary series; they may
/// be fewer, gapped, or differently ordered. Alignment is the
/// [`SeriesAligner`](crate::app::services::aligner::SeriesAligner)'s job.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ReferenceData {
    /// Requested columns in request order
    pub columns: Vec<ReferenceColumn>,

    /// Data rows in file order
    pub rows: Vec<ReferenceRow>,
}

impl ReferenceData {
    /// Names of requested columns the reference header does not carry
    pub fn absent_fields(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| !c.is_present())
            .map(|c| c.name.as_str())
            .collect()
    }
}

// =============================================================================
// Aligned Series
// =============================================================================

/// A value array addressed by primary-bar index
///
/// Built by projecting a secondary dataset through the shared temporal key;
/// `None` is the explicit missing marker for every slot no source row
/// reached. Derived data: rebuilt when an input changes, never mutated in
/// place.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AlignedSeries {
    /// Field name this series carries
    pub name: String,

    /// One slot per primary bar index
    pub values: Vec<Option<f64>>,
}

impl AlignedSeries {
    /// Create an all-missing series of the given length
    pub fn missing(name: impl Into<String>, len: usize) -> Self {
        Self {
            name: name.into(),
            values: vec![None; len],
        }
    }

    /// Number of slots (equals the primary series bar count)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no slots
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the slot at `index` holds a finite value
    pub fn is_valid_at(&self, index: usize) -> bool {
        matches!(self.values.get(index), Some(Some(v)) if v.is_finite())
    }

    /// Number of slots holding finite values
    pub fn valid_count(&self) -> usize {
        self.values
            .iter()
            .filter(|v| matches!(v, Some(x) if x.is_finite()))
            .count()
    }

    /// Number of missing or non-finite slots
    pub fn missing_count(&self) -> usize {
        self.len() - self.valid_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_key_equality() {
        assert_eq!(TimeKey::new(20240101, 930), TimeKey::new(20240101, 930));
        assert_ne!(TimeKey::new(20240101, 930), TimeKey::new(20240101, 931));
        assert_ne!(TimeKey::new(20240102, 930), TimeKey::new(20240101, 930));
    }

    #[test]
    fn test_bar_key() {
        let bar = Bar {
            index: 0,
            date: 20240101,
            time: 930,
            open: 1.0,
            high: 2.0,
            low: 0.5,
            close: 1.5,
            volume: 100.0,
        };
        assert_eq!(bar.key(), TimeKey::new(20240101, 930));
    }

    #[test]
    fn test_aligned_series_missing_constructor() {
        let series = AlignedSeries::missing("TGT_115", 4);
        assert_eq!(series.len(), 4);
        assert_eq!(series.valid_count(), 0);
        assert_eq!(series.missing_count(), 4);
        assert!(!series.is_valid_at(0));
    }

    #[test]
    fn test_aligned_series_valid_count_ignores_non_finite() {
        let series = AlignedSeries {
            name: "TGT_115".to_string(),
            values: vec![Some(1.0), None, Some(f64::NAN), Some(f64::INFINITY)],
        };
        assert_eq!(series.valid_count(), 1);
        assert!(series.is_valid_at(0));
        assert!(!series.is_valid_at(2));
        assert!(!series.is_valid_at(3));
    }

    #[test]
    fn test_reference_data_absent_fields() {
        let data = ReferenceData {
            columns: vec![
                ReferenceColumn {
                    name: "TGT_115".to_string(),
                    column: Some(4),
                },
                ReferenceColumn {
                    name: "TGT_999".to_string(),
                    column: None,
                },
            ],
            rows: vec![],
        };
        assert_eq!(data.absent_fields(), vec!["TGT_999"]);
    }
}
