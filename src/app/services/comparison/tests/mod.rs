//! Tests for the comparison service
//!
//! Shared fixtures build aligned series and comparison results directly,
//! keeping each test focused on one statistic or verdict rule.

use crate::app::models::AlignedSeries;
use crate::app::services::comparison::{ComparisonResult, ComparisonSummary};


/// Build an aligned series from explicit slot values
pub fn series(name: &str, values: Vec<Option<f64>>) -> AlignedSeries {
    AlignedSeries {
        name: name.to_string(),
        values,
    }
}

/// Comparison summary where every statistic is well inside the default tolerances
pub fn passing_summary() -> ComparisonSummary {
    ComparisonSummary {
        mean_error: 0.0001,
        mean_abs_error: 0.0002,
        max_abs_error: 0.0005,
        rms_error: 0.0003,
        mean_rel_error_pct: Some(0.05),
        correlation: Some(0.9999),
    }
}

/// Comparison result wrapper around an optional summary
pub fn result_with_summary(summary: Option<ComparisonSummary>) -> ComparisonResult {
    let valid_bars = if summary.is_some() { 10 } else { 0 };
    ComparisonResult {
        field: "TGT_115".to_string(),
        total_bars: 10,
        valid_bars,
        missing_computed: 0,
        missing_reference: 10 - valid_bars,
        difference: vec![None; 10],
        ratio: vec![None; 10],
        summary,
    }
}
