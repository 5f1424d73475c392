//! Element-wise series comparison and summary statistics
//!
//! The engine walks two equal-length aligned series slot by slot, records the
//! difference and ratio wherever both sides are valid, and condenses the valid
//! pairs into summary statistics for the report and the tolerance checks.

use tracing::debug;

use crate::app::models::AlignedSeries;
use crate::constants::{CORRELATION_DENOM_EPSILON, RATIO_EPSILON};
use crate::{Error, Result};

/// Summary statistics over the valid (both present and finite) bars
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonSummary {
    /// Mean signed error (computed minus reference); measures bias
    pub mean_error: f64,
    /// Mean absolute error
    pub mean_abs_error: f64,
    /// Largest absolute error
    pub max_abs_error: f64,
    /// Root-mean-square error
    pub rms_error: f64,
    /// Mean relative error in percent, over bars with non-negligible
    /// reference magnitude; absent when every reference value is near zero
    pub mean_rel_error_pct: Option<f64>,
    /// Pearson correlation; absent with fewer than two valid bars or when
    /// either series is constant over the valid bars
    pub correlation: Option<f64>,
}

/// Full comparison output for one indicator field
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ComparisonResult {
    /// Indicator field name
    pub field: String,
    /// Number of bars in the primary series
    pub total_bars: usize,
    /// Number of bars where both sides were present and finite
    pub valid_bars: usize,
    /// Bars where the computed side was missing or non-finite
    pub missing_computed: usize,
    /// Bars where the reference side was missing or non-finite
    pub missing_reference: usize,
    /// Per-bar difference (computed minus reference); `None` outside the mask
    pub difference: Vec<Option<f64>>,
    /// Per-bar ratio (computed over reference); `None` outside the mask
    pub ratio: Vec<Option<f64>>,
    /// Summary statistics; `None` when no bar passed the validity mask
    pub summary: Option<ComparisonSummary>,
}

impl ComparisonResult {
    /// Check whether any bar passed the validity mask
    pub fn has_valid_data(&self) -> bool {
        self.summary.is_some()
    }

    /// Fraction of bars that passed the validity mask, as a percentage
    pub fn valid_rate(&self) -> f64 {
        if self.total_bars == 0 {
            0.0
        } else {
            (self.valid_bars as f64 / self.total_bars as f64) * 100.0
        }
    }
}

/// Compares a reference series against a computed series in bar-index space
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Create a new comparison engine
    pub fn new() -> Self {
        Self
    }

    /// Compare two aligned series of equal length
    ///
    /// The only error path is a length mismatch, which indicates the caller
    /// aligned the inputs against different primary series. An empty validity
    /// mask is not an error: the result simply carries no summary.
    pub fn compare(
        &self,
        reference: &AlignedSeries,
        computed: &AlignedSeries,
    ) -> Result<ComparisonResult> {
        if reference.len() != computed.len() {
            return Err(Error::series_length_mismatch(
                &computed.name,
                reference.len(),
                computed.len(),
            ));
        }

        let total_bars = reference.len();
        let mut difference = vec![None; total_bars];
        let mut ratio = vec![None; total_bars];
        let mut missing_computed = 0;
        let mut missing_reference = 0;
        let mut pairs: Vec<(f64, f64)> = Vec::new();

        for (slot, (&ref_value, &comp_value)) in reference
            .values
            .iter()
            .zip(computed.values.iter())
            .enumerate()
        {
            if !is_valid_value(ref_value) {
                missing_reference += 1;
            }
            if !is_valid_value(comp_value) {
                missing_computed += 1;
            }

            let (Some(r), Some(c)) = (ref_value, comp_value) else {
                continue;
            };
            if !(r.is_finite() && c.is_finite()) {
                continue;
            }

            difference[slot] = Some(c - r);
            ratio[slot] = Some(if r.abs() > RATIO_EPSILON { c / r } else { 1.0 });
            pairs.push((r, c));
        }

        let summary = summarize(&pairs);

        debug!(
            "Compared '{}': {} of {} bars valid ({} computed missing, {} reference missing)",
            computed.name,
            pairs.len(),
            total_bars,
            missing_computed,
            missing_reference
        );

        Ok(ComparisonResult {
            field: computed.name.clone(),
            total_bars,
            valid_bars: pairs.len(),
            missing_computed,
            missing_reference,
            difference,
            ratio,
            summary,
        })
    }
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that a slot holds a present, finite value
fn is_valid_value(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v.is_finite())
}

/// Condense valid (reference, computed) pairs into summary statistics
///
/// Returns `None` for an empty slice so downstream consumers see "no valid
/// data" instead of NaN-filled statistics.
fn summarize(pairs: &[(f64, f64)]) -> Option<ComparisonSummary> {
    if pairs.is_empty() {
        return None;
    }

    let n = pairs.len() as f64;
    let mut sum_error = 0.0;
    let mut sum_abs_error = 0.0;
    let mut max_abs_error: f64 = 0.0;
    let mut sum_sq_error = 0.0;
    let mut rel_error_sum = 0.0;
    let mut rel_error_count = 0usize;

    for &(r, c) in pairs {
        let error = c - r;
        sum_error += error;
        sum_abs_error += error.abs();
        max_abs_error = max_abs_error.max(error.abs());
        sum_sq_error += error * error;

        if r.abs() > RATIO_EPSILON {
            rel_error_sum += (error.abs() / r.abs()) * 100.0;
            rel_error_count += 1;
        }
    }

    let mean_rel_error_pct = if rel_error_count > 0 {
        Some(rel_error_sum / rel_error_count as f64)
    } else {
        None
    };

    Some(ComparisonSummary {
        mean_error: sum_error / n,
        mean_abs_error: sum_abs_error / n,
        max_abs_error,
        rms_error: (sum_sq_error / n).sqrt(),
        mean_rel_error_pct,
        correlation: correlation(pairs),
    })
}

/// Pearson correlation coefficient over valid pairs
///
/// Undefined (returns `None`) with fewer than two pairs or when either side
/// has no variance, rather than dividing by a vanishing denominator.
fn correlation(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_r = pairs.iter().map(|(r, _)| r).sum::<f64>() / n;
    let mean_c = pairs.iter().map(|(_, c)| c).sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for &(r, c) in pairs {
        let dx = r - mean_r;
        let dy = c - mean_c;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom < CORRELATION_DENOM_EPSILON {
        None
    } else {
        Some(sxy / denom)
    }
}
