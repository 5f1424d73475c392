//! Tolerance configuration and verdict evaluation
//!
//! Summary statistics alone do not say whether an implementation is correct.
//! The tolerance checks turn them into a single verdict per field, evaluated
//! in a fixed order so a report always names the first threshold breached.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::services::comparison::ComparisonResult;
use crate::constants::defaults;
use crate::{Error, Result};

/// Acceptance thresholds for one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    /// Largest tolerated absolute error on any valid bar
    pub max_abs_error: f64,
    /// Largest tolerated mean relative error, in percent
    pub max_mean_rel_error_pct: f64,
    /// Smallest tolerated Pearson correlation
    pub min_correlation: f64,
}

impl ToleranceConfig {
    /// Create a tolerance configuration with explicit thresholds
    pub fn new(max_abs_error: f64, max_mean_rel_error_pct: f64, min_correlation: f64) -> Self {
        Self {
            max_abs_error,
            max_mean_rel_error_pct,
            min_correlation,
        }
    }

    /// Validate that the thresholds are usable
    pub fn validate(&self) -> Result<()> {
        if !self.max_abs_error.is_finite() || self.max_abs_error < 0.0 {
            return Err(Error::configuration(format!(
                "max_abs_error must be a non-negative number, got {}",
                self.max_abs_error
            )));
        }
        if !self.max_mean_rel_error_pct.is_finite() || self.max_mean_rel_error_pct < 0.0 {
            return Err(Error::configuration(format!(
                "max_mean_rel_error_pct must be a non-negative number, got {}",
                self.max_mean_rel_error_pct
            )));
        }
        if !self.min_correlation.is_finite()
            || !(-1.0..=1.0).contains(&self.min_correlation)
        {
            return Err(Error::configuration(format!(
                "min_correlation must lie in [-1, 1], got {}",
                self.min_correlation
            )));
        }
        Ok(())
    }

    /// Evaluate a comparison result against the thresholds
    ///
    /// Checks run in a fixed order and the first failure wins: no valid data,
    /// then maximum absolute error, then mean relative error, then correlation.
    /// An undefined mean relative error skips its check (every reference value
    /// was near zero, so the metric carries no signal), while an undefined
    /// correlation fails the correlation check.
    pub fn evaluate(&self, result: &ComparisonResult) -> Verdict {
        let Some(summary) = &result.summary else {
            return Verdict::NoValidData;
        };

        if summary.max_abs_error > self.max_abs_error {
            return Verdict::MaxErrorExceeded;
        }

        if let Some(pct) = summary.mean_rel_error_pct {
            if pct > self.max_mean_rel_error_pct {
                return Verdict::MeanRelErrorExceeded;
            }
        }

        if !summary.correlation.is_some_and(|c| c >= self.min_correlation) {
            return Verdict::CorrelationLow;
        }

        Verdict::Pass
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            max_abs_error: defaults::MAX_ABS_ERROR,
            max_mean_rel_error_pct: defaults::MAX_MEAN_REL_ERROR_PCT,
            min_correlation: defaults::MIN_CORRELATION,
        }
    }
}

/// Outcome of tolerance evaluation for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// All checks passed
    Pass,
    /// Not a single bar had valid values on both sides
    NoValidData,
    /// Maximum absolute error breached the threshold
    MaxErrorExceeded,
    /// Mean relative error breached the threshold
    MeanRelErrorExceeded,
    /// Correlation below the threshold, or undefined
    CorrelationLow,
}

impl Verdict {
    /// Check whether this verdict counts as a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Short status label for report headings
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::NoValidData => "NO DATA",
            Verdict::MaxErrorExceeded
            | Verdict::MeanRelErrorExceeded
            | Verdict::CorrelationLow => "FAIL",
        }
    }

    /// Human-readable reason for the verdict
    pub fn reason(&self) -> &'static str {
        match self {
            Verdict::Pass => "within tolerances",
            Verdict::NoValidData => "no valid overlapping data",
            Verdict::MaxErrorExceeded => "maximum absolute error exceeds tolerance",
            Verdict::MeanRelErrorExceeded => "mean relative error exceeds tolerance",
            Verdict::CorrelationLow => "correlation below tolerance",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            write!(f, "{}", self.label())
        } else {
            write!(f, "{} ({})", self.label(), self.reason())
        }
    }
}
