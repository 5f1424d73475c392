//! Series comparison and tolerance checking
//!
//! This module turns a pair of aligned series (reference and computed values for
//! the same indicator, both in bar-index space) into per-bar differences, summary
//! statistics, and a pass/fail verdict.
//!
//! # Architecture
//!
//! The module is organized into two components:
//! - [`engine`] - Element-wise comparison and summary statistics
//! - [`validator`] - Tolerance configuration and verdict evaluation
//!
//! # Comparison Semantics
//!
//! A bar participates in the comparison only when both series hold a present,
//! finite value at that slot (the validity mask). Missing or non-finite values
//! never contaminate the statistics: they are counted and excluded. When no bar
//! passes the mask the summary is absent rather than NaN-filled.
//!
//! # Example Usage
//!
//! ```rust
//! use indicator_validator::app::models::AlignedSeries;
//! use indicator_validator::app::services::comparison::{ComparisonEngine, ToleranceConfig};
//!
//! # fn example() -> indicator_validator::Result<()> {
//! let reference = AlignedSeries {
//!     name: "TGT_115".to_string(),
//!     values: vec![Some(1.0), None, Some(3.0)],
//! };
//! let computed = AlignedSeries {
//!     name: "TGT_115".to_string(),
//!     values: vec![Some(1.1), Some(2.0), Some(2.9)],
//! };
//!
//! let engine = ComparisonEngine::new();
//! let result = engine.compare(&reference, &computed)?;
//! println!("{} valid bars of {}", result.valid_bars, result.total_bars);
//!
//! let verdict = ToleranceConfig::default().evaluate(&result);
//! println!("Verdict: {}", verdict);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::{ComparisonEngine, ComparisonResult, ComparisonSummary};
pub use validator::{ToleranceConfig, Verdict};
