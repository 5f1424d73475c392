//! Application constants for the indicator validator
//!
//! This module contains the column layouts of the supported input formats,
//! the numeric guard values used by the comparison engine, and the default
//! tolerances applied when none are configured.

// =============================================================================
// Input Format Layout
// =============================================================================

/// Minimum fields for an OHLCV record (date time open high low close volume)
pub const OHLCV_MIN_FIELDS: usize = 7;

/// Minimum fields for a reference CSV data row (date and time)
pub const REFERENCE_MIN_FIELDS: usize = 2;

/// Fixed column positions in the whitespace-delimited OHLCV format
pub mod ohlcv_columns {
    pub const DATE: usize = 0;
    pub const TIME: usize = 1;
    pub const OPEN: usize = 2;
    pub const HIGH: usize = 3;
    pub const LOW: usize = 4;
    pub const CLOSE: usize = 5;
    pub const VOLUME: usize = 6;
}

/// Fixed column positions shared by reference CSV rows
pub mod reference_columns {
    pub const DATE: usize = 0;
    pub const TIME: usize = 1;
}

// =============================================================================
// Annotated Log Markers
// =============================================================================

/// Marker that terminates a per-indicator section in annotated log output
pub const LOG_SUMMARY_MARKER: &str = "Summary:";

/// Minimum whitespace tokens for a bar/expected/computed data line
pub const LOG_TRIPLE_MIN_TOKENS: usize = 3;

// =============================================================================
// Numeric Guards
// =============================================================================

/// Reference magnitude below which the ratio defaults to 1.0 instead of
/// dividing, and below which a position is excluded from relative error
pub const RATIO_EPSILON: f64 = 1e-10;

/// Correlation denominator magnitude below which the coefficient is undefined
pub const CORRELATION_DENOM_EPSILON: f64 = 1e-10;

// =============================================================================
// Defaults
// =============================================================================

/// Default values applied when the configuration leaves them unset
pub mod defaults {
    /// Target indicator fields validated when none are requested
    pub const TARGET_FIELDS: &[&str] = &["TGT_115", "TGT_315", "TGT_555"];

    /// Largest tolerated absolute error between computed and reference values
    pub const MAX_ABS_ERROR: f64 = 0.01;

    /// Largest tolerated mean relative error, in percent
    pub const MAX_MEAN_REL_ERROR_PCT: f64 = 1.0;

    /// Smallest tolerated Pearson correlation
    pub const MIN_CORRELATION: f64 = 0.99;

    /// Line-protocol export endpoint host
    pub const EXPORT_HOST: &str = "127.0.0.1";

    /// Line-protocol export endpoint port
    pub const EXPORT_PORT: u16 = 9009;
}

/// Parse success rate (percent) below which a source file is considered suspect
pub const MIN_PARSE_SUCCESS_RATE: f64 = 90.0;

// =============================================================================
// Report Formatting
// =============================================================================

/// Width of the banner and separator rules in the text report
pub const REPORT_WIDTH: usize = 80;

/// Title line of the text report
pub const REPORT_TITLE: &str = "INDICATOR VALIDATION REPORT";

/// Timestamp format for the report header
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Helper Functions
// =============================================================================

/// Default target fields as owned strings, for configuration defaults
pub fn default_target_fields() -> Vec<String> {
    defaults::TARGET_FIELDS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target_fields() {
        let fields = default_target_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "TGT_115");
    }

    #[test]
    fn test_ohlcv_layout_matches_min_fields() {
        assert_eq!(ohlcv_columns::VOLUME + 1, OHLCV_MIN_FIELDS);
    }
}
