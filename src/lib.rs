//! Indicator Validator Library
//!
//! A Rust library for validating computed financial indicator series against
//! the output of a reference implementation.
//!
//! This library provides tools for:
//! - Parsing whitespace-delimited OHLCV bar files and header-driven reference CSVs
//! - Building O(1) composite (date, time) key lookups over the primary bar series
//! - Projecting reference rows onto the primary bar-index space with explicit
//!   missing markers (never positional zipping)
//! - Extracting computed values from a structured export stream or an annotated
//!   text log via a small two-state scanner
//! - Computing validity-masked error statistics (MAE, max error, mean relative
//!   error, Pearson correlation) with tolerance-based pass/fail verdicts
//! - Rendering human-readable and JSON validation reports

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aligner;
        pub mod bar_index;
        pub mod comparison;
        pub mod extractor;
        pub mod pipeline;
        pub mod report;
        pub mod tabular_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AlignedSeries, Bar, ReferenceRow, TimeKey};
pub use config::ValidationConfig;

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for indicator validation operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Tabular input format error
    #[error("Format error in file '{file}': {message}")]
    TabularFormat { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Two series handed to the comparison engine differ in length
    #[error("Series length mismatch for field '{field}': reference has {reference} slots, computed has {computed}")]
    SeriesLengthMismatch {
        field: String,
        reference: usize,
        computed: usize,
    },

    /// No field had any jointly valid positions
    #[error("No valid overlap: {message}")]
    NoValidOverlap { message: String },

    /// One or more fields fell outside the configured tolerances
    #[error("Validation failed: {failed} of {total} fields outside tolerances")]
    ValidationFailed { failed: usize, total: usize },

    /// Report serialization error
    #[error("Report serialization error: {message}")]
    ReportSerialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a tabular format error
    pub fn tabular_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TabularFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a series length mismatch error
    pub fn series_length_mismatch(
        field: impl Into<String>,
        reference: usize,
        computed: usize,
    ) -> Self {
        Self::SeriesLengthMismatch {
            field: field.into(),
            reference,
            computed,
        }
    }

    /// Create a no-valid-overlap error
    pub fn no_valid_overlap(message: impl Into<String>) -> Self {
        Self::NoValidOverlap {
            message: message.into(),
        }
    }

    /// Create a validation failed error
    pub fn validation_failed(failed: usize, total: usize) -> Self {
        Self::ValidationFailed { failed, total }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: "JSON report serialization failed".to_string(),
            source: error,
        }
    }
}
