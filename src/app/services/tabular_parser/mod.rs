//! Tabular record parsing for the validator's two concrete input formats
//!
//! This module provides tolerant parsing of line-oriented, delimited text into
//! typed columns. Malformed individual fields never abort a file: a record
//! below the minimum field count is dropped and counted, and a cell that fails
//! numeric conversion becomes an explicit missing value while the rest of the
//! row survives.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`record`] - Line tokenization into positional fields
//! - [`header`] - Header-line column resolution (name to positional index)
//! - [`field_parsers`] - Tolerant typed field accessors
//! - [`ohlcv`] - Primary OHLCV bar file parser
//! - [`reference`] - Header-driven reference CSV parser
//! - [`stats`] - Parsing statistics
//!
//! ## Usage
//!
//! ```rust
//! use indicator_validator::app::services::tabular_parser::OhlcvParser;
//!
//! # fn example() -> indicator_validator::Result<()> {
//! let parser = OhlcvParser::new();
//! let result = parser.parse_file(std::path::Path::new("prices.txt"))?;
//!
//! println!(
//!     "Parsed {} bars from {} records",
//!     result.bars.len(),
//!     result.stats.total_records
//! );
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod header;
pub mod ohlcv;
pub mod record;
pub mod reference;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::ColumnMapping;
pub use ohlcv::{OhlcvParseResult, OhlcvParser};
pub use record::{Delimiter, RawRecord};
pub use reference::{ReferenceParseResult, ReferenceParser};
pub use stats::ParseStats;
