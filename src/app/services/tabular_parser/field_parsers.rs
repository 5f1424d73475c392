//! Field parsing utilities for tokenized records
//!
//! Typed accessors over [`RawRecord`] fields. All of them are tolerant:
//! a cell that is absent (row too short) or fails numeric conversion yields
//! `None`, never an error, so partially malformed rows keep their good fields.

use super::record::RawRecord;

/// Parse a float field; absent or unparsable cells are missing
///
/// `nan` and `inf` spellings parse successfully into non-finite floats; the
/// validity mask downstream is what excludes them.
pub fn parse_optional_f64(record: &RawRecord<'_>, index: usize) -> Option<f64> {
    record.get(index).and_then(|s| s.parse::<f64>().ok())
}

/// Parse an integer field; absent or unparsable cells are missing
pub fn parse_optional_i32(record: &RawRecord<'_>, index: usize) -> Option<i32> {
    record.get(index).and_then(|s| s.parse::<i32>().ok())
}

/// Parse an unsigned index field; absent or unparsable cells are missing
pub fn parse_optional_usize(record: &RawRecord<'_>, index: usize) -> Option<usize> {
    record.get(index).and_then(|s| s.parse::<usize>().ok())
}
