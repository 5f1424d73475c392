//! Test utilities and fixtures for tabular parser testing
//!
//! Shared fixture content and helpers used across the parser test modules.

use std::io::Write;

use tempfile::NamedTempFile;


/// OHLCV content with four good rows, one short row and one malformed row
pub fn create_test_ohlcv() -> String {
    r#"20240101 930 100.0 101.0 99.5 100.5 1250
20240101 931 100.5 102.0 100.0 101.5 980
20240101 932 101.5 101.8 100.9 101.2 1100
20240101 933 101.2
20240101 bad 101.2 102.0 100.8 101.0 900
20240102 930 101.0 103.0 100.5 102.5 1400"#
        .to_string()
}

/// Reference CSV content exercising missing cells and unkeyable rows
pub fn create_test_reference_csv() -> String {
    r#"Date Time Open TGT_115 TGT_315
20240101 930 100.0 1.0 0.5
20240101 931 100.5 2.0 bad
20240101 932 101.5 3.0 1.5
notadate 933 101.2 4.0 2.0
20240101"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
