//! Tests for the validation pipeline
//!
//! Fixtures write complete input files into a temp directory and build run
//! configurations around them, so each test exercises the real file-to-verdict
//! path.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::ValidationConfig;


/// Three consecutive one-minute bars on 2024-01-01
pub const OHLCV_THREE_BARS: &str = "20240101 930 100.0 101.0 99.5 100.5 1000\n\
                                    20240101 931 100.5 102.0 100.0 101.5 1200\n\
                                    20240101 932 101.5 102.5 101.0 102.0 900\n";

/// Write an input file into the temp directory and return its path
pub fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Build a run configuration over freshly written input files
pub fn config_for(
    dir: &TempDir,
    ohlcv: &str,
    reference: &str,
    computed: &str,
    fields: &[&str],
) -> ValidationConfig {
    let ohlcv_path = write_input(dir, "bars.txt", ohlcv);
    let reference_path = write_input(dir, "reference.csv", reference);
    let computed_path = write_input(dir, "computed.txt", computed);

    ValidationConfig::new(ohlcv_path, reference_path, computed_path)
        .with_fields(fields.iter().map(|s| s.to_string()).collect())
}
