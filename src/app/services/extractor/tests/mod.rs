//! Test fixtures for computed value extraction


/// Annotated log content in the reference tool's output shape: banner lines,
/// prose, per-indicator sections with tabular data, and summary blocks
pub fn create_test_log() -> String {
    r#"================================================================
HIT OR MISS TARGET INDICATOR VALIDATION
================================================================
Loaded 5 bars from prices.txt
9 9.000000 9.000000 0.000000 0.00

================================================================
TGT_115 (Up=1, Down=1, Cutoff=5)
================================================================
First valid bar: 1 (date: 20240101)

Bar    Expected   Computed   Error      Error %
------------------------------------------------
1      0.250000   0.250000   0.000000   0.00
2      0.500000   0.510000   0.010000   2.00
4      -1.000000  -1.000000  0.000000   0.00

Summary:
  Valid bars: 3
  MAE: 0.003333
  Max Error: 0.010000

================================================================
TGT_315 (Up=3, Down=3, Cutoff=15)
================================================================

Bar    Expected   Computed   Error      Error %
------------------------------------------------
0      1.000000   1.000000   0.000000   0.00
3      2.000000   1.900000   0.100000   5.00

Summary:
  Valid bars: 2
"#
    .to_string()
}
