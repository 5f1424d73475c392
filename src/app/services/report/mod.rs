//! Validation report rendering
//!
//! Renders a finished [`ValidationOutcome`](crate::app::services::pipeline::ValidationOutcome)
//! as either the fixed-width text report or a machine-readable JSON document.
//! Rendering is presentation only; every number here was computed upstream.
//!
//! Per-bar difference and ratio vectors stay out of the report on purpose:
//! they scale with the bar count, and the report is meant to be read or
//! archived, not re-processed.

use chrono::Local;
use serde_json::json;

use crate::Result;
use crate::app::services::pipeline::ValidationOutcome;
use crate::constants::{REPORT_TIMESTAMP_FORMAT, REPORT_TITLE, REPORT_WIDTH};

/// Renders validation outcomes for humans and machines
pub struct ReportEmitter;

impl ReportEmitter {
    /// Create a new report emitter
    pub fn new() -> Self {
        Self
    }

    /// Render the fixed-width text report
    pub fn render_text(&self, outcome: &ValidationOutcome) -> String {
        let stats = &outcome.stats;
        let mut out = String::new();

        let banner = "=".repeat(REPORT_WIDTH);
        let rule = "-".repeat(REPORT_WIDTH);
        let title = format!("{:^width$}", REPORT_TITLE, width = REPORT_WIDTH);

        out.push_str(&banner);
        out.push('\n');
        out.push_str(title.trim_end());
        out.push('\n');
        out.push_str(&banner);
        out.push('\n');

        out.push_str(&format!(
            "Generated: {}\n",
            Local::now().format(REPORT_TIMESTAMP_FORMAT)
        ));
        out.push_str(&format!("Bars loaded: {}\n", stats.bars_loaded));
        out.push_str(&format!(
            "Reference rows: {} ({} matched, {} unmatched)\n",
            stats.reference_rows, stats.rows_matched, stats.rows_unmatched
        ));
        out.push_str(&format!(
            "Fields compared: {} ({} passed, {} failed, {} without data)\n",
            stats.fields_compared, stats.fields_passed, stats.fields_failed, stats.fields_no_data
        ));
        out.push_str(&format!("Elapsed: {:.2}s\n", stats.elapsed.as_secs_f64()));

        for field in &outcome.fields {
            let result = &field.result;

            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
            out.push_str(&format!("Field: {}\n", result.field));
            out.push_str(&format!("Status: {}\n", field.verdict));
            out.push_str(&format!("  Total bars:       {}\n", result.total_bars));
            out.push_str(&format!(
                "  Valid bars:       {} ({:.1}%)\n",
                result.valid_bars,
                result.valid_rate()
            ));
            out.push_str(&format!(
                "  Missing values:   computed={}, reference={}\n",
                result.missing_computed, result.missing_reference
            ));

            match &result.summary {
                Some(summary) => {
                    out.push_str(&format!("  Mean error:       {:.6}\n", summary.mean_error));
                    out.push_str(&format!(
                        "  Mean abs error:   {:.6}\n",
                        summary.mean_abs_error
                    ));
                    out.push_str(&format!(
                        "  Max abs error:    {:.6}\n",
                        summary.max_abs_error
                    ));
                    out.push_str(&format!("  RMS error:        {:.6}\n", summary.rms_error));
                    match summary.mean_rel_error_pct {
                        Some(pct) => {
                            out.push_str(&format!("  Mean rel error:   {:.3}%\n", pct));
                        }
                        None => out.push_str("  Mean rel error:   n/a\n"),
                    }
                    match summary.correlation {
                        Some(r) => out.push_str(&format!("  Correlation:      {:.6}\n", r)),
                        None => out.push_str("  Correlation:      n/a\n"),
                    }
                }
                None => {
                    out.push_str("  No valid overlapping bars to compare.\n");
                }
            }
        }

        out.push('\n');
        out.push_str(&banner);
        out.push('\n');
        let overall = if outcome.all_passed() { "PASS" } else { "FAIL" };
        out.push_str(&format!(
            "Overall: {} ({}/{} fields passed)\n",
            overall, stats.fields_passed, stats.fields_compared
        ));
        out.push_str(&banner);
        out.push('\n');

        out
    }

    /// Render the JSON report
    pub fn render_json(&self, outcome: &ValidationOutcome) -> Result<String> {
        let stats = &outcome.stats;

        let report = json!({
            "generated": Local::now().format(REPORT_TIMESTAMP_FORMAT).to_string(),
            "overall_pass": outcome.all_passed(),
            "bars_loaded": stats.bars_loaded,
            "reference_rows": stats.reference_rows,
            "rows_matched": stats.rows_matched,
            "rows_unmatched": stats.rows_unmatched,
            "fields_compared": stats.fields_compared,
            "fields_passed": stats.fields_passed,
            "fields_failed": stats.fields_failed,
            "fields_no_data": stats.fields_no_data,
            "elapsed_seconds": stats.elapsed.as_secs_f64(),
            "fields": outcome.fields.iter().map(|field| {
                json!({
                    "field": field.result.field,
                    "verdict": field.verdict,
                    "passed": field.verdict.is_pass(),
                    "reason": field.verdict.reason(),
                    "total_bars": field.result.total_bars,
                    "valid_bars": field.result.valid_bars,
                    "missing_computed": field.result.missing_computed,
                    "missing_reference": field.result.missing_reference,
                    "summary": field.result.summary,
                })
            }).collect::<Vec<_>>(),
        });

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

impl Default for ReportEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::app::services::comparison::{ComparisonResult, ComparisonSummary, Verdict};
    use crate::app::services::pipeline::{FieldOutcome, RunStats, ValidationOutcome};

    fn field_outcome(field: &str, verdict: Verdict, summary: Option<ComparisonSummary>) -> FieldOutcome {
        let valid_bars = if summary.is_some() { 2 } else { 0 };
        FieldOutcome {
            result: ComparisonResult {
                field: field.to_string(),
                total_bars: 3,
                valid_bars,
                missing_computed: 0,
                missing_reference: 3 - valid_bars,
                difference: vec![None; 3],
                ratio: vec![None; 3],
                summary,
            },
            verdict,
        }
    }

    fn sample_summary() -> ComparisonSummary {
        ComparisonSummary {
            mean_error: 0.0,
            mean_abs_error: 0.0001,
            max_abs_error: 0.0002,
            rms_error: 0.0001,
            mean_rel_error_pct: Some(0.01),
            correlation: Some(0.9999),
        }
    }

    fn sample_outcome() -> ValidationOutcome {
        ValidationOutcome {
            fields: vec![
                field_outcome("TGT_115", Verdict::Pass, Some(sample_summary())),
                field_outcome("TGT_315", Verdict::NoValidData, None),
            ],
            stats: RunStats {
                bars_loaded: 3,
                reference_rows: 2,
                rows_matched: 2,
                rows_unmatched: 0,
                fields_compared: 2,
                fields_passed: 1,
                fields_failed: 0,
                fields_no_data: 1,
                elapsed: Duration::from_millis(42),
            },
        }
    }

    #[test]
    fn test_text_report_structure() {
        let report = ReportEmitter::new().render_text(&sample_outcome());

        assert!(report.contains(&"=".repeat(80)));
        assert!(report.contains("INDICATOR VALIDATION REPORT"));
        assert!(report.contains("Bars loaded: 3"));
        assert!(report.contains("Reference rows: 2 (2 matched, 0 unmatched)"));
        assert!(report.contains("Fields compared: 2 (1 passed, 0 failed, 1 without data)"));
    }

    #[test]
    fn test_text_report_field_blocks() {
        let report = ReportEmitter::new().render_text(&sample_outcome());

        assert!(report.contains("Field: TGT_115"));
        assert!(report.contains("Status: PASS"));
        assert!(report.contains("Max abs error:    0.000200"));
        assert!(report.contains("Correlation:      0.999900"));
    }

    #[test]
    fn test_text_report_no_data_wording() {
        let report = ReportEmitter::new().render_text(&sample_outcome());

        assert!(report.contains("Field: TGT_315"));
        assert!(report.contains("Status: NO DATA (no valid overlapping data)"));
        assert!(report.contains("No valid overlapping bars to compare."));
    }

    #[test]
    fn test_text_report_overall_line() {
        let report = ReportEmitter::new().render_text(&sample_outcome());
        assert!(report.contains("Overall: FAIL (1/2 fields passed)"));

        let passing = ValidationOutcome {
            fields: vec![field_outcome(
                "TGT_115",
                Verdict::Pass,
                Some(sample_summary()),
            )],
            stats: RunStats {
                fields_compared: 1,
                fields_passed: 1,
                ..sample_outcome().stats
            },
        };
        let report = ReportEmitter::new().render_text(&passing);
        assert!(report.contains("Overall: PASS (1/1 fields passed)"));
    }

    #[test]
    fn test_undefined_statistics_render_as_na() {
        let mut outcome = sample_outcome();
        if let Some(summary) = &mut outcome.fields[0].result.summary {
            summary.mean_rel_error_pct = None;
            summary.correlation = None;
        }

        let report = ReportEmitter::new().render_text(&outcome);
        assert!(report.contains("Mean rel error:   n/a"));
        assert!(report.contains("Correlation:      n/a"));
    }

    #[test]
    fn test_json_report_fields() {
        let rendered = ReportEmitter::new()
            .render_json(&sample_outcome())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["overall_pass"], false);
        assert_eq!(value["bars_loaded"], 3);
        assert_eq!(value["fields_no_data"], 1);
        assert_eq!(value["fields"][0]["field"], "TGT_115");
        assert_eq!(value["fields"][0]["verdict"], "pass");
        assert_eq!(value["fields"][0]["summary"]["max_abs_error"], 0.0002);
        assert_eq!(value["fields"][1]["verdict"], "no_valid_data");
        assert!(value["fields"][1]["summary"].is_null());
    }
}
