//! Command-line argument definitions for the indicator validator
//!
//! This module defines the complete CLI interface using the clap derive API.
//! The validator is a single-purpose tool, so the interface is flat: three
//! input paths, the computed source format, and the tolerance overrides.

use crate::app::services::comparison::ToleranceConfig;
use crate::config::ComputedSource;
use crate::constants::defaults;
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the indicator validator
///
/// Validates indicator values computed by a program under test against a
/// reference implementation's CSV output, aligned over a shared OHLCV bar
/// series.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "indicator-validator",
    version,
    about = "Validate computed indicator series against a reference implementation",
    long_about = "Aligns a reference implementation's indicator values and a program's computed \
                  values onto the same OHLCV bar series, compares them bar by bar, and reports \
                  error statistics with pass/fail verdicts per indicator field. Rows that match \
                  no bar are dropped; bars no row covers stay explicitly missing and never \
                  contaminate the statistics."
)]
pub struct Args {
    /// Path to the primary OHLCV bar file
    ///
    /// Whitespace-delimited bars, one per line: date, time, open, high, low,
    /// close, volume. Defines the timeline everything else is aligned to.
    #[arg(
        short = 'b',
        long = "bars",
        value_name = "FILE",
        help = "Path to the primary OHLCV bar file"
    )]
    pub ohlcv_path: PathBuf,

    /// Path to the reference indicator CSV
    ///
    /// First non-blank line is a whitespace-delimited header naming the
    /// columns; date and time are taken from the first two columns of each
    /// data row.
    #[arg(
        short = 'r',
        long = "reference",
        value_name = "FILE",
        help = "Path to the reference indicator CSV"
    )]
    pub reference_path: PathBuf,

    /// Path to the computed output file
    ///
    /// Either a captured export stream (bar index followed by one value per
    /// field) or the program's annotated log, selected with --source.
    #[arg(
        short = 'c',
        long = "computed",
        value_name = "FILE",
        help = "Path to the computed output (export stream or program log)"
    )]
    pub computed_path: PathBuf,

    /// Format of the computed output file
    #[arg(
        long = "source",
        value_enum,
        default_value = "export-stream",
        help = "Format of the computed output file"
    )]
    pub source: ComputedSource,

    /// Indicator fields to validate (comma-separated list)
    ///
    /// Names must match the reference CSV header columns and the program's
    /// log sections. If not specified, validates the default target fields:
    /// TGT_115, TGT_315, TGT_555.
    #[arg(
        short = 'f',
        long = "fields",
        value_name = "LIST",
        help = "Comma-separated list of indicator fields to validate"
    )]
    pub fields: Option<FieldList>,

    /// Maximum tolerated absolute error on any valid bar
    #[arg(
        long = "max-abs-error",
        value_name = "ERROR",
        default_value_t = defaults::MAX_ABS_ERROR,
        help = "Maximum tolerated absolute error on any valid bar"
    )]
    pub max_abs_error: f64,

    /// Maximum tolerated mean relative error in percent
    #[arg(
        long = "max-rel-error",
        value_name = "PERCENT",
        default_value_t = defaults::MAX_MEAN_REL_ERROR_PCT,
        help = "Maximum tolerated mean relative error in percent"
    )]
    pub max_mean_rel_error_pct: f64,

    /// Minimum tolerated Pearson correlation
    #[arg(
        long = "min-correlation",
        value_name = "COEFF",
        default_value_t = defaults::MIN_CORRELATION,
        help = "Minimum tolerated Pearson correlation"
    )]
    pub min_correlation: f64,

    /// Output format for the validation report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the validation report
    ///
    /// If not specified, the report is written to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the validation report"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the report itself. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors and the report",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the validation report
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated indicator field lists
#[derive(Debug, Clone)]
pub struct FieldList {
    pub fields: Vec<String>,
}

impl FromStr for FieldList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if fields.is_empty() {
            return Err(Error::configuration(
                "Field list cannot be empty".to_string(),
            ));
        }

        Ok(FieldList { fields })
    }
}

impl Args {
    /// Validate the arguments for consistency
    ///
    /// Input file checks happen when the run configuration is built; this
    /// only covers what the configuration never sees.
    pub fn validate(&self) -> Result<()> {
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Get the list of indicator fields to validate
    pub fn get_fields(&self) -> Vec<String> {
        match &self.fields {
            Some(field_list) => field_list.fields.clone(),
            None => crate::constants::default_target_fields(),
        }
    }

    /// Build the tolerance thresholds from the CLI overrides
    pub fn get_tolerances(&self) -> ToleranceConfig {
        ToleranceConfig::new(
            self.max_abs_error,
            self.max_mean_rel_error_pct,
            self.min_correlation,
        )
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            ohlcv_path: PathBuf::new(),
            reference_path: PathBuf::new(),
            computed_path: PathBuf::new(),
            source: ComputedSource::ExportStream,
            fields: None,
            max_abs_error: defaults::MAX_ABS_ERROR,
            max_mean_rel_error_pct: defaults::MAX_MEAN_REL_ERROR_PCT,
            min_correlation: defaults::MIN_CORRELATION,
            output_format: OutputFormat::Human,
            output_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_field_list_parsing() {
        // Valid single field
        let result = FieldList::from_str("TGT_115").unwrap();
        assert_eq!(result.fields, vec!["TGT_115"]);

        // Valid multiple fields
        let result = FieldList::from_str("TGT_115,TGT_315").unwrap();
        assert_eq!(result.fields, vec!["TGT_115", "TGT_315"]);

        // Valid with spaces
        let result = FieldList::from_str(" TGT_115 , TGT_315 ").unwrap();
        assert_eq!(result.fields, vec!["TGT_115", "TGT_315"]);

        // Empty string
        let result = FieldList::from_str("");
        assert!(result.is_err());

        // Only commas
        let result = FieldList::from_str(",,,");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_fields_defaults() {
        let args = Args::default();
        assert_eq!(args.get_fields(), vec!["TGT_115", "TGT_315", "TGT_555"]);

        let args = Args {
            fields: Some(FieldList {
                fields: vec!["TGT_115".to_string()],
            }),
            ..Args::default()
        };
        assert_eq!(args.get_fields(), vec!["TGT_115"]);
    }

    #[test]
    fn test_get_tolerances() {
        let args = Args {
            max_abs_error: 0.5,
            max_mean_rel_error_pct: 7.5,
            min_correlation: 0.8,
            ..Args::default()
        };

        let tolerances = args.get_tolerances();
        assert_eq!(tolerances.max_abs_error, 0.5);
        assert_eq!(tolerances.max_mean_rel_error_pct, 7.5);
        assert_eq!(tolerances.min_correlation, 0.8);
    }

    #[test]
    fn test_log_level() {
        let mut args = Args::default();

        // Default level
        assert_eq!(args.get_log_level(), "warn");

        // Verbose levels
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        // Quiet mode
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = Args::default();
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_validate_output_file_directory() {
        let temp_dir = TempDir::new().unwrap();

        let args = Args {
            output_file: Some(temp_dir.path().join("report.txt")),
            ..Args::default()
        };
        assert!(args.validate().is_ok());

        let args = Args {
            output_file: Some(temp_dir.path().join("missing").join("report.txt")),
            ..Args::default()
        };
        assert!(args.validate().is_err());

        // Bare filename resolves against the working directory
        let args = Args {
            output_file: Some(PathBuf::from("report.txt")),
            ..Args::default()
        };
        assert!(args.validate().is_ok());
    }
}
