//! Configuration for validation runs.
//!
//! Collects the input locations, indicator field list, tolerance thresholds,
//! and the export endpoint the computed program streams rows to. The CLI
//! builds one of these from its arguments; tests construct them directly.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::app::services::comparison::ToleranceConfig;
use crate::constants::defaults;
use crate::{Error, Result};

/// Which artifact carries the computed indicator values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComputedSource {
    /// Structured per-bar export stream (bar index followed by one value per field)
    ExportStream,
    /// Free-form program log with per-indicator sections
    AnnotatedLog,
}

impl fmt::Display for ComputedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputedSource::ExportStream => write!(f, "export-stream"),
            ComputedSource::AnnotatedLog => write!(f, "annotated-log"),
        }
    }
}

/// Endpoint the computed program publishes export rows to
///
/// The validator reads the captured stream from a file; this endpoint is
/// carried so run configurations can be recorded and replayed alongside the
/// program that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEndpoint {
    /// Host the export listener binds to
    pub host: String,
    /// TCP port of the export listener
    pub port: u16,
}

impl ExportEndpoint {
    /// Render as a `host:port` address string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ExportEndpoint {
    fn default() -> Self {
        Self {
            host: defaults::EXPORT_HOST.to_string(),
            port: defaults::EXPORT_PORT,
        }
    }
}

/// Global configuration for a validation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Path to the primary OHLCV bar file
    pub ohlcv_path: PathBuf,

    /// Path to the reference indicator CSV
    pub reference_path: PathBuf,

    /// Path to the computed output (export stream or program log)
    pub computed_path: PathBuf,

    /// Format of the computed output file
    pub source: ComputedSource,

    /// Indicator fields to validate, in comparison order
    pub fields: Vec<String>,

    /// Acceptance thresholds applied to every field
    pub tolerances: ToleranceConfig,

    /// Export endpoint of the program under validation
    pub export: ExportEndpoint,
}

impl ValidationConfig {
    /// Create a configuration with default fields, tolerances, and endpoint
    pub fn new(
        ohlcv_path: impl Into<PathBuf>,
        reference_path: impl Into<PathBuf>,
        computed_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            ohlcv_path: ohlcv_path.into(),
            reference_path: reference_path.into(),
            computed_path: computed_path.into(),
            source: ComputedSource::ExportStream,
            fields: crate::constants::default_target_fields(),
            tolerances: ToleranceConfig::default(),
            export: ExportEndpoint::default(),
        }
    }

    /// Set the computed source format
    pub fn with_source(mut self, source: ComputedSource) -> Self {
        self.source = source;
        self
    }

    /// Set the indicator fields to validate
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Set the tolerance thresholds
    pub fn with_tolerances(mut self, tolerances: ToleranceConfig) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Set the export endpoint
    pub fn with_export(mut self, export: ExportEndpoint) -> Self {
        self.export = export;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        check_input_file("OHLCV file", &self.ohlcv_path)?;
        check_input_file("Reference file", &self.reference_path)?;
        check_input_file("Computed output file", &self.computed_path)?;

        if self.fields.is_empty() {
            return Err(Error::configuration(
                "At least one indicator field must be specified".to_string(),
            ));
        }

        for (position, field) in self.fields.iter().enumerate() {
            if field.trim().is_empty() {
                return Err(Error::configuration(
                    "Indicator field names cannot be empty".to_string(),
                ));
            }
            if self.fields[..position].contains(field) {
                return Err(Error::configuration(format!(
                    "Duplicate indicator field: '{}'",
                    field
                )));
            }
        }

        self.tolerances.validate()?;

        if self.export.host.trim().is_empty() {
            return Err(Error::configuration(
                "Export host cannot be empty".to_string(),
            ));
        }
        if self.export.port == 0 {
            return Err(Error::configuration(
                "Export port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Check that a configured input path points at an existing file
fn check_input_file(label: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "{} does not exist: {}",
            label,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "{} is not a file: {}",
            label,
            path.display()
        )));
    }
    Ok(())
}
