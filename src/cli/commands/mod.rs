//! Command implementations for the indicator validator CLI
//!
//! This module contains the command execution logic, progress reporting, and
//! error handling for the CLI interface. The tool has a single workflow, so
//! there is one command module plus shared utilities.

pub mod shared;
pub mod validate;

use crate::Result;
use crate::app::services::pipeline::ValidationOutcome;
use crate::cli::args::Args;

/// Main command runner for the indicator validator
///
/// Runs the validation workflow end to end: logging setup, configuration,
/// pipeline execution, and report emission. A tolerance failure surfaces as
/// an error after the report has been printed, so the process exits non-zero
/// for scripting.
pub fn run(args: Args) -> Result<ValidationOutcome> {
    validate::run_validate(args)
}
