//! Validate command implementation for the indicator validator CLI
//!
//! Drives the validation pipeline and turns its outcome into a report and an
//! exit status. Tolerance failures are reported first and only then converted
//! into an error, so the report is always emitted before the process fails.

use colored::Colorize;
use tracing::{debug, info};

use super::shared::{build_configuration, create_spinner, setup_logging};
use crate::app::services::comparison::Verdict;
use crate::app::services::pipeline::{ValidationOutcome, ValidationPipeline};
use crate::app::services::report::ReportEmitter;
use crate::cli::args::{Args, OutputFormat};
use crate::{Error, Result};

/// Validate command runner
pub fn run_validate(args: Args) -> Result<ValidationOutcome> {
    setup_logging(&args)?;

    info!("Starting indicator validation");
    debug!("Validation arguments: {:?}", args);

    args.validate()?;
    let config = build_configuration(&args)?;

    let progress = if args.show_progress() {
        Some(create_spinner("Running validation..."))
    } else {
        None
    };

    let outcome = match ValidationPipeline::new(config).run(progress.as_ref()) {
        Ok(outcome) => outcome,
        Err(error) => {
            if let Some(pb) = &progress {
                pb.finish_and_clear();
            }
            return Err(error);
        }
    };

    if let Some(pb) = &progress {
        pb.finish_with_message("Validation completed");
    }

    emit_report(&args, &outcome)?;

    if matches!(args.output_format, OutputFormat::Human) && !args.quiet {
        print_status_summary(&outcome);
    }

    if !outcome.all_passed() {
        return Err(Error::validation_failed(
            outcome.failed_count(),
            outcome.stats.fields_compared,
        ));
    }

    Ok(outcome)
}

/// Emit the rendered report to stdout or the requested file
fn emit_report(args: &Args, outcome: &ValidationOutcome) -> Result<()> {
    let emitter = ReportEmitter::new();
    let rendered = match args.output_format {
        OutputFormat::Human => emitter.render_text(outcome),
        OutputFormat::Json => emitter.render_json(outcome)?,
    };

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| {
                Error::io(format!("Failed to write report to {}", path.display()), e)
            })?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Print a short colored status block to the console
fn print_status_summary(outcome: &ValidationOutcome) {
    println!("{}", "Validation results".bright_green().bold());
    for field in &outcome.fields {
        let label = match field.verdict {
            Verdict::Pass => "PASS   ".bright_green().bold(),
            Verdict::NoValidData => "NO DATA".bright_yellow().bold(),
            _ => "FAIL   ".bright_red().bold(),
        };
        println!("  {} {}", label, field.result.field.bright_white());
    }
    println!(
        "  {} {:.2}s",
        "Elapsed:".bright_cyan(),
        outcome.stats.elapsed.as_secs_f64()
    );
}
