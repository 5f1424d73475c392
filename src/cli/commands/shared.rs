//! Shared components for CLI commands
//!
//! Logging setup, configuration assembly, and progress reporting used by the
//! command implementations.

use crate::Result;
use crate::cli::args::Args;
use crate::config::ValidationConfig;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Set up structured logging based on the CLI verbosity flags
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("indicator_validator={}", log_level)));

    // Set up subscriber based on output format preference
    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Assemble and validate the run configuration from CLI arguments
pub fn build_configuration(args: &Args) -> Result<ValidationConfig> {
    let config = ValidationConfig::new(
        args.ohlcv_path.clone(),
        args.reference_path.clone(),
        args.computed_path.clone(),
    )
    .with_source(args.source)
    .with_fields(args.get_fields())
    .with_tolerances(args.get_tolerances());

    config.validate()?;

    debug!(
        "Run configuration: source={}, fields={:?}",
        config.source, config.fields
    );

    Ok(config)
}

/// Create a progress spinner with appropriate styling
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    fn args_with_files(dir: &TempDir) -> Args {
        let ohlcv = dir.path().join("bars.txt");
        let reference = dir.path().join("reference.csv");
        let computed = dir.path().join("export.txt");
        std::fs::write(&ohlcv, "20240101 930 1 1 1 1 100\n").unwrap();
        std::fs::write(&reference, "Date Time TGT_115\n").unwrap();
        std::fs::write(&computed, "0 1.0\n").unwrap();

        Args {
            ohlcv_path: ohlcv,
            reference_path: reference,
            computed_path: computed,
            ..Args::default()
        }
    }

    #[test]
    fn test_build_configuration_from_args() {
        let dir = TempDir::new().unwrap();
        let args = args_with_files(&dir);

        let config = build_configuration(&args).unwrap();
        assert_eq!(config.fields, vec!["TGT_115", "TGT_315", "TGT_555"]);
        assert_eq!(config.tolerances.max_abs_error, 0.01);
    }

    #[test]
    fn test_build_configuration_rejects_missing_input() {
        let dir = TempDir::new().unwrap();
        let mut args = args_with_files(&dir);
        args.reference_path = dir.path().join("absent.csv");

        let error = build_configuration(&args).unwrap_err();
        assert!(matches!(error, Error::Configuration { .. }));
    }

    #[test]
    fn test_build_configuration_applies_overrides() {
        let dir = TempDir::new().unwrap();
        let mut args = args_with_files(&dir);
        args.max_abs_error = 0.25;
        args.fields = Some(crate::cli::args::FieldList {
            fields: vec!["TGT_115".to_string()],
        });

        let config = build_configuration(&args).unwrap();
        assert_eq!(config.tolerances.max_abs_error, 0.25);
        assert_eq!(config.fields, vec!["TGT_115"]);
    }
}
