use std::fs;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use stickerfit::{BatchReport, ProcessingParams, process_input_to_dir};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn params_from_args(args: &CliArgs) -> ProcessingParams {
    ProcessingParams {
        make_transparent: args.make_transparent,
        background: args.bg_color.into(),
        tolerance: args.tolerance,
        soft_margin: args.soft_margin,
        ..Default::default()
    }
}

fn write_report(report: &BatchReport, path: &Path) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| AppError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Report written to {:?}", path);
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = params_from_args(&args);

    info!("Starting conversion from: {:?}", args.input);
    info!("Output directory: {:?}", args.output);
    if params.make_transparent {
        info!(
            "Background removal: {} (tolerance={}, soft_margin={})",
            params.background, params.tolerance, params.soft_margin
        );
    }

    let report = process_input_to_dir(&args.input, &args.output, &params).map_err(AppError::from)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    info!(
        "Done. {} image(s) converted to {:?}",
        report.processed,
        fs::canonicalize(&args.output).unwrap_or_else(|_| args.output.clone())
    );

    if let Some(path) = &args.report {
        write_report(&report, path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use stickerfit::{BackgroundSource, Color};

    #[test]
    fn explicit_color_becomes_explicit_source() {
        let args = CliArgs::parse_from(["stickerfit", "in", "--bg-color", "#fff"]);
        assert_eq!(
            params_from_args(&args).background,
            BackgroundSource::Explicit(Color::WHITE)
        );
    }

    #[test]
    fn missing_color_means_auto_detection() {
        let args = CliArgs::parse_from(["stickerfit", "in", "--make-transparent"]);
        let params = params_from_args(&args);
        assert!(params.make_transparent);
        assert_eq!(params.background, BackgroundSource::Auto);
    }
}
