//! Process command implementation
//!
//! The main workflow: open the archive, run the extraction pipeline over
//! every eligible member, apply the quality pass, export the cleaned
//! inventory, and write the failure report.

use std::time::Instant;

use indicatif::HumanDuration;
use tracing::{debug, info};

use super::shared::{create_progress_bar, print_run_summary, setup_logging};
use crate::app::services::exporter::{ExportFormat, export_records};
use crate::app::services::failure_report::write_failure_report;
use crate::app::services::processor::ArchiveProcessor;
use crate::app::services::quality_filter::apply_quality_filters;
use crate::cli::args::ProcessArgs;
use crate::config::ProcessingConfig;
use crate::{Error, Result};

/// Run the archive processing workflow
pub fn run_process(args: ProcessArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(&args.log_level, args.quiet)?;
    info!("Starting ISMN processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    // The format name is a configuration error when unknown: fail before
    // touching the archive.
    let format: ExportFormat = args.format.parse()?;

    let config = build_config(&args)?;
    prepare_output_dir(&args, &config)?;

    // Sequential pipeline over the archive members
    let mut processor = ArchiveProcessor::new();
    let progress = if args.quiet {
        None
    } else {
        Some(create_progress_bar("processing sensor files"))
    };
    processor.process_archive(&args.archive, progress.as_ref())?;
    if let Some(bar) = &progress {
        bar.finish_with_message("archive processed");
    }

    let (records, failures) = processor.into_results();

    // Post-hoc quality pass over the complete record set
    let outcome = apply_quality_filters(records, &config.quality);
    info!("{}", outcome.stats.summary());

    if config.write_failure_report {
        write_failure_report(&failures, &config.failure_report_path())?;
    }

    let output_path = export_records(&outcome.records, &args.output_stem, format)?;

    if !args.quiet {
        print_run_summary(&outcome, failures.len());
        println!(
            "\nExported {} sensors to {} in {}",
            outcome.records.len(),
            output_path.display(),
            HumanDuration(start_time.elapsed())
        );
    }

    Ok(())
}

/// Assemble the run configuration from defaults and CLI overrides
fn build_config(args: &ProcessArgs) -> Result<ProcessingConfig> {
    let output_dir = args
        .output_stem
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config = ProcessingConfig {
        output_dir,
        write_failure_report: !args.no_failure_report,
        ..ProcessingConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Ensure the export directory exists
fn prepare_output_dir(args: &ProcessArgs, config: &ProcessingConfig) -> Result<()> {
    std::fs::create_dir_all(&config.output_dir).map_err(|e| {
        Error::io(
            format!(
                "creating output directory {} for stem {}",
                config.output_dir.display(),
                args.output_stem.display()
            ),
            e,
        )
    })
}
