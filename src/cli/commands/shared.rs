//! Shared helpers for CLI commands
//!
//! Logging setup, progress bars, and the run summary block used by the
//! command implementations.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::Result;
use crate::app::services::quality_filter::{FilterOutcome, geographic_extent, source_counts};

/// Set up structured logging to stderr
///
/// The `RUST_LOG` environment variable wins over the CLI level when set.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ismn_processor={log_level}")));

    if quiet {
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

    debug!("logging initialized at level: {log_level}");
    Ok(())
}

/// Create the archive-member progress bar
pub fn create_progress_bar(message: &str) -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print the run summary block after filtering
pub fn print_run_summary(outcome: &FilterOutcome, failures: usize) {
    println!();
    println!("{}", "Processing complete".bold().green());
    println!("{}", "=".repeat(50));
    println!("{}", outcome.stats.summary());
    println!("Extraction failures: {failures}");

    println!("\n{}", "Coordinate sources:".bold());
    for (source, count) in source_counts(&outcome.records) {
        println!("  {source}: {count}");
    }

    if let Some((lat_min, lat_max, lon_min, lon_max)) = geographic_extent(&outcome.records) {
        println!("\n{}", "Geographic extent:".bold());
        println!("  Latitude:  {lat_min:.4} to {lat_max:.4}");
        println!("  Longitude: {lon_min:.4} to {lon_max:.4}");
    }

    if !outcome.diagnostics.is_clean() {
        println!("\n{}", "Diagnostics:".bold().yellow());
        for ((lat, lon), count) in &outcome.diagnostics.suspicious_repeats {
            println!("  suspicious repeat: {count} sensors at ({lat:.3}, {lon:.3})");
        }
        for (lon, count) in &outcome.diagnostics.vertical_lines {
            println!("  potential vertical line: {count} sensors at longitude {lon:.3}");
        }
    }
}
