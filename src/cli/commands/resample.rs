//! Resample command implementation
//!
//! Turns a pre-structured sensor/time data cube into a daily statistic
//! table: one row per sensor, one column per ISO date.

use tracing::{debug, info};

use super::shared::setup_logging;
use crate::app::services::time_series::{
    Statistic, daily_time_series, read_cube, write_daily_csv,
};
use crate::cli::args::ResampleArgs;
use crate::{Error, Result};

/// Run the daily resampling workflow
pub fn run_resample(args: ResampleArgs) -> Result<()> {
    setup_logging(&args.log_level, false)?;
    info!("Starting daily resampling");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    // Unknown statistic names are configuration errors: fail before I/O
    let statistic: Statistic = args.statistic.parse()?;

    let cube = read_cube(&args.input)?;
    let daily = daily_time_series(cube, statistic)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::io(format!("creating {}", parent.display()), e))?;
    }
    write_daily_csv(daily, &args.output)?;

    info!(
        "daily {} table written to {}",
        statistic,
        args.output.display()
    );
    Ok(())
}
