//! Command implementations for the ISMN processor CLI
//!
//! Each command lives in its own module; shared logging and progress
//! helpers are in [`shared`].

pub mod process;
pub mod resample;
pub mod shared;

use crate::{Error, Result};
use crate::cli::args::{Args, Commands};

/// Dispatch to the requested subcommand
pub fn run(args: Args) -> Result<()> {
    let Some(command) = args.command else {
        return Err(Error::configuration("no subcommand provided"));
    };

    match command {
        Commands::Process(process_args) => process::run_process(process_args),
        Commands::Resample(resample_args) => resample::run_resample(resample_args),
    }
}
