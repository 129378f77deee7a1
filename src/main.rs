use clap::Parser;
use ismn_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - summaries have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ISMN Processor - Soil Moisture Sensor Archive Converter");
    println!("=======================================================");
    println!();
    println!("Convert ISMN soil-moisture sensor archives into cleaned station");
    println!("inventories with point geometry and daily time-series tables.");
    println!();
    println!("USAGE:");
    println!("    ismn-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Process a sensor archive into a cleaned inventory export");
    println!("    resample    Resample a sensor/time data cube to a daily statistic table");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process an archive into a GeoJSON inventory:");
    println!("    ismn-processor process --archive ismn_data.zip");
    println!();
    println!("    # Export a shapefile to a custom stem:");
    println!("    ismn-processor process --archive ismn_data.zip --output maps/sensors --format shp");
    println!();
    println!("    # Build a daily median table from a data cube:");
    println!("    ismn-processor resample --input cube.parquet --statistic median");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ismn-processor <COMMAND> --help");
}
