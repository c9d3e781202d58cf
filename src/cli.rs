//! Command-line interface implementation for the renamer.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for the renamer.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Renames the ros_gz_example_* template packages after your project",
    long_about = None
)]
pub struct Args {
    /// Directory holding the ros_gz_example_* package folders
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Project information file.
    /// Defaults to project_information.yaml next to the executable.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
