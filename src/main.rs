//! Renamer entry point.
//! Parses arguments, loads the project information and runs the rename.

use ros_gz_renamer::{
    cli::{get_args, Args},
    config::{default_config_path, get_config},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::process,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// The project information is loaded before anything on disk changes, so
/// a broken file aborts with the template untouched.
fn run(args: Args) -> Result<()> {
    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let info = get_config(&config_path)?;

    let summary = process(&args.directory, &info)?;

    println!("Project template prepared: {}.", summary);
    Ok(())
}
