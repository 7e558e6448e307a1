use std::path::PathBuf;

use clap::Parser;

/// Detect game controllers and joysticks and report what was found.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to the settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only print errors and the final count
    #[arg(short, long)]
    pub summary: bool,
}
