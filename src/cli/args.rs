// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the flag-only CLI surface for statsboard

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statsboard")]
#[command(about = "Downloads GitHub and WakaTime stats cards and generates a static dashboard")]
#[command(version)]
pub struct Args {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Directory to write cards and dashboard into")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
