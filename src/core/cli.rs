//! Command line arguments for the generator

use clap::Parser;
use std::path::PathBuf;

/// glyphgen command line interface
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Directory containing the icons.json metadata file
    #[arg(long = "icons-dir", default_value = ".")]
    pub icons_dir: PathBuf,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
