//! CLI argument definitions for marks.

use clap::Parser;
use std::path::PathBuf;

use marks::output::OutputMode;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MARKS_GIT_SHA"),
    " ",
    env!("MARKS_BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "marks")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Record a student's marks and report pass or fail", long_about = None)]
#[command(
    after_help = "Prompts for a name and a whole number of marks on standard input.\nMarks above 50 pass; 50 and below fail."
)]
pub struct Cli {
    /// Report format (text or json). Overrides MARKS_FORMAT and the config file
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputMode>,

    /// Never color the verdict
    #[arg(long)]
    pub no_color: bool,

    /// Read configuration from PATH instead of ~/.config/marks/config.md
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
