//! CLI entry point for marks.

mod cli;

use anyhow::Result;
use clap::Parser;
use std::io;

use marks::config::Config;
use marks::console::Console;
use marks::output::{Output, OutputMode};
use marks::session;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mode = config.resolve_mode(cli.format)?;
    let out = Output::new(mode).apply_config(&config.output, cli.no_color);

    let stdin = io::stdin();
    let input = stdin.lock();

    // Keep stdout machine-readable in JSON mode
    match mode {
        OutputMode::Text => session::run(&mut Console::new(input, io::stdout()), &out)?,
        OutputMode::Json => session::run(&mut Console::new(input, io::stderr()), &out)?,
    };

    Ok(())
}
