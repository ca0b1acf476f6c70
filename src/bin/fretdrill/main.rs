//! fretdrill - fretboard shape drills in the terminal
//!
//! Run with: cargo run -- --help

mod app;
mod cli;
mod ui;

use clap::Parser;

use app::Fretdrill;
use cli::Args;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    if let Some(path) = &args.log_file {
        cli::init_logging(path)?;
    }

    Fretdrill::from_args(&args)?.run()
}
