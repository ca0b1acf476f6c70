//! Command-line options and logging setup

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use fretdrill::{
    session::{ConfigError, DEFAULT_COUNTDOWN_SECS},
    Position, Root, SessionConfig, TimerMode, Tonality,
};

#[derive(Debug, Parser)]
#[command(name = "fretdrill", version, about = "Drill guitar scale shapes on a timer")]
pub struct Args {
    /// Seconds between randomizations
    #[arg(long, default_value_t = DEFAULT_COUNTDOWN_SECS)]
    pub countdown: u32,

    /// Timer scheduling: `dual` (countdown plus separate randomize timer) or `single`
    #[arg(long, default_value_t = TimerMode::Dual)]
    pub timer_mode: TimerMode,

    /// Seed for reproducible drills
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial tonality (major or minor)
    #[arg(long)]
    pub tonality: Option<Tonality>,

    /// Initial position (1-5)
    #[arg(long)]
    pub position: Option<Position>,

    /// Initial root note (A, A#, B, C, ...)
    #[arg(long)]
    pub root: Option<Root>,

    /// Start with pentatonic filtering on
    #[arg(long)]
    pub pentatonic: bool,

    /// Start with the fretboard hidden
    #[arg(long)]
    pub hide_shape: bool,

    /// Start the timed loop immediately
    #[arg(long)]
    pub autostart: bool,

    /// Write logs to this file (RUST_LOG filters, default `info`)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Session tunables from the command line
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        let config = SessionConfig::new(self.countdown, self.timer_mode)?;
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}

/// Send `tracing` output to a file; the terminal belongs to the UI
pub fn init_logging(path: &Path) -> EyreResult<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["fretdrill"]);
        assert_eq!(args.countdown, 60);
        assert_eq!(args.timer_mode, TimerMode::Dual);
        assert!(!args.pentatonic && !args.hide_shape && !args.autostart);
        assert_eq!(args.session_config(), Ok(SessionConfig::default()));
    }

    #[test]
    fn parses_initial_selection() {
        let args = Args::parse_from([
            "fretdrill",
            "--tonality",
            "minor",
            "--position",
            "4",
            "--root",
            "F#",
            "--timer-mode",
            "single",
            "--seed",
            "9",
        ]);
        assert_eq!(args.tonality, Some(Tonality::Minor));
        assert_eq!(args.position.map(Position::number), Some(4));
        assert_eq!(args.root, Some(Root::FSharp));
        let config = args.session_config().unwrap();
        assert_eq!(config.timer_mode(), TimerMode::Single);
        assert_eq!(config.seed(), Some(9));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Args::try_parse_from(["fretdrill", "--position", "6"]).is_err());
        assert!(Args::try_parse_from(["fretdrill", "--root", "H"]).is_err());
        let args = Args::parse_from(["fretdrill", "--countdown", "0"]);
        assert_eq!(args.session_config(), Err(ConfigError::ZeroCountdown));
    }
}
