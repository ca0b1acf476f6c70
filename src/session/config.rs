use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::DEFAULT_COUNTDOWN_SECS;

/// How the timed loop schedules its randomizations
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    /// A one-second countdown plus an independent countdown-length randomize
    /// interval. When the countdown hits zero the loop is stopped and
    /// restarted, tearing both timers down. The two timers are not
    /// synchronized, so their ticks may drift relative to each other.
    #[default]
    Dual,
    /// A single one-second countdown; reaching zero resets it and
    /// randomizes. No drift.
    Single,
}

impl TimerMode {
    pub fn name(self) -> &'static str {
        match self {
            TimerMode::Dual => "dual",
            TimerMode::Single => "single",
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dual" => Ok(TimerMode::Dual),
            "single" => Ok(TimerMode::Single),
            _ => Err(ConfigError::UnknownTimerMode(s.to_string())),
        }
    }
}

/// Errors in session configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("countdown must be at least 1 second")]
    ZeroCountdown,
    #[error("unknown timer mode `{0}` (expected dual or single)")]
    UnknownTimerMode(String),
}

/// Tunables for a practice session
///
/// Only built through [`SessionConfig::new`] or `Default`, so the countdown
/// is always at least one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seconds between randomizations
    countdown_secs: u32,
    timer_mode: TimerMode,
    /// Fixed RNG seed for reproducible drills
    seed: Option<u64>,
}

impl SessionConfig {
    pub fn new(countdown_secs: u32, timer_mode: TimerMode) -> Result<Self, ConfigError> {
        if countdown_secs == 0 {
            return Err(ConfigError::ZeroCountdown);
        }
        Ok(Self {
            countdown_secs,
            timer_mode,
            seed: None,
        })
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seconds between randomizations (never zero)
    pub fn countdown_secs(&self) -> u32 {
        self.countdown_secs
    }

    pub fn timer_mode(&self) -> TimerMode {
        self.timer_mode
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            timer_mode: TimerMode::default(),
            seed: None,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn timer_mode_is_lowercase() {
        assert_eq!(serde_json::to_string(&TimerMode::Single).unwrap(), "\"single\"");
        assert_eq!(
            serde_json::from_str::<TimerMode>("\"dual\"").unwrap(),
            TimerMode::Dual
        );
        assert!(serde_json::from_str::<TimerMode>("\"Dual\"").is_err());
    }
}
