pub mod config;
pub mod controller;
pub mod message;
pub mod state;
pub mod timer; // Caller-driven interval timers

pub use config::{ConfigError, SessionConfig, TimerMode};
pub use controller::Session;
pub use message::{Command, Input};
pub use state::{SessionState, DEFAULT_COUNTDOWN_SECS};
pub use timer::{TimerId, Timers};
