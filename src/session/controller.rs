//! Session controller - selection state plus the randomize-on-timer loop
//!
//! The controller is the only owner of [`SessionState`]. The view forwards
//! input and commands and reads the state back after each call; every call
//! runs to completion before returning.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::{SessionConfig, TimerMode};
use super::message::{Command, Input};
use super::state::SessionState;
use super::timer::{TimerId, Timers};
use crate::theory::{Position, Root, Tonality};

const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Practice session: selection state, randomizer and its timers
pub struct Session<R = StdRng> {
    state: SessionState,
    config: SessionConfig,
    rng: R,
    timers: Timers,
    /// One-second countdown tick
    countdown: Option<TimerId>,
    /// Countdown-length randomize tick (dual mode only)
    randomizer: Option<TimerId>,
    /// Session time of the last `advance_to`
    clock: Duration,
    /// Combinations drawn so far
    draws: u64,
}

impl Session<StdRng> {
    /// Create a session, seeding from the config or the OS
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<R: Rng> Session<R> {
    /// Create a session drawing from `rng`
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        Self {
            state: SessionState::with_countdown(config.countdown_secs()),
            config,
            rng,
            timers: Timers::new(),
            countdown: None,
            randomizer: None,
            clock: Duration::ZERO,
            draws: 0,
        }
    }

    /// Current settled state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Session time the controller has been advanced to
    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Number of combinations drawn so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Number of live timers (0 when idle)
    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    /// Apply a selection change from the view
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::SetTonality(tonality) => self.state.tonality = tonality,
            Input::SetPosition(position) => self.state.position = position,
            Input::SetRoot(root) => self.state.root = root,
            Input::SetPentatonic(on) => self.state.pentatonic = on,
            Input::SetShowShape(on) => self.state.show_shape = on,
        }
    }

    /// Run a randomizer command
    pub fn command(&mut self, command: Command) {
        match command {
            Command::Randomize => {
                self.stop();
                self.randomize_once();
            }
            Command::Start => self.start(),
            Command::Stop => self.stop(),
        }
    }

    /// Draw a new position, tonality and root
    ///
    /// The position is drawn uniformly from the four positions other than
    /// the current one, which matches redrawing until it differs but always
    /// takes a single draw.
    pub fn randomize_once(&mut self) {
        let current = self.state.position.index();
        let offset = self.rng.random_range(1..Position::COUNT);
        let position = Position::ALL[(current + offset) % Position::COUNT];
        let tonality = Tonality::ALL[self.rng.random_range(0..Tonality::ALL.len())];
        let root = Root::ALL[self.rng.random_range(0..Root::ALL.len())];

        self.state.position = position;
        self.state.tonality = tonality;
        self.state.root = root;
        self.draws += 1;

        debug!(%position, %tonality, %root, "randomized");
    }

    /// Start (or restart) the timed loop
    ///
    /// Any existing timers are torn down first, so repeated starts never
    /// stack timers.
    pub fn start(&mut self) {
        if self.countdown.is_some() || self.randomizer.is_some() {
            self.cancel_timers();
        }

        self.state.seconds_remaining = self.config.countdown_secs();
        self.state.is_running = true;
        self.randomize_once();

        self.countdown = Some(self.timers.every(self.clock, COUNTDOWN_TICK));
        if self.config.timer_mode() == TimerMode::Dual {
            let period = Duration::from_secs(self.config.countdown_secs().into());
            self.randomizer = Some(self.timers.every(self.clock, period));
        }

        debug!(clock = ?self.clock, mode = %self.config.timer_mode(), "started");
    }

    /// Stop the timed loop and reset the countdown; a no-op when idle
    /// apart from the countdown reset
    pub fn stop(&mut self) {
        let was_running = self.state.is_running;
        self.cancel_timers();
        self.state.seconds_remaining = self.config.countdown_secs();
        self.state.is_running = false;

        if was_running {
            debug!(clock = ?self.clock, "stopped");
        }
    }

    /// Advance session time to `now`, firing every tick due on the way
    ///
    /// Ticks fire in time order, each handler completing before the next
    /// tick is looked up. Time never runs backwards: an earlier `now` is
    /// ignored.
    pub fn advance_to(&mut self, now: Duration) {
        if now < self.clock {
            return;
        }

        while let Some((id, due)) = self.timers.pop_due(now) {
            self.clock = due;
            if Some(id) == self.countdown {
                self.on_countdown_tick();
            } else if Some(id) == self.randomizer {
                self.randomize_once();
            }
        }

        self.clock = now;
    }

    fn on_countdown_tick(&mut self) {
        self.state.seconds_remaining = self.state.seconds_remaining.saturating_sub(1);
        trace!(seconds_remaining = self.state.seconds_remaining, "countdown");

        if self.state.seconds_remaining > 0 {
            return;
        }

        match self.config.timer_mode() {
            TimerMode::Dual => {
                self.stop();
                self.start();
            }
            TimerMode::Single => {
                self.state.seconds_remaining = self.config.countdown_secs();
                self.randomize_once();
            }
        }
    }

    fn cancel_timers(&mut self) {
        if let Some(id) = self.countdown.take() {
            self.timers.cancel(id);
        }
        if let Some(id) = self.randomizer.take() {
            self.timers.cancel(id);
        }
    }
}
