//! Interval timers on a caller-driven clock
//!
//! Nothing here sleeps or spawns. The owner advances time explicitly and
//! pops due ticks one at a time, running each handler to completion before
//! asking for the next, so cancelling a timer inside a handler suppresses
//! any of its ticks still pending at that instant.

use std::time::Duration;

/// Handle to a scheduled interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Interval {
    id: TimerId,
    period: Duration,
    next_due: Duration,
}

/// Set of periodic timers
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    intervals: Vec<Interval>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick every `period`, first firing at `now + period`
    ///
    /// A zero period is clamped to one millisecond so the timer can't fire
    /// forever at a single instant.
    pub fn every(&mut self, now: Duration, period: Duration) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.intervals.push(Interval {
            id,
            period,
            next_due: now + period,
        });
        id
    }

    /// Remove a timer; returns false if it was already gone
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.intervals.len();
        self.intervals.retain(|interval| interval.id != id);
        self.intervals.len() != before
    }

    /// Pop the earliest tick due at or before `now`
    ///
    /// Ties go to the timer created first. The popped timer is rescheduled
    /// one period later. Returns the timer and the instant it was due.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TimerId, Duration)> {
        let interval = self
            .intervals
            .iter_mut()
            .filter(|interval| interval.next_due <= now)
            .min_by_key(|interval| (interval.next_due, interval.id))?;

        let due = interval.next_due;
        interval.next_due += interval.period;
        Some((interval.id, due))
    }

    /// When a timer fires next, if it is still scheduled
    pub fn next_due(&self, id: TimerId) -> Option<Duration> {
        self.intervals
            .iter()
            .find(|interval| interval.id == id)
            .map(|interval| interval.next_due)
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.intervals.iter().any(|interval| interval.id == id)
    }

    /// Number of live timers
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
