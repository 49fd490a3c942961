//! Wall-Clock Timing
//!
//! Three-state stopwatch backing `SortingMetrics`. Elapsed time is derived
//! from the state on every read, never stored.

use std::time::{Duration, Instant};

/// Timing state of a metrics counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimingState {
    /// Never started since creation or the last reset
    #[default]
    Idle,
    /// Started, not yet stopped
    Running {
        /// Start timestamp
        start: Instant,
    },
    /// Started and stopped
    Stopped {
        /// Start timestamp
        start: Instant,
        /// Stop timestamp
        stop: Instant,
    },
}

impl TimingState {
    /// Start (or restart) the clock. Restarting while running overwrites the start timestamp.
    #[inline(always)]
    pub fn start(&mut self) {
        *self = TimingState::Running {
            start: Instant::now(),
        };
    }

    /// Stop the clock.
    ///
    /// Stopping an idle clock leaves it idle; stopping a stopped clock moves
    /// the stop timestamp forward.
    #[inline(always)]
    pub fn stop(&mut self) {
        let now = Instant::now();
        *self = match *self {
            TimingState::Idle => TimingState::Idle,
            TimingState::Running { start } | TimingState::Stopped { start, .. } => {
                TimingState::Stopped { start, stop: now }
            }
        };
    }

    /// Elapsed time: `now - start` while running, `stop - start` once stopped, zero while idle
    pub fn elapsed(&self) -> Duration {
        match *self {
            TimingState::Idle => Duration::ZERO,
            TimingState::Running { start } => start.elapsed(),
            TimingState::Stopped { start, stop } => stop.saturating_duration_since(start),
        }
    }

    /// Whether the clock is currently running
    pub fn is_running(&self) -> bool {
        matches!(self, TimingState::Running { .. })
    }
}
