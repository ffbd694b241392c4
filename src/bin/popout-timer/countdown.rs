//! Wall-clock countdown that drives the popout panel in this app.

use popout_timer::{TimerController, TimerSnapshot};
use std::time::Instant;

/// Counts down from a fixed duration while running.
///
/// Remaining time is derived from the instant the countdown was last
/// started, so it stays accurate regardless of how often frames are drawn.
#[derive(Debug)]
pub struct CountdownTimer {
    total: f64,
    /// Remaining seconds as of `started_at` (or now, when paused)
    remaining: f64,
    started_at: Option<Instant>,
}

impl CountdownTimer {
    pub fn new(total_secs: f64) -> Self {
        let total = total_secs.max(0.0);
        Self {
            total,
            remaining: total,
            started_at: None,
        }
    }

    fn remaining_at(&self, now: Instant) -> f64 {
        match self.started_at {
            Some(started) => {
                let elapsed = now.saturating_duration_since(started).as_secs_f64();
                (self.remaining - elapsed).max(0.0)
            }
            None => self.remaining,
        }
    }

    pub fn snapshot_at(&self, now: Instant) -> TimerSnapshot {
        TimerSnapshot {
            current_time: self.remaining_at(now),
            total_time: self.total,
            is_running: self.started_at.is_some(),
        }
    }

    pub fn start_at(&mut self, now: Instant) {
        if self.started_at.is_none() && self.remaining > 0.0 {
            self.started_at = Some(now);
        }
    }

    pub fn pause_at(&mut self, now: Instant) {
        if self.started_at.is_some() {
            self.remaining = self.remaining_at(now);
            self.started_at = None;
        }
    }

    pub fn rewind(&mut self) {
        self.started_at = None;
        self.remaining = self.total;
    }

    /// Restores the full duration, keeping a running countdown running.
    pub fn reset_at(&mut self, now: Instant) {
        self.remaining = self.total;
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
    }

    /// Pauses the countdown once it reaches zero. Returns `true` on the call
    /// that observed it finishing.
    pub fn finish_if_elapsed(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() && self.remaining_at(now) <= 0.0 {
            self.remaining = 0.0;
            self.started_at = None;
            log::info!("Countdown of {:.0}s finished", self.total);
            return true;
        }
        false
    }
}

impl TimerController for CountdownTimer {
    fn snapshot(&self) -> TimerSnapshot {
        self.snapshot_at(Instant::now())
    }

    fn start(&mut self) {
        self.start_at(Instant::now());
    }

    fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    fn stop(&mut self) {
        self.rewind();
    }

    fn reset(&mut self) {
        self.reset_at(Instant::now());
    }
}
