//! Timer state as seen by the panel, and the commands it forwards.

use serde::{Deserialize, Serialize};

/// Read-only view of an externally driven timer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    /// Seconds currently shown (remaining time for a countdown)
    pub current_time: f64,
    /// Full duration of the timer in seconds
    pub total_time: f64,
    pub is_running: bool,
}

impl TimerSnapshot {
    /// Fraction of the total duration that has elapsed, in `[0, 1]`.
    ///
    /// Timers without a positive total report no progress.
    pub fn progress(&self) -> f32 {
        if self.total_time > 0.0 {
            let fraction = (self.total_time - self.current_time) / self.total_time;
            fraction.clamp(0.0, 1.0) as f32
        } else {
            0.0
        }
    }
}

/// A study session the timer belongs to; display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub allocated_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_number: Option<u32>,
}

/// The task currently being timed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
}

/// User intents the panel forwards to the timer owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Pause,
    Stop,
    Reset,
}

/// The external collaborator that owns the timer.
pub trait TimerController {
    fn snapshot(&self) -> TimerSnapshot;
    fn start(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    fn reset(&mut self);

    /// Dispatches a command to the matching callback.
    fn apply(&mut self, command: TimerCommand) {
        log::debug!("forwarding timer command {command:?}");
        match command {
            TimerCommand::Start => self.start(),
            TimerCommand::Pause => self.pause(),
            TimerCommand::Stop => self.stop(),
            TimerCommand::Reset => self.reset(),
        }
    }
}
