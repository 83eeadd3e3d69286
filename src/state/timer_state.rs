//! Countdown timer state machine
//!
//! The engine holds no clock. Whoever owns it calls `tick()` once per elapsed
//! second while it is running; see `tasks::countdown` for the driver.
//!
//! ```text
//! Idle(full) --start--> Running --pause--> Idle(remaining)
//! Running --tick at 1--> Completed --auto--> Idle(full)
//! ```

use serde::{Deserialize, Serialize};

/// Default focus session length: 25 minutes.
pub const DEFAULT_FOCUS_SECONDS: u64 = 25 * 60;

/// Result of delivering one tick to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running (or had nothing left); state is unchanged
    Ignored,
    /// One second was consumed and the session continues
    Advanced { remaining_seconds: u64 },
    /// This tick reached zero; the timer stopped and reset to full duration
    Completed,
}

/// Countdown state for a single focus session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    remaining_seconds: u64,
    is_running: bool,
    total_duration_seconds: u64,
}

impl TimerState {
    /// Create an idle timer holding the full duration
    pub fn new(total_duration_seconds: u64) -> Self {
        debug_assert!(total_duration_seconds > 0, "focus duration must be positive");
        Self {
            remaining_seconds: total_duration_seconds,
            is_running: false,
            total_duration_seconds,
        }
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn total_duration_seconds(&self) -> u64 {
        self.total_duration_seconds
    }

    /// Start counting down. Returns true if the timer was not already running.
    ///
    /// Starting with nothing left is a no-op; only natural completion resets
    /// the duration.
    pub fn start(&mut self) -> bool {
        if self.is_running || self.remaining_seconds == 0 {
            return false;
        }
        self.is_running = true;
        true
    }

    /// Stop counting down. Returns true if the timer was running.
    pub fn pause(&mut self) -> bool {
        let was_running = self.is_running;
        self.is_running = false;
        was_running
    }

    /// Flip between running and paused. Returns the new running flag.
    pub fn toggle(&mut self) -> bool {
        if self.is_running {
            self.pause();
        } else {
            self.start();
        }
        self.is_running
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        self.check_invariants();

        if !self.is_running || self.remaining_seconds == 0 {
            return TickOutcome::Ignored;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds > 0 {
            return TickOutcome::Advanced {
                remaining_seconds: self.remaining_seconds,
            };
        }

        self.is_running = false;
        self.remaining_seconds = self.total_duration_seconds;
        TickOutcome::Completed
    }

    /// Read-only view for the display layer
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            remaining_seconds: self.remaining_seconds,
            total_duration_seconds: self.total_duration_seconds,
            is_running: self.is_running,
            display: format_display(self.remaining_seconds),
            button_label: if self.is_running { "Pause" } else { "Start" }.to_string(),
        }
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.remaining_seconds <= self.total_duration_seconds,
            "remaining {}s exceeds session length {}s",
            self.remaining_seconds,
            self.total_duration_seconds
        );
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_SECONDS)
    }
}

/// Timer state as exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub remaining_seconds: u64,
    pub total_duration_seconds: u64,
    pub is_running: bool,
    /// `MM:SS` rendering of `remaining_seconds`
    pub display: String,
    /// Label for the single start/pause button
    pub button_label: String,
}

/// Render seconds as zero-padded `MM:SS`
pub fn format_display(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(total: u64) -> TimerState {
        let mut timer = TimerState::new(total);
        assert!(timer.start());
        timer
    }

    #[test]
    fn starts_idle_with_full_duration() {
        let timer = TimerState::default();
        assert_eq!(timer.remaining_seconds(), 1500);
        assert_eq!(timer.total_duration_seconds(), 1500);
        assert!(!timer.is_running());
    }

    #[test]
    fn each_tick_consumes_one_second() {
        let mut timer = running(10);
        for expected in (1..10).rev() {
            assert_eq!(
                timer.tick(),
                TickOutcome::Advanced { remaining_seconds: expected }
            );
            assert_eq!(timer.remaining_seconds(), expected);
        }
    }

    #[test]
    fn five_second_session_completes_once_and_resets() {
        let mut timer = running(5);
        let outcomes: Vec<_> = (0..5).map(|_| timer.tick()).collect();

        assert_eq!(
            outcomes,
            vec![
                TickOutcome::Advanced { remaining_seconds: 4 },
                TickOutcome::Advanced { remaining_seconds: 3 },
                TickOutcome::Advanced { remaining_seconds: 2 },
                TickOutcome::Advanced { remaining_seconds: 1 },
                TickOutcome::Completed,
            ]
        );
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 5);
    }

    #[test]
    fn ticks_after_completion_never_complete_again() {
        let mut timer = running(2);
        timer.tick();
        assert_eq!(timer.tick(), TickOutcome::Completed);

        for _ in 0..10 {
            assert_eq!(timer.tick(), TickOutcome::Ignored);
        }
        assert_eq!(timer.remaining_seconds(), 2);
    }

    #[test]
    fn completion_does_not_restart() {
        let mut timer = running(1);
        assert_eq!(timer.tick(), TickOutcome::Completed);
        assert!(!timer.is_running());

        assert!(timer.start());
        assert_eq!(timer.tick(), TickOutcome::Completed);
    }

    #[test]
    fn paused_timer_ignores_stray_ticks() {
        let mut timer = running(5);
        timer.tick();
        timer.tick();
        assert!(timer.pause());

        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.remaining_seconds(), 3);
        assert!(!timer.is_running());
    }

    #[test]
    fn pause_keeps_remaining_time() {
        let mut timer = running(100);
        for _ in 0..40 {
            timer.tick();
        }
        timer.pause();
        assert!(!timer.pause());
        assert_eq!(timer.remaining_seconds(), 60);

        assert!(timer.start());
        assert_eq!(timer.remaining_seconds(), 60);
    }

    #[test]
    fn start_is_idempotent() {
        let mut timer = TimerState::new(30);
        assert!(timer.start());
        assert!(!timer.start());
        assert!(timer.is_running());
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut timer = running(30);
        timer.tick();
        timer.pause();
        let before = timer.clone();

        assert!(timer.toggle());
        assert!(!timer.toggle());
        assert_eq!(timer, before);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_display(0), "00:00");
        assert_eq!(format_display(65), "01:05");
        assert_eq!(format_display(1500), "25:00");
        assert_eq!(format_display(59), "00:59");
        assert_eq!(format_display(6000), "100:00");
    }

    #[test]
    fn snapshot_labels_button_by_state() {
        let mut timer = TimerState::new(90);
        assert_eq!(timer.snapshot().button_label, "Start");
        assert_eq!(timer.snapshot().display, "01:30");

        timer.toggle();
        let snapshot = timer.snapshot();
        assert!(snapshot.is_running);
        assert_eq!(snapshot.button_label, "Pause");
    }
}
