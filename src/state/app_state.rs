//! Application session state management

use std::{
    sync::{Mutex, MutexGuard},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use super::{
    Habit, HabitList, HabitStats, Notification, RecentNotifications, TickOutcome, TimerSnapshot,
    TimerState, View,
};

/// What the countdown driver should be doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmSignal {
    /// No tick source may run
    Disarmed,
    /// Tick for the given arm generation
    Armed(u64),
    /// The session is over; the driver exits
    Shutdown,
}

/// Timer plus the bookkeeping for its single tick source
#[derive(Debug)]
struct TimerSlot {
    timer: TimerState,
    /// Bumped on every arm so ticks from an older source are rejected
    generation: u64,
    armed: Option<u64>,
}

/// Reward ad overlay state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdState {
    pub visible: bool,
    pub message: Option<String>,
}

/// Main application session; owns every piece of mutable state
#[derive(Debug)]
pub struct AppState {
    timer: Mutex<TimerSlot>,
    habits: Mutex<HabitList>,
    current_view: Mutex<View>,
    ad_state: Mutex<AdState>,
    recent_notifications: Mutex<RecentNotifications>,
    /// How long a reward ad overlay stays up
    pub ad_duration: Duration,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<String>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Fan-out of user notifications
    pub notification_tx: broadcast::Sender<Notification>,
    /// Arm/disarm signal for the countdown driver
    arm_tx: watch::Sender<ArmSignal>,
    /// Channel for timer updates
    timer_update_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    _timer_update_rx: watch::Receiver<TimerSnapshot>,
}

impl AppState {
    /// Create a new session with an idle timer of the given length
    pub fn new(port: u16, host: String, focus_seconds: u64, ad_duration: Duration) -> Self {
        let timer = TimerState::new(focus_seconds);
        let (notification_tx, _) = broadcast::channel(100);
        let (arm_tx, _) = watch::channel(ArmSignal::Disarmed);
        let (timer_update_tx, timer_update_rx) = watch::channel(timer.snapshot());

        Self {
            timer: Mutex::new(TimerSlot {
                timer,
                generation: 0,
                armed: None,
            }),
            habits: Mutex::new(HabitList::default()),
            current_view: Mutex::new(View::default()),
            ad_state: Mutex::new(AdState::default()),
            recent_notifications: Mutex::new(RecentNotifications::default()),
            ad_duration,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            notification_tx,
            arm_tx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    // ── Timer ────────────────────────────────────────────────────────

    /// Get current timer state
    pub fn get_timer_state(&self) -> AppResult<TimerSnapshot> {
        Ok(self.lock_timer()?.timer.snapshot())
    }

    pub fn start_timer(&self) -> AppResult<TimerSnapshot> {
        self.control_timer("timer-start", |timer| {
            timer.start();
        })
    }

    pub fn pause_timer(&self) -> AppResult<TimerSnapshot> {
        self.control_timer("timer-pause", |timer| {
            timer.pause();
        })
    }

    /// Flip the timer between running and paused (the start/pause button)
    pub fn toggle_timer(&self) -> AppResult<TimerSnapshot> {
        self.control_timer("timer-toggle", |timer| {
            timer.toggle();
        })
    }

    /// Subscribe to timer snapshots published after every control and tick
    pub fn subscribe_timer(&self) -> watch::Receiver<TimerSnapshot> {
        self.timer_update_tx.subscribe()
    }

    /// Subscribe to arm/disarm signals for the countdown driver
    pub fn subscribe_arm(&self) -> watch::Receiver<ArmSignal> {
        self.arm_tx.subscribe()
    }

    /// Deliver one tick from the source armed under `generation`.
    ///
    /// A tick from a disarmed or superseded source leaves the timer untouched.
    pub fn apply_tick(&self, generation: u64) -> AppResult<TickOutcome> {
        let mut slot = self.lock_timer()?;
        if slot.armed != Some(generation) {
            debug!("Dropping tick from stale source generation {}", generation);
            return Ok(TickOutcome::Ignored);
        }
        debug_assert!(slot.timer.is_running(), "armed source on a stopped timer");

        let outcome = slot.timer.tick();
        if outcome == TickOutcome::Completed {
            self.disarm(&mut slot);
        }
        let snapshot = slot.timer.snapshot();
        drop(slot);

        self.publish_timer(snapshot);

        if outcome == TickOutcome::Completed {
            info!("Focus session complete, timer reset");
            self.notify(Notification::pomodoro_complete());
        }

        Ok(outcome)
    }

    fn control_timer<F>(&self, action: &str, op: F) -> AppResult<TimerSnapshot>
    where
        F: FnOnce(&mut TimerState),
    {
        let mut slot = self.lock_timer()?;
        let was_running = slot.timer.is_running();
        op(&mut slot.timer);

        match (was_running, slot.timer.is_running()) {
            (false, true) => self.arm(&mut slot),
            (true, false) => self.disarm(&mut slot),
            _ => {}
        }
        let snapshot = slot.timer.snapshot();
        drop(slot);

        info!("Timer {}: {} ({})", action, snapshot.display, snapshot.button_label);
        self.record_action(action);
        self.publish_timer(snapshot.clone());
        Ok(snapshot)
    }

    fn arm(&self, slot: &mut TimerSlot) {
        slot.generation += 1;
        slot.armed = Some(slot.generation);
        debug!("Arming tick source generation {}", slot.generation);
        self.arm_tx.send_replace(ArmSignal::Armed(slot.generation));
    }

    fn disarm(&self, slot: &mut TimerSlot) {
        if let Some(generation) = slot.armed.take() {
            debug!("Disarming tick source generation {}", generation);
        }
        self.arm_tx.send_replace(ArmSignal::Disarmed);
    }

    fn publish_timer(&self, snapshot: TimerSnapshot) {
        if let Err(e) = self.timer_update_tx.send(snapshot) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    fn lock_timer(&self) -> AppResult<MutexGuard<'_, TimerSlot>> {
        self.timer.lock().map_err(|_| AppError::LockPoisoned("timer"))
    }

    // ── Views ────────────────────────────────────────────────────────

    pub fn current_view(&self) -> AppResult<View> {
        self.current_view
            .lock()
            .map(|view| *view)
            .map_err(|_| AppError::LockPoisoned("view"))
    }

    /// Switch screens. Leaving the focus screen pauses a running timer.
    pub fn navigate(&self, view: View) -> AppResult<View> {
        let previous = {
            let mut current = self
                .current_view
                .lock()
                .map_err(|_| AppError::LockPoisoned("view"))?;
            std::mem::replace(&mut *current, view)
        };

        if previous == View::Focus && view != View::Focus && self.get_timer_state()?.is_running {
            info!("Leaving focus view, pausing timer");
            self.pause_timer()?;
        }

        debug!("View changed: {} -> {}", previous, view);
        self.record_action(&format!("view-{}", view));
        Ok(view)
    }

    // ── Habits ───────────────────────────────────────────────────────

    pub fn get_habits(&self) -> AppResult<(Vec<Habit>, HabitStats)> {
        let habits = self.lock_habits()?;
        Ok((habits.habits().to_vec(), habits.stats()))
    }

    pub fn habit_stats(&self) -> AppResult<HabitStats> {
        Ok(self.lock_habits()?.stats())
    }

    /// Toggle a habit's completed flag
    pub fn toggle_habit(&self, id: u32) -> AppResult<Habit> {
        let habit = self.lock_habits()?.toggle(id)?;
        info!("Habit {} '{}' completed={}", habit.id, habit.name, habit.completed);
        self.record_action(&format!("habit-{}", id));
        Ok(habit)
    }

    fn lock_habits(&self) -> AppResult<MutexGuard<'_, HabitList>> {
        self.habits.lock().map_err(|_| AppError::LockPoisoned("habits"))
    }

    // ── Reward ads ───────────────────────────────────────────────────

    pub fn get_ad_state(&self) -> AppResult<AdState> {
        self.lock_ad().map(|ad| ad.clone())
    }

    /// Raise the ad overlay; fails if one is already showing
    pub fn begin_ad(&self, message: &str) -> AppResult<()> {
        let mut ad = self.lock_ad()?;
        if ad.visible {
            return Err(AppError::AdInProgress);
        }
        ad.visible = true;
        ad.message = Some(message.to_string());
        drop(ad);

        info!("Showing reward ad: {}", message);
        self.record_action("ad");
        Ok(())
    }

    /// Dismiss the ad overlay and announce it
    pub fn finish_ad(&self) -> AppResult<()> {
        let message = {
            let mut ad = self.lock_ad()?;
            ad.visible = false;
            ad.message.take()
        };

        match message {
            Some(message) => self.notify(Notification::ad_complete(message)),
            None => warn!("Ad finished with no overlay showing"),
        }
        Ok(())
    }

    fn lock_ad(&self) -> AppResult<MutexGuard<'_, AdState>> {
        self.ad_state.lock().map_err(|_| AppError::LockPoisoned("ad"))
    }

    // ── Notifications ────────────────────────────────────────────────

    /// Publish a notification to subscribers and the recent log
    pub fn notify(&self, notification: Notification) {
        match self.recent_notifications.lock() {
            Ok(mut recent) => recent.push(notification.clone()),
            Err(_) => warn!("Failed to record notification: recent log poisoned"),
        }

        if self.notification_tx.send(notification).is_err() {
            debug!("No notification subscribers");
        }
    }

    pub fn subscribe_notifications(&self) -> broadcast::Receiver<Notification> {
        self.notification_tx.subscribe()
    }

    pub fn recent_notifications(&self) -> AppResult<Vec<Notification>> {
        self.recent_notifications
            .lock()
            .map(|recent| recent.to_vec())
            .map_err(|_| AppError::LockPoisoned("notifications"))
    }

    // ── Session ──────────────────────────────────────────────────────

    /// Stop the timer and tell the driver to exit
    pub fn shutdown(&self) -> AppResult<()> {
        let mut slot = self.lock_timer()?;
        if slot.timer.pause() {
            info!("Session ending, timer paused at {}", slot.timer.snapshot().display);
        }
        slot.armed = None;
        self.arm_tx.send_replace(ArmSignal::Shutdown);
        Ok(())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(focus_seconds: u64) -> AppState {
        AppState::new(0, "127.0.0.1".to_string(), focus_seconds, Duration::from_secs(3))
    }

    fn armed_generation(state: &AppState) -> u64 {
        match *state.subscribe_arm().borrow() {
            ArmSignal::Armed(generation) => generation,
            other => panic!("expected armed source, got {:?}", other),
        }
    }

    #[test]
    fn toggle_arms_and_disarms() {
        let state = session(60);
        state.toggle_timer().unwrap();
        let generation = armed_generation(&state);

        state.toggle_timer().unwrap();
        assert_eq!(*state.subscribe_arm().borrow(), ArmSignal::Disarmed);
        assert_eq!(state.apply_tick(generation).unwrap(), TickOutcome::Ignored);
        assert_eq!(state.get_timer_state().unwrap().remaining_seconds, 60);
    }

    #[test]
    fn restart_supersedes_old_source() {
        let state = session(60);
        state.start_timer().unwrap();
        let first = armed_generation(&state);
        state.pause_timer().unwrap();
        state.start_timer().unwrap();
        let second = armed_generation(&state);
        assert_ne!(first, second);

        assert_eq!(state.apply_tick(first).unwrap(), TickOutcome::Ignored);
        assert_eq!(
            state.apply_tick(second).unwrap(),
            TickOutcome::Advanced { remaining_seconds: 59 }
        );
    }

    #[test]
    fn second_start_keeps_the_same_source() {
        let state = session(60);
        state.start_timer().unwrap();
        let first = armed_generation(&state);
        state.start_timer().unwrap();
        assert_eq!(armed_generation(&state), first);
    }

    #[test]
    fn completion_notifies_once_and_disarms() {
        let state = session(3);
        let mut rx = state.subscribe_notifications();
        state.start_timer().unwrap();
        let generation = armed_generation(&state);

        state.apply_tick(generation).unwrap();
        state.apply_tick(generation).unwrap();
        assert_eq!(state.apply_tick(generation).unwrap(), TickOutcome::Completed);
        assert_eq!(state.apply_tick(generation).unwrap(), TickOutcome::Ignored);

        let timer = state.get_timer_state().unwrap();
        assert!(!timer.is_running);
        assert_eq!(timer.remaining_seconds, 3);
        assert_eq!(*state.subscribe_arm().borrow(), ArmSignal::Disarmed);

        assert_eq!(rx.try_recv().unwrap().title, "Pomodoro Complete!");
        assert!(rx.try_recv().is_err());
        assert_eq!(state.recent_notifications().unwrap().len(), 1);
    }

    #[test]
    fn completion_without_subscribers_still_resets() {
        let state = session(1);
        state.start_timer().unwrap();
        let generation = armed_generation(&state);
        assert_eq!(state.apply_tick(generation).unwrap(), TickOutcome::Completed);
        assert_eq!(state.get_timer_state().unwrap().remaining_seconds, 1);
    }

    #[test]
    fn leaving_focus_view_pauses_timer() {
        let state = session(60);
        state.navigate(View::Focus).unwrap();
        state.toggle_timer().unwrap();

        state.navigate(View::Habits).unwrap();
        assert!(!state.get_timer_state().unwrap().is_running);
        assert_eq!(*state.subscribe_arm().borrow(), ArmSignal::Disarmed);

        state.navigate(View::Focus).unwrap();
        assert!(!state.get_timer_state().unwrap().is_running);
    }

    #[test]
    fn ad_overlay_is_exclusive() {
        let state = session(60);
        state.begin_ad("first").unwrap();
        assert_eq!(state.begin_ad("second"), Err(AppError::AdInProgress));

        state.finish_ad().unwrap();
        assert!(!state.get_ad_state().unwrap().visible);
        let recent = state.recent_notifications().unwrap();
        assert_eq!(recent[0].title, "Ad Complete");
        assert_eq!(recent[0].message, "first");
    }

    #[test]
    fn shutdown_stops_the_driver() {
        let state = session(60);
        state.start_timer().unwrap();
        state.shutdown().unwrap();
        assert_eq!(*state.subscribe_arm().borrow(), ArmSignal::Shutdown);
        assert!(!state.get_timer_state().unwrap().is_running);
    }

    #[test]
    fn uptime_in_seconds_when_fresh() {
        let state = session(60);
        assert!(state.get_uptime().ends_with('s'));
    }
}
