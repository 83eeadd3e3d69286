//! State management module
//!
//! This module contains the countdown engine, the session object that owns it,
//! and the collaborator state (views, habits, notifications).

pub mod app_state;
pub mod habits;
pub mod notifications;
pub mod timer_state;
pub mod views;

// Re-export main types
pub use app_state::{AdState, AppState, ArmSignal};
pub use habits::{Habit, HabitList, HabitStats};
pub use notifications::{Notification, RecentNotifications};
pub use timer_state::{format_display, TickOutcome, TimerSnapshot, TimerState};
pub use views::View;
