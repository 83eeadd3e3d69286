//! Fire-once user notifications

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many notifications the session remembers for polling clients
pub const RECENT_CAPACITY: usize = 32;

/// An alert shown to the user (pomodoro finished, ad dismissed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            at: Utc::now(),
        }
    }

    /// Alert raised when a focus session runs out
    pub fn pomodoro_complete() -> Self {
        Self::new("Pomodoro Complete!", "Great job! Take a 5-minute break.")
    }

    /// Alert raised when a reward ad overlay is dismissed
    pub fn ad_complete(message: impl Into<String>) -> Self {
        Self::new("Ad Complete", message)
    }
}

/// Bounded log of the most recent notifications, oldest first
#[derive(Debug, Clone)]
pub struct RecentNotifications {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl RecentNotifications {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notification);
    }

    pub fn to_vec(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecentNotifications {
    fn default() -> Self {
        Self::with_capacity(RECENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_past_capacity() {
        let mut recent = RecentNotifications::with_capacity(2);
        assert!(recent.is_empty());
        recent.push(Notification::new("a", "1"));
        recent.push(Notification::new("b", "2"));
        recent.push(Notification::new("c", "3"));
        assert_eq!(recent.len(), 2);

        let titles: Vec<_> = recent.to_vec().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut recent = RecentNotifications::with_capacity(0);
        recent.push(Notification::pomodoro_complete());
        assert!(recent.is_empty());
        assert_eq!(recent.len(), 0);
    }

    #[test]
    fn pomodoro_message_matches_alert() {
        let n = Notification::pomodoro_complete();
        assert_eq!(n.title, "Pomodoro Complete!");
        assert_eq!(n.message, "Great job! Take a 5-minute break.");
    }
}
