//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    content::{Quote, Reel},
    state::{AdState, Habit, HabitStats, Notification, TimerSnapshot, View},
};

/// Body of every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Response for timer reads and controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub timer: TimerSnapshot,
    pub timestamp: DateTime<Utc>,
}

impl TimerResponse {
    pub fn new(timer: TimerSnapshot) -> Self {
        Self {
            timer,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewResponse {
    pub view: View,
    pub timer: TimerSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitsResponse {
    pub habits: Vec<Habit>,
    pub stats: HabitStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitToggleResponse {
    pub habit: Habit,
    pub stats: HabitStats,
    /// Whether completing the habit raised a reward ad
    pub ad_shown: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyResponse {
    pub quote: Quote,
    pub tip: &'static str,
    pub day_of_month: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReelsResponse {
    pub reels: &'static [Reel],
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodResponse {
    pub mood: String,
    pub quote: String,
    pub ad_shown: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdResponse {
    pub ad: AdState,
    pub duration_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

/// Whole-session status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub view: View,
    pub timer: TimerSnapshot,
    pub habits: HabitStats,
    pub ad: AdState,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
