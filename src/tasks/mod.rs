//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod ad_simulator;
pub mod countdown;
pub mod notification_log;

// Re-export main functions
pub use ad_simulator::{request_reward_ad, show_reward_ad};
pub use countdown::countdown_task;
pub use notification_log::notification_log_task;
