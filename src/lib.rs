//! Focus Spark - a session server for a motivational focus timer
//!
//! This library provides the pomodoro countdown engine and its tick driver,
//! along with the habit list, quote and reel catalogs, mood quotes and the
//! simulated reward ad overlay that make up one application session.

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::{AppState, TimerState};
pub use utils::signals::shutdown_signal;
