//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/timer", get(timer_handler))
        .route("/timer/next", get(timer_next_handler))
        .route("/timer/toggle", post(timer_toggle_handler))
        .route("/timer/start", post(timer_start_handler))
        .route("/timer/pause", post(timer_pause_handler))
        .route("/view/:name", post(view_handler))
        .route("/habits", get(habits_handler))
        .route("/habits/:id/toggle", post(habit_toggle_handler))
        .route("/quotes/daily", get(daily_handler))
        .route("/quotes/generate", post(generate_quote_handler))
        .route("/reels", get(reels_handler))
        .route("/reels/:index", get(reel_handler))
        .route("/ads/reward", post(reward_ad_handler))
        .route("/notifications", get(notifications_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
