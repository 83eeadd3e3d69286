//! HTTP endpoint handlers

use std::{sync::Arc, time::Duration};
use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{Datelike, Local};
use tracing::{debug, info};

use crate::{
    content::{daily_quote, daily_tip, generate_mood_quote, reel_at, reels, Reel},
    error::{AppError, AppResult},
    state::{AppState, View},
    tasks::{request_reward_ad, show_reward_ad},
};
use super::responses::*;

/// Handle GET /timer - Current countdown for the display layer
pub async fn timer_handler(State(state): State<Arc<AppState>>) -> AppResult<Json<TimerResponse>> {
    Ok(Json(TimerResponse::new(state.get_timer_state()?)))
}

/// How long GET /timer/next waits for the countdown to change
const TIMER_POLL_TIMEOUT: Duration = Duration::from_secs(30);

/// Handle GET /timer/next - Long-poll until the countdown changes
///
/// Returns the current snapshot unchanged if nothing happens within the poll timeout.
pub async fn timer_next_handler(State(state): State<Arc<AppState>>) -> AppResult<Json<TimerResponse>> {
    let mut updates = state.subscribe_timer();
    updates.borrow_and_update();

    match tokio::time::timeout(TIMER_POLL_TIMEOUT, updates.changed()).await {
        Ok(Ok(())) => {}
        Ok(Err(_)) => debug!("Timer feed closed"),
        Err(_) => debug!("No timer change within {:?}", TIMER_POLL_TIMEOUT),
    }

    let snapshot = updates.borrow().clone();
    Ok(Json(TimerResponse::new(snapshot)))
}

/// Handle POST /timer/toggle - The start/pause button
pub async fn timer_toggle_handler(State(state): State<Arc<AppState>>) -> AppResult<Json<TimerResponse>> {
    Ok(Json(TimerResponse::new(state.toggle_timer()?)))
}

/// Handle POST /timer/start
pub async fn timer_start_handler(State(state): State<Arc<AppState>>) -> AppResult<Json<TimerResponse>> {
    Ok(Json(TimerResponse::new(state.start_timer()?)))
}

/// Handle POST /timer/pause
pub async fn timer_pause_handler(State(state): State<Arc<AppState>>) -> AppResult<Json<TimerResponse>> {
    Ok(Json(TimerResponse::new(state.pause_timer()?)))
}

/// Handle POST /view/:name - Switch screens
pub async fn view_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> AppResult<Json<ViewResponse>> {
    let view: View = name.parse()?;
    let view = state.navigate(view)?;
    Ok(Json(ViewResponse {
        view,
        timer: state.get_timer_state()?,
    }))
}

/// Handle GET /habits
pub async fn habits_handler(State(state): State<Arc<AppState>>) -> AppResult<Json<HabitsResponse>> {
    let (habits, stats) = state.get_habits()?;
    Ok(Json(HabitsResponse { habits, stats }))
}

/// Handle POST /habits/:id/toggle - Completing a habit earns a reward ad
pub async fn habit_toggle_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> AppResult<Json<HabitToggleResponse>> {
    let habit = state.toggle_habit(id)?;
    let ad_shown = habit.completed
        && request_reward_ad(&state, "Habit completed! Here's your reward ad.");

    Ok(Json(HabitToggleResponse {
        habit,
        stats: state.habit_stats()?,
        ad_shown,
    }))
}

/// Handle GET /quotes/daily - Quote and tip for today's date
pub async fn daily_handler() -> Json<DailyResponse> {
    let day_of_month = Local::now().day();
    Json(DailyResponse {
        quote: *daily_quote(day_of_month),
        tip: daily_tip(day_of_month),
        day_of_month,
    })
}

/// Handle POST /quotes/generate - Mood-based quote
pub async fn generate_quote_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoodRequest>,
) -> AppResult<Json<MoodResponse>> {
    let quote = generate_mood_quote(&request.mood)?;
    info!("Generated quote for mood '{}'", request.mood.trim());
    let ad_shown = request_reward_ad(&state, "Quote generated! Here's an ad for you.");

    Ok(Json(MoodResponse {
        mood: request.mood.trim().to_string(),
        quote,
        ad_shown,
    }))
}

/// Handle GET /reels
pub async fn reels_handler() -> Json<ReelsResponse> {
    Json(ReelsResponse { reels: reels() })
}

/// Handle GET /reels/:index - Reel at a scroll position
pub async fn reel_handler(Path(index): Path<usize>) -> AppResult<Json<Reel>> {
    reel_at(index)
        .copied()
        .map(Json)
        .ok_or(AppError::ReelNotFound(index))
}

/// Handle POST /ads/reward - Show a reward ad on request
pub async fn reward_ad_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AdRequest>,
) -> AppResult<Json<AdResponse>> {
    show_reward_ad(&state, &request.message)?;
    Ok(Json(AdResponse {
        ad: state.get_ad_state()?,
        duration_seconds: state.ad_duration.as_secs(),
    }))
}

/// Handle GET /notifications - Recent alerts, oldest first
pub async fn notifications_handler(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<NotificationsResponse>> {
    Ok(Json(NotificationsResponse {
        notifications: state.recent_notifications()?,
    }))
}

/// Handle GET /status - Return current session status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> AppResult<Json<StatusResponse>> {
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        view: state.current_view()?,
        timer: state.get_timer_state()?,
        habits: state.habit_stats()?,
        ad: state.get_ad_state()?,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
