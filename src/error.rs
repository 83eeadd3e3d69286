//! Application error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::api::responses::ErrorResponse;

/// Errors surfaced by session operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Habit {0} not found")]
    HabitNotFound(u32),

    #[error("Unknown view: {0}")]
    InvalidView(String),

    #[error("Please enter your mood or feeling")]
    EmptyMood,

    #[error("An ad is already showing")]
    AdInProgress,

    #[error("No reel at index {0}")]
    ReelNotFound(usize),

    #[error("Failed to lock {0} state")]
    LockPoisoned(&'static str),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::HabitNotFound(_) | AppError::ReelNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidView(_) | AppError::EmptyMood => StatusCode::BAD_REQUEST,
            AppError::AdInProgress => StatusCode::CONFLICT,
            AppError::LockPoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
