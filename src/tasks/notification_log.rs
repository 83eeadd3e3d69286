//! Notification logging background task

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::state::AppState;

/// Background task that logs every notification the session raises
pub async fn notification_log_task(state: Arc<AppState>) {
    info!("Starting notification log task");

    let mut rx = state.subscribe_notifications();
    drop(state);

    loop {
        match rx.recv().await {
            Ok(notification) => {
                info!("{}: {}", notification.title, notification.message);
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Notification log fell behind, skipped {} messages", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }

    info!("Notification log task stopped");
}
