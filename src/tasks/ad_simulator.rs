//! Simulated reward ad overlay

use std::sync::Arc;
use tokio::time::sleep;
use tracing::{error, warn};

use crate::{error::AppResult, state::AppState};

/// Show the reward ad overlay and dismiss it after the configured duration.
///
/// Fails with `AdInProgress` if an overlay is already up.
pub fn show_reward_ad(state: &Arc<AppState>, message: &str) -> AppResult<()> {
    state.begin_ad(message)?;

    let state = Arc::clone(state);
    tokio::spawn(async move {
        sleep(state.ad_duration).await;
        if let Err(e) = state.finish_ad() {
            error!("Failed to dismiss reward ad: {}", e);
        }
    });

    Ok(())
}

/// Show a reward ad as a side effect of another action; a busy overlay is skipped
pub fn request_reward_ad(state: &Arc<AppState>, message: &str) -> bool {
    match show_reward_ad(state, message) {
        Ok(()) => true,
        Err(e) => {
            warn!("Skipping reward ad '{}': {}", message, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::error::AppError;

    fn session() -> Arc<AppState> {
        Arc::new(AppState::new(
            0,
            "127.0.0.1".to_string(),
            60,
            Duration::from_secs(3),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn overlay_dismisses_after_duration() {
        let state = session();
        let mut notifications = state.subscribe_notifications();

        show_reward_ad(&state, "Premium focus music unlocked with this ad!").unwrap();
        assert!(state.get_ad_state().unwrap().visible);

        sleep(Duration::from_millis(2900)).await;
        assert!(state.get_ad_state().unwrap().visible);

        sleep(Duration::from_millis(200)).await;
        assert!(!state.get_ad_state().unwrap().visible);

        let done = notifications.try_recv().unwrap();
        assert_eq!(done.title, "Ad Complete");
        assert_eq!(done.message, "Premium focus music unlocked with this ad!");
    }

    #[tokio::test(start_paused = true)]
    async fn second_ad_waits_for_the_first() {
        let state = session();
        show_reward_ad(&state, "one").unwrap();
        assert_eq!(show_reward_ad(&state, "two"), Err(AppError::AdInProgress));
        assert!(!request_reward_ad(&state, "three"));

        sleep(Duration::from_millis(3100)).await;
        assert!(request_reward_ad(&state, "four"));
    }
}
