//! Countdown driver background task
//!
//! The driver is the single periodic tick source for a session. It owns no
//! timer logic: every tick goes through `AppState::apply_tick`, which decides
//! whether the tick still counts.

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};

use crate::state::{AppState, ArmSignal, TickOutcome};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that ticks the focus timer while it is armed
pub async fn countdown_task(state: Arc<AppState>) {
    info!("Starting countdown driver task");

    let mut arm_rx = state.subscribe_arm();
    // Generation whose source stopped on its own; wait for a new arm before ticking again.
    let mut finished: Option<u64> = None;

    loop {
        let signal = *arm_rx.borrow_and_update();
        match signal {
            ArmSignal::Shutdown => break,
            ArmSignal::Armed(generation) if finished != Some(generation) => {
                match run_armed(&state, &mut arm_rx, generation).await {
                    SourceEnd::Stopped => finished = Some(generation),
                    SourceEnd::Signalled => {}
                    SourceEnd::Closed => break,
                }
            }
            _ => {
                if arm_rx.changed().await.is_err() {
                    break;
                }
            }
        }
    }

    info!("Countdown driver stopped");
}

enum SourceEnd {
    /// The timer completed or rejected a tick
    Stopped,
    /// A new arm signal arrived
    Signalled,
    /// The session went away
    Closed,
}

async fn run_armed(
    state: &AppState,
    arm_rx: &mut watch::Receiver<ArmSignal>,
    generation: u64,
) -> SourceEnd {
    debug!("Tick source generation {} armed", generation);

    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match state.apply_tick(generation) {
                    Ok(TickOutcome::Advanced { remaining_seconds }) => {
                        debug!("Tick: {}s remaining", remaining_seconds);
                    }
                    Ok(TickOutcome::Completed) => {
                        debug!("Tick source generation {} finished", generation);
                        return SourceEnd::Stopped;
                    }
                    Ok(TickOutcome::Ignored) => {
                        debug!("Tick source generation {} no longer current", generation);
                        return SourceEnd::Stopped;
                    }
                    Err(e) => {
                        error!("Failed to apply tick: {}", e);
                        return SourceEnd::Stopped;
                    }
                }
            }

            changed = arm_rx.changed() => {
                if changed.is_err() {
                    return SourceEnd::Closed;
                }
                debug!("Arm signal changed, releasing source generation {}", generation);
                return SourceEnd::Signalled;
            }
        }
    }
}
