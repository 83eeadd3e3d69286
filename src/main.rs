//! Focus Spark - a session server for a motivational focus timer
//!
//! This is the main entry point for the focus-spark application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use focus_spark::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::{countdown_task, notification_log_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.validate().map_err(anyhow::Error::msg)?;

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_spark={},tower_http=info", config.log_level()))
        .init();

    info!("Starting focus-spark server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, focus={}min, ad={}s",
          config.host, config.port, config.focus_minutes, config.ad_seconds);

    // One session per process
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.focus_seconds(),
        config.ad_duration(),
    ));

    // Single tick source for the focus timer
    let driver = tokio::spawn(countdown_task(Arc::clone(&state)));
    tokio::spawn(notification_log_task(Arc::clone(&state)));

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /timer             - Focus timer display state");
    info!("  GET  /timer/next        - Wait for the next timer change");
    info!("  POST /timer/toggle      - Start or pause the focus timer");
    info!("  POST /view/:name        - Switch screens");
    info!("  GET  /habits            - Habit list");
    info!("  POST /habits/:id/toggle - Toggle a habit");
    info!("  GET  /quotes/daily      - Today's quote and tip");
    info!("  POST /quotes/generate   - Quote for a mood");
    info!("  GET  /reels             - Motivation reels");
    info!("  POST /ads/reward        - Show a reward ad");
    info!("  GET  /notifications     - Recent alerts");
    info!("  GET  /status            - Session status");
    info!("  GET  /health            - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => tracing::error!("Failed to listen for signals: {}", e),
            }
        }
    }

    state.shutdown()?;
    if let Err(e) = driver.await {
        tracing::error!("Countdown driver failed: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
