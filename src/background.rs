use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// Periodically drops expired toasts so the notification store never
/// accumulates stale entries. This replaces the per-toast ad hoc timers
/// the dashboard used to spawn.
pub async fn start_notification_sweeper(state: Arc<AppState>) {
    info!("Starting notification sweeper...");

    let interval = Duration::from_secs(state.config.sweep_interval_secs);

    loop {
        match state.notification_store.purge_expired(Utc::now()).await {
            Ok(0) => debug!("Sweep found no expired notifications"),
            Ok(purged) => info!("Purged {} expired notifications", purged),
            Err(e) => error!("Failed to purge expired notifications: {:?}", e),
        }
        sleep(interval).await;
    }
}
