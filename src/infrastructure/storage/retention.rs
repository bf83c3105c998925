use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::application::ports::StagingStore;

/// Periodically deletes objects older than `max_age` from `store`.
pub fn spawn_retention_sweeper(
    store: Arc<dyn StagingStore>,
    max_age: Duration,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(
            max_age_secs = max_age.as_secs(),
            interval_secs = every.as_secs(),
            "Retention sweeper started"
        );
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match store.purge_older_than(max_age).await {
                Ok(0) => {}
                Ok(removed) => tracing::info!(removed, "Expired documents purged"),
                Err(e) => tracing::error!(error = %e, "Retention sweep failed"),
            }
        }
    })
}
