use rerouter_application::services::{SyncHandle, SyncTrigger};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Re-rolls the redirect destination on a fixed period.
pub struct RandomizeJob {
    sync: SyncHandle,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl RandomizeJob {
    pub fn new(sync: SyncHandle) -> Self {
        Self {
            sync,
            interval_secs: 300,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting randomize job");

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs);
            // Startup already synced; the first re-roll is one period out.
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("RandomizeJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if self.sync.request(SyncTrigger::Randomize) {
                            debug!("Randomize sync requested");
                        } else {
                            warn!("Sync coordinator stopped, randomize job exiting");
                            break;
                        }
                    }
                }
            }
        });
    }
}
