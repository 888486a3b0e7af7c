use rerouter_application::ports::PresenceSource;
use rerouter_application::services::ActivationController;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Polls the presence source and forwards every transition.
pub struct PresenceWatchJob {
    source: Arc<dyn PresenceSource>,
    controller: Arc<ActivationController>,
    poll_interval_secs: u64,
    shutdown: CancellationToken,
}

impl PresenceWatchJob {
    pub fn new(source: Arc<dyn PresenceSource>, controller: Arc<ActivationController>) -> Self {
        Self {
            source,
            controller,
            poll_interval_secs: 1,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, poll_interval_secs: u64) -> Self {
        self.poll_interval_secs = poll_interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            poll_interval_secs = self.poll_interval_secs,
            "Starting presence watch job"
        );

        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(self.poll_interval_secs));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("PresenceWatchJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let Some(presence) = self.source.poll() else {
                            continue;
                        };
                        if let Err(e) = self.controller.on_presence_change(presence).await {
                            error!(presence = %presence, error = %e, "Presence transition failed");
                        }
                    }
                }
            }
        });
    }
}
