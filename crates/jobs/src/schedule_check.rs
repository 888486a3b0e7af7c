use rerouter_application::services::{ActivationController, ScheduleKick};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Evaluates the schedule every minute and right after a schedule edit.
pub struct ScheduleCheckJob {
    controller: Arc<ActivationController>,
    kick: ScheduleKick,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl ScheduleCheckJob {
    pub fn new(controller: Arc<ActivationController>, kick: ScheduleKick) -> Self {
        Self {
            controller,
            kick,
            interval_secs: 60,
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
        info!(interval_secs = self.interval_secs, "Starting schedule check job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("ScheduleCheckJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => self.check().await,
                    _ = self.kick.fired() => self.check().await,
                }
            }
        });
    }

    async fn check(&self) {
        match self.controller.check_schedule().await {
            Ok(Some(state)) => info!(state = %state, "Schedule applied"),
            Ok(None) => {}
            Err(e) => error!(error = %e, "Schedule check failed"),
        }
    }
}
