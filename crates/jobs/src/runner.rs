use crate::{PresenceWatchJob, RandomizeJob, ScheduleCheckJob};
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_randomize(RandomizeJob::new(sync.clone()))
///     .with_schedule_check(ScheduleCheckJob::new(controller.clone(), kick))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    randomize: Option<RandomizeJob>,
    schedule_check: Option<ScheduleCheckJob>,
    presence_watch: Option<PresenceWatchJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            randomize: None,
            schedule_check: None,
            presence_watch: None,
        }
    }

    pub fn with_randomize(mut self, job: RandomizeJob) -> Self {
        self.randomize = Some(job);
        self
    }

    pub fn with_schedule_check(mut self, job: ScheduleCheckJob) -> Self {
        self.schedule_check = Some(job);
        self
    }

    pub fn with_presence_watch(mut self, job: PresenceWatchJob) -> Self {
        self.presence_watch = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.randomize {
            Arc::new(job).start().await;
        }

        if let Some(job) = self.schedule_check {
            Arc::new(job).start().await;
        }

        if let Some(job) = self.presence_watch {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
