use std::sync::Arc;
use tokio::sync::Notify;

/// One-shot wake-up for the schedule check job.
///
/// Firing while nobody waits stores a single permit, so a kick is never
/// lost between two polls.
#[derive(Clone, Default)]
pub struct ScheduleKick {
    notify: Arc<Notify>,
}

impl ScheduleKick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&self) {
        self.notify.notify_one();
    }

    pub async fn fired(&self) {
        self.notify.notified().await;
    }
}
