use serde::{Deserialize, Serialize};

/// Intervals of the background triggers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulerConfig {
    /// Seconds between destination re-picks (default: 300)
    #[serde(default = "default_randomize_interval")]
    pub randomize_interval_secs: u64,

    /// Seconds between schedule evaluations (default: 60)
    #[serde(default = "default_schedule_check_interval")]
    pub schedule_check_interval_secs: u64,

    /// Seconds without input before the user counts as idle (default: 60)
    #[serde(default = "default_idle_threshold")]
    pub idle_threshold_secs: u64,

    /// Seconds between idle detector polls (default: 1)
    #[serde(default = "default_presence_poll_interval")]
    pub presence_poll_interval_secs: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            randomize_interval_secs: default_randomize_interval(),
            schedule_check_interval_secs: default_schedule_check_interval(),
            idle_threshold_secs: default_idle_threshold(),
            presence_poll_interval_secs: default_presence_poll_interval(),
        }
    }
}

fn default_randomize_interval() -> u64 {
    300
}

fn default_schedule_check_interval() -> u64 {
    60
}

fn default_idle_threshold() -> u64 {
    60
}

fn default_presence_poll_interval() -> u64 {
    1
}
