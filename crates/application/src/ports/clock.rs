use rerouter_domain::TimeOfDay;

/// Source of the local wall-clock time used by the schedule.
pub trait Clock: Send + Sync {
    fn local_time(&self) -> TimeOfDay;
}
