pub mod presence_watch;
pub mod randomize;
pub mod runner;
pub mod schedule_check;

pub use presence_watch::PresenceWatchJob;
pub use randomize::RandomizeJob;
pub use runner::JobRunner;
pub use schedule_check::ScheduleCheckJob;
