use rerouter_application::ports::Clock;
use rerouter_domain::TimeOfDay;

/// Local wall clock of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_time(&self) -> TimeOfDay {
        TimeOfDay::from_naive_time(chrono::Local::now().time())
    }
}
