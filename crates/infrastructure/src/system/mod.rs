pub mod clock;
pub mod idle_detector;

pub use clock::SystemClock;
pub use idle_detector::IdleDetector;
