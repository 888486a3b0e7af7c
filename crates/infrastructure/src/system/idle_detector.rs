use rerouter_application::ports::PresenceSource;
use rerouter_domain::PresenceState;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct DetectorState {
    last_input: Instant,
    locked: bool,
    reported: PresenceState,
}

/// Derives presence from input heartbeats and the screen-lock flag.
///
/// `poll` only yields a state when it differs from the last one it yielded;
/// the detector starts out `active`.
pub struct IdleDetector {
    threshold: Duration,
    state: Mutex<DetectorState>,
}

impl IdleDetector {
    pub fn new(threshold: Duration) -> Self {
        Self::starting_at(threshold, Instant::now())
    }

    pub fn starting_at(threshold: Duration, now: Instant) -> Self {
        Self {
            threshold,
            state: Mutex::new(DetectorState {
                last_input: now,
                locked: false,
                reported: PresenceState::Active,
            }),
        }
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn record_activity(&self) {
        self.record_activity_at(Instant::now());
    }

    pub fn record_activity_at(&self, now: Instant) {
        if let Ok(mut state) = self.state.lock() {
            if now > state.last_input {
                state.last_input = now;
            }
        }
    }

    pub fn set_locked(&self, locked: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.locked = locked;
        }
    }

    pub fn current_state(&self) -> PresenceState {
        self.current_state_at(Instant::now())
    }

    pub fn current_state_at(&self, now: Instant) -> PresenceState {
        match self.state.lock() {
            Ok(state) => self.evaluate(&state, now),
            Err(poisoned) => self.evaluate(&poisoned.into_inner(), now),
        }
    }

    pub fn poll_at(&self, now: Instant) -> Option<PresenceState> {
        let mut state = self.state.lock().ok()?;
        let current = self.evaluate(&state, now);
        if current == state.reported {
            return None;
        }
        state.reported = current;
        Some(current)
    }

    fn evaluate(&self, state: &DetectorState, now: Instant) -> PresenceState {
        if state.locked {
            PresenceState::Locked
        } else if now.saturating_duration_since(state.last_input) >= self.threshold {
            PresenceState::Idle
        } else {
            PresenceState::Active
        }
    }
}

impl PresenceSource for IdleDetector {
    fn poll(&self) -> Option<PresenceState> {
        self.poll_at(Instant::now())
    }
}
