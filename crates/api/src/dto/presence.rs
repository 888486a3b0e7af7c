use rerouter_domain::{ActivationState, PresenceState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PresenceRequest {
    pub state: PresenceState,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PresenceResponse {
    pub presence: PresenceState,
    pub state: ActivationState,
}

/// Heartbeat from a host agent. `locked` reports the screen lock.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ActivityRequest {
    #[serde(default)]
    pub locked: Option<bool>,
}
