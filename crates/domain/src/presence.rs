use serde::{Deserialize, Serialize};
use std::fmt;

/// User presence as reported by the host idle detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceState {
    Active,
    Idle,
    Locked,
}

impl PresenceState {
    /// Protection turns on while the user is away.
    pub fn demands_protection(&self) -> bool {
        matches!(self, PresenceState::Idle | PresenceState::Locked)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceState::Active => "active",
            PresenceState::Idle => "idle",
            PresenceState::Locked => "locked",
        }
    }
}

impl fmt::Display for PresenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted enabled flag, named by what it means for redirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivationState {
    Active,
    Standby,
}

impl From<bool> for ActivationState {
    fn from(enabled: bool) -> Self {
        if enabled {
            ActivationState::Active
        } else {
            ActivationState::Standby
        }
    }
}

impl ActivationState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, ActivationState::Active)
    }
}

impl fmt::Display for ActivationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationState::Active => f.write_str("ACTIVE"),
            ActivationState::Standby => f.write_str("STANDBY"),
        }
    }
}
