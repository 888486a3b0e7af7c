use rerouter_domain::PresenceState;

/// Host-side presence signal.
pub trait PresenceSource: Send + Sync {
    /// Returns the new presence if it changed since the previous poll.
    fn poll(&self) -> Option<PresenceState>;
}
