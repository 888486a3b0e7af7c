use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Rule update rejected: {0}")]
    EnforcementUpdate(String),

    #[error("Remote list fetch failed: {0}")]
    RemoteFetch(String),

    #[error("Invalid configuration: {0}")]
    ConfigValidation(String),

    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Rule synchronizer is not running")]
    SyncUnavailable,
}
