use serde::{Deserialize, Serialize};

/// Messages exchanged between UI surfaces and the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Message {
    /// Persist the enabled flag and resync.
    Toggle { enabled: bool },
    /// Resync and report the outcome.
    Refresh,
    /// Broadcast from the daemon; no reply is expected.
    StateChanged { enabled: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: ResponseStatus,

    #[serde(rename = "isEnabled", default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    pub fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
            is_enabled: None,
            error: None,
        }
    }

    pub fn toggled(is_enabled: bool) -> Self {
        Self {
            status: ResponseStatus::Success,
            is_enabled: Some(is_enabled),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            is_enabled: None,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}
