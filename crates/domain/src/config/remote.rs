use serde::{Deserialize, Serialize};

/// Optional remote source for the site and destination lists
///
/// Fetches are always bounded by `timeout_secs` rather than left unbounded,
/// so a hung source cannot stall the sync coordinator.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// JSON endpoint returning `{social_media, search_engines}`.
    /// Empty disables the remote source and the stored lists are used.
    #[serde(default)]
    pub url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl RemoteConfig {
    pub fn is_enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

fn default_timeout() -> u64 {
    30
}
