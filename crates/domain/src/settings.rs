use crate::defaults::{default_blocked_sites, default_destinations};
use crate::schedule::Schedule;
use serde::{Deserialize, Serialize};

/// Storage keys of the settings table.
///
/// The string forms are the persisted key names and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsKey {
    Enabled,
    BlockedSites,
    Destinations,
    Stats,
    Schedule,
}

impl SettingsKey {
    pub const ALL: [SettingsKey; 5] = [
        SettingsKey::Enabled,
        SettingsKey::BlockedSites,
        SettingsKey::Destinations,
        SettingsKey::Stats,
        SettingsKey::Schedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsKey::Enabled => "isEnabled",
            SettingsKey::BlockedSites => "social_media",
            SettingsKey::Destinations => "search_engines",
            SettingsKey::Stats => "stats",
            SettingsKey::Schedule => "schedule",
        }
    }

    pub fn parse_key(s: &str) -> Option<Self> {
        match s {
            "isEnabled" => Some(SettingsKey::Enabled),
            "social_media" => Some(SettingsKey::BlockedSites),
            "search_engines" => Some(SettingsKey::Destinations),
            "stats" => Some(SettingsKey::Stats),
            "schedule" => Some(SettingsKey::Schedule),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectStats {
    pub redirect_count: u64,
}

/// A partial view of the settings table: `None` means the key is absent.
///
/// Serializes with the persisted key names, so it doubles as the storage
/// schema exposed to the settings UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(rename = "isEnabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(rename = "social_media", default, skip_serializing_if = "Option::is_none")]
    pub blocked_sites: Option<Vec<String>>,

    #[serde(rename = "search_engines", default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<RedirectStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}

impl SettingsPatch {
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_none()
            && self.blocked_sites.is_none()
            && self.destinations.is_none()
            && self.stats.is_none()
            && self.schedule.is_none()
    }

    /// Keys present in this patch.
    pub fn keys(&self) -> Vec<SettingsKey> {
        let mut keys = Vec::new();
        if self.enabled.is_some() {
            keys.push(SettingsKey::Enabled);
        }
        if self.blocked_sites.is_some() {
            keys.push(SettingsKey::BlockedSites);
        }
        if self.destinations.is_some() {
            keys.push(SettingsKey::Destinations);
        }
        if self.stats.is_some() {
            keys.push(SettingsKey::Stats);
        }
        if self.schedule.is_some() {
            keys.push(SettingsKey::Schedule);
        }
        keys
    }

    /// The enabled flag, where an absent flag counts as enabled.
    ///
    /// Initialization writes the flag explicitly; this is the single
    /// fallback for a store that was never initialized.
    pub fn enabled_or_default(&self) -> bool {
        self.enabled != Some(false)
    }

    /// Returns a patch holding only the keys that are absent here, filled
    /// with install-time defaults.
    pub fn missing_defaults(&self) -> SettingsPatch {
        SettingsPatch {
            enabled: self.enabled.is_none().then_some(true),
            blocked_sites: self.blocked_sites.is_none().then(default_blocked_sites),
            destinations: self.destinations.is_none().then(default_destinations),
            stats: self.stats.is_none().then(RedirectStats::default),
            schedule: None,
        }
    }

    /// Overlays every present field of `other` onto `self`.
    pub fn merge(&mut self, other: SettingsPatch) {
        if other.enabled.is_some() {
            self.enabled = other.enabled;
        }
        if other.blocked_sites.is_some() {
            self.blocked_sites = other.blocked_sites;
        }
        if other.destinations.is_some() {
            self.destinations = other.destinations;
        }
        if other.stats.is_some() {
            self.stats = other.stats;
        }
        if other.schedule.is_some() {
            self.schedule = other.schedule;
        }
    }
}

/// Fully resolved user settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "isEnabled")]
    pub enabled: bool,

    #[serde(rename = "social_media")]
    pub blocked_sites: Vec<String>,

    #[serde(rename = "search_engines")]
    pub destinations: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,

    pub stats: RedirectStats,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            blocked_sites: default_blocked_sites(),
            destinations: default_destinations(),
            schedule: None,
            stats: RedirectStats::default(),
        }
    }
}

impl From<SettingsPatch> for Settings {
    fn from(patch: SettingsPatch) -> Self {
        Self {
            enabled: patch.enabled_or_default(),
            blocked_sites: patch.blocked_sites.unwrap_or_else(default_blocked_sites),
            destinations: patch.destinations.unwrap_or_else(default_destinations),
            schedule: patch.schedule,
            stats: patch.stats.unwrap_or_default(),
        }
    }
}

impl From<&Settings> for SettingsPatch {
    fn from(settings: &Settings) -> Self {
        Self {
            enabled: Some(settings.enabled),
            blocked_sites: Some(settings.blocked_sites.clone()),
            destinations: Some(settings.destinations.clone()),
            stats: Some(settings.stats),
            schedule: settings.schedule.clone(),
        }
    }
}
