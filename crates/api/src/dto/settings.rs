use rerouter_application::use_cases::SettingsUpdate;
use rerouter_domain::Schedule;
use serde::Deserialize;

/// Body of `PUT /settings`, keyed like the stored settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    #[serde(rename = "social_media")]
    pub blocked_sites: Option<Vec<String>>,
    #[serde(rename = "search_engines")]
    pub destinations: Option<Vec<String>>,
    pub schedule: Option<Schedule>,
}

impl From<UpdateSettingsRequest> for SettingsUpdate {
    fn from(req: UpdateSettingsRequest) -> Self {
        Self {
            blocked_sites: req.blocked_sites,
            destinations: req.destinations,
            schedule: req.schedule,
        }
    }
}
