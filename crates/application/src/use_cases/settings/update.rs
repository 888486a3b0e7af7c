use crate::ports::SettingsStore;
use crate::services::{ScheduleKick, SyncHandle, SyncTrigger};
use rerouter_domain::validators::{
    normalize_destination, normalize_site, validate_destination, validate_site,
};
use rerouter_domain::{DomainError, Schedule, Settings, SettingsKey, SettingsPatch};
use std::sync::Arc;
use tracing::{info, instrument};

/// Edits coming from the settings UI. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub blocked_sites: Option<Vec<String>>,
    pub destinations: Option<Vec<String>>,
    pub schedule: Option<Schedule>,
}

/// Use case: validate and persist list and schedule edits.
///
/// Sites are lowercased, destinations gain an `https://` scheme when they
/// have none, and blank entries are dropped. A schedule edit wakes the
/// schedule check immediately; every edit requests a rule sync.
pub struct UpdateSettingsUseCase {
    store: Arc<dyn SettingsStore>,
    sync: SyncHandle,
    schedule_kick: ScheduleKick,
}

impl UpdateSettingsUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, sync: SyncHandle, schedule_kick: ScheduleKick) -> Self {
        Self {
            store,
            sync,
            schedule_kick,
        }
    }

    /// # Errors
    ///
    /// * `DomainError::InvalidSettings` - If a site or destination is malformed
    /// * `DomainError::Storage` - If the store cannot be written
    #[instrument(skip(self))]
    pub async fn execute(&self, update: SettingsUpdate) -> Result<Settings, DomainError> {
        let blocked_sites = update
            .blocked_sites
            .map(|sites| {
                let sites: Vec<String> = sites.iter().filter_map(|s| normalize_site(s)).collect();
                for site in &sites {
                    validate_site(site).map_err(DomainError::InvalidSettings)?;
                }
                Ok::<_, DomainError>(sites)
            })
            .transpose()?;

        let destinations = update
            .destinations
            .map(|urls| {
                let urls: Vec<String> = urls
                    .iter()
                    .filter_map(|u| normalize_destination(u))
                    .collect();
                for url in &urls {
                    validate_destination(url).map_err(DomainError::InvalidSettings)?;
                }
                Ok::<_, DomainError>(urls)
            })
            .transpose()?;

        let schedule_changed = update.schedule.is_some();
        let patch = SettingsPatch {
            blocked_sites,
            destinations,
            schedule: update.schedule,
            ..Default::default()
        };

        if patch.is_empty() {
            let stored = self.store.get(&SettingsKey::ALL).await?;
            return Ok(Settings::from(stored));
        }

        let keys: Vec<&str> = patch.keys().iter().map(|k| k.as_str()).collect();
        self.store.set(patch).await?;
        info!(keys = ?keys, "Settings updated");

        if schedule_changed {
            self.schedule_kick.fire();
        }
        self.sync.request(SyncTrigger::SettingsChanged);

        let stored = self.store.get(&SettingsKey::ALL).await?;
        Ok(Settings::from(stored))
    }
}
