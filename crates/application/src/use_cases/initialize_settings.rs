use crate::ports::SettingsStore;
use rerouter_domain::{DomainError, Settings, SettingsKey};
use std::sync::Arc;
use tracing::info;

/// Use case: seed install-time defaults for every absent key.
///
/// Present keys are never overwritten, so running it on each startup is safe.
pub struct InitializeSettingsUseCase {
    store: Arc<dyn SettingsStore>,
}

impl InitializeSettingsUseCase {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Settings, DomainError> {
        let mut current = self.store.get(&SettingsKey::ALL).await?;
        let defaults = current.missing_defaults();

        if !defaults.is_empty() {
            let seeded: Vec<&str> = defaults.keys().iter().map(|k| k.as_str()).collect();
            self.store.set(defaults.clone()).await?;
            info!(keys = ?seeded, "Seeded default settings");
            current.merge(defaults);
        }

        Ok(Settings::from(current))
    }
}
