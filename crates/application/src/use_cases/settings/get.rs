use crate::ports::SettingsStore;
use rerouter_domain::{DomainError, Settings, SettingsKey};
use std::sync::Arc;

pub struct GetSettingsUseCase {
    store: Arc<dyn SettingsStore>,
}

impl GetSettingsUseCase {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Settings, DomainError> {
        let stored = self.store.get(&SettingsKey::ALL).await?;
        Ok(Settings::from(stored))
    }
}
