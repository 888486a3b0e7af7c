use async_trait::async_trait;
use rerouter_domain::{DomainError, SettingsKey, SettingsPatch};

/// Durable key/value store holding the user settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads the given keys.
    ///
    /// # Returns
    ///
    /// * `Ok(SettingsPatch)` - Fields for keys that are present; absent keys stay `None`
    /// * `Err(DomainError::Storage)` - If the store cannot be read
    async fn get(&self, keys: &[SettingsKey]) -> Result<SettingsPatch, DomainError>;

    /// Writes every field present in `patch`. Absent fields are left untouched.
    ///
    /// # Errors
    ///
    /// * `DomainError::Storage` - If the write fails; no key of the patch is written
    async fn set(&self, patch: SettingsPatch) -> Result<(), DomainError>;
}
