use async_trait::async_trait;
use rerouter_application::ports::SettingsStore;
use rerouter_domain::{DomainError, SettingsKey, SettingsPatch};
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{error, instrument, warn};

type SettingRow = (String, String);

/// Settings table with one JSON value per key.
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn encode(patch: &SettingsPatch) -> Result<Vec<(&'static str, String)>, DomainError> {
        let Value::Object(map) = serde_json::to_value(patch)
            .map_err(|e| DomainError::Storage(format!("failed to encode settings: {e}")))?
        else {
            return Err(DomainError::Storage(
                "settings did not encode to an object".to_string(),
            ));
        };

        Ok(map
            .into_iter()
            .filter_map(|(key, value)| {
                SettingsKey::parse_key(&key).map(|key| (key.as_str(), value.to_string()))
            })
            .collect())
    }

    /// Decodes key by key so one malformed value does not hide the others.
    fn decode(rows: Vec<SettingRow>, keys: &[SettingsKey]) -> SettingsPatch {
        let mut patch = SettingsPatch::default();

        for (key, raw) in rows {
            let Some(parsed_key) = SettingsKey::parse_key(&key) else {
                continue;
            };
            if !keys.contains(&parsed_key) {
                continue;
            }

            let value = match serde_json::from_str::<Value>(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key = %key, error = %e, "Ignoring unreadable setting");
                    continue;
                }
            };

            let mut single = serde_json::Map::new();
            single.insert(key.clone(), value);
            match serde_json::from_value::<SettingsPatch>(Value::Object(single)) {
                Ok(part) => patch.merge(part),
                Err(e) => warn!(key = %key, error = %e, "Ignoring malformed setting"),
            }
        }

        patch
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    #[instrument(skip(self))]
    async fn get(&self, keys: &[SettingsKey]) -> Result<SettingsPatch, DomainError> {
        if keys.is_empty() {
            return Ok(SettingsPatch::default());
        }

        let rows = sqlx::query_as::<_, SettingRow>("SELECT key, value FROM settings")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to read settings");
                DomainError::Storage(e.to_string())
            })?;

        Ok(Self::decode(rows, keys))
    }

    #[instrument(skip(self, patch), fields(keys = ?patch.keys()))]
    async fn set(&self, patch: SettingsPatch) -> Result<(), DomainError> {
        let rows = Self::encode(&patch)?;
        if rows.is_empty() {
            return Ok(());
        }

        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin settings transaction");
            DomainError::Storage(e.to_string())
        })?;

        for (key, value) in rows {
            sqlx::query(
                "INSERT INTO settings (key, value, updated_at) VALUES (?, ?, ?)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            )
            .bind(key)
            .bind(&value)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, key, "Failed to write setting");
                DomainError::Storage(e.to_string())
            })?;
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit settings");
            DomainError::Storage(e.to_string())
        })?;

        Ok(())
    }
}
