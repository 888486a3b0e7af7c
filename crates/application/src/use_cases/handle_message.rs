use crate::ports::SettingsStore;
use crate::services::{SyncHandle, SyncTrigger};
use rerouter_domain::{Message, MessageResponse, SettingsPatch};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Use case: the message gateway between UI surfaces and the daemon.
///
/// Every reply is produced only after the requested work has finished.
pub struct HandleMessageUseCase {
    store: Arc<dyn SettingsStore>,
    sync: SyncHandle,
}

impl HandleMessageUseCase {
    pub fn new(store: Arc<dyn SettingsStore>, sync: SyncHandle) -> Self {
        Self { store, sync }
    }

    /// Returns `None` for broadcasts, which expect no reply.
    #[instrument(skip(self))]
    pub async fn execute(&self, message: Message) -> Option<MessageResponse> {
        match message {
            Message::Toggle { enabled } => Some(self.toggle(enabled).await),
            Message::Refresh => Some(self.refresh().await),
            Message::StateChanged { .. } => {
                debug!("Ignoring broadcast sent to the gateway");
                None
            }
        }
    }

    async fn toggle(&self, enabled: bool) -> MessageResponse {
        if let Err(e) = self.store.set(SettingsPatch::enabled(enabled)).await {
            error!(error = %e, "Failed to persist enabled flag");
            return MessageResponse::error(e.to_string());
        }

        if let Err(e) = self.sync.sync_now(SyncTrigger::Toggle).await {
            warn!(error = %e, "Sync after toggle failed");
        }

        info!(enabled, "Protection toggled");
        MessageResponse::toggled(enabled)
    }

    async fn refresh(&self) -> MessageResponse {
        match self.sync.sync_now(SyncTrigger::Refresh).await {
            Ok(_) => MessageResponse::success(),
            Err(e) => MessageResponse::error(e.to_string()),
        }
    }
}
