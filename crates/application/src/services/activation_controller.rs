use crate::ports::{Clock, SettingsStore, StateNotifier};
use crate::services::{SyncHandle, SyncTrigger};
use rerouter_domain::{ActivationState, DomainError, Message, PresenceState, SettingsKey, SettingsPatch};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The input that caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSignal {
    Presence(PresenceState),
    Schedule,
}

impl fmt::Display for ActivationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationSignal::Presence(state) => write!(f, "presence:{state}"),
            ActivationSignal::Schedule => f.write_str("schedule"),
        }
    }
}

/// Derives the enabled flag from the presence signal and the schedule.
///
/// Both signals may flip the flag; the most recent one wins. A transition
/// persists the flag, resyncs the rules and broadcasts `stateChanged`.
pub struct ActivationController {
    store: Arc<dyn SettingsStore>,
    sync: SyncHandle,
    notifier: Arc<dyn StateNotifier>,
    clock: Arc<dyn Clock>,
}

impl ActivationController {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        sync: SyncHandle,
        notifier: Arc<dyn StateNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            sync,
            notifier,
            clock,
        }
    }

    /// Idle or locked turns protection on; active turns it off.
    ///
    /// The transition runs even when the flag already has the demanded value.
    #[instrument(skip(self))]
    pub async fn on_presence_change(
        &self,
        presence: PresenceState,
    ) -> Result<ActivationState, DomainError> {
        let desired = ActivationState::from(presence.demands_protection());
        info!(presence = %presence, state = %desired, "Presence changed");

        self.transition(desired, ActivationSignal::Presence(presence))
            .await?;
        Ok(desired)
    }

    /// Evaluates the schedule at the current local time.
    ///
    /// Returns the new state if a transition happened, `None` if the
    /// schedule abstained or already agrees with the stored flag.
    #[instrument(skip(self))]
    pub async fn check_schedule(&self) -> Result<Option<ActivationState>, DomainError> {
        let stored = self
            .store
            .get(&[SettingsKey::Schedule, SettingsKey::Enabled])
            .await?;

        let Some(schedule) = stored.schedule.as_ref() else {
            return Ok(None);
        };

        let now = self.clock.local_time();
        let Some(desired) = schedule.desired_state(now) else {
            return Ok(None);
        };

        if desired == stored.enabled_or_default() {
            debug!(now = %now, enabled = desired, "Schedule agrees with current state");
            return Ok(None);
        }

        let desired = ActivationState::from(desired);
        info!(
            now = %now,
            start = %schedule.start_time,
            end = %schedule.end_time,
            state = %desired,
            "Schedule window changed state"
        );

        self.transition(desired, ActivationSignal::Schedule).await?;
        Ok(Some(desired))
    }

    async fn transition(
        &self,
        desired: ActivationState,
        signal: ActivationSignal,
    ) -> Result<(), DomainError> {
        let enabled = desired.is_enabled();
        self.store.set(SettingsPatch::enabled(enabled)).await?;

        let trigger = match signal {
            ActivationSignal::Presence(_) => SyncTrigger::Presence,
            ActivationSignal::Schedule => SyncTrigger::Schedule,
        };
        if let Err(e) = self.sync.sync_now(trigger).await {
            warn!(signal = %signal, error = %e, "Sync after state change failed");
        }

        let listeners = self.notifier.broadcast(Message::StateChanged { enabled });
        debug!(signal = %signal, listeners, "State change broadcast");

        Ok(())
    }
}
