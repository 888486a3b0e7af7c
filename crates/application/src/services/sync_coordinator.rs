use crate::use_cases::{SyncOutcome, SyncRulesUseCase};
use rerouter_domain::DomainError;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

type SyncResult = Result<SyncOutcome, DomainError>;

/// What asked for a sync. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTrigger {
    Startup,
    Randomize,
    Presence,
    Schedule,
    Toggle,
    Refresh,
    SettingsChanged,
}

impl fmt::Display for SyncTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncTrigger::Startup => "startup",
            SyncTrigger::Randomize => "randomize",
            SyncTrigger::Presence => "presence",
            SyncTrigger::Schedule => "schedule",
            SyncTrigger::Toggle => "toggle",
            SyncTrigger::Refresh => "refresh",
            SyncTrigger::SettingsChanged => "settings",
        };
        f.write_str(name)
    }
}

struct SyncRequest {
    trigger: SyncTrigger,
    reply: Option<oneshot::Sender<SyncResult>>,
}

/// Cloneable entry point used by every trigger.
#[derive(Clone)]
pub struct SyncHandle {
    tx: mpsc::UnboundedSender<SyncRequest>,
}

impl SyncHandle {
    /// Marks that a sync is needed and returns immediately.
    ///
    /// Returns `false` if the coordinator has stopped.
    pub fn request(&self, trigger: SyncTrigger) -> bool {
        self.tx.send(SyncRequest { trigger, reply: None }).is_ok()
    }

    /// Waits for the result of a sync that starts after this call.
    pub async fn sync_now(&self, trigger: SyncTrigger) -> SyncResult {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(SyncRequest {
                trigger,
                reply: Some(reply_tx),
            })
            .map_err(|_| DomainError::SyncUnavailable)?;

        reply_rx.await.map_err(|_| DomainError::SyncUnavailable)?
    }
}

/// Single task that runs every rule sync.
///
/// Requests are queued on a channel; whatever piled up while a sync was
/// running is coalesced into one follow-up pass, and every waiter of that
/// pass receives its result. Two syncs never run at the same time.
pub struct SyncCoordinator {
    sync_rules: Arc<SyncRulesUseCase>,
    rx: mpsc::UnboundedReceiver<SyncRequest>,
}

impl SyncCoordinator {
    pub fn new(sync_rules: Arc<SyncRulesUseCase>) -> (Self, SyncHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { sync_rules, rx }, SyncHandle { tx })
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Drains requests until every `SyncHandle` is dropped.
    pub async fn run(mut self) {
        info!("Rule sync coordinator started");

        while let Some(first) = self.rx.recv().await {
            let mut triggers = vec![first.trigger];
            let mut waiters: Vec<oneshot::Sender<SyncResult>> = first.reply.into_iter().collect();

            while let Ok(next) = self.rx.try_recv() {
                triggers.push(next.trigger);
                waiters.extend(next.reply);
            }

            if triggers.len() > 1 {
                debug!(coalesced = triggers.len(), "Coalesced pending sync requests");
            }

            let result = self.sync_rules.execute().await;
            match &result {
                Ok(outcome) => {
                    debug!(trigger = %triggers[0], outcome = ?outcome, "Rule sync finished")
                }
                Err(e) => error!(trigger = %triggers[0], error = %e, "Rule sync failed"),
            }

            for waiter in waiters {
                let _ = waiter.send(result.clone());
            }
        }

        info!("Rule sync coordinator stopped");
    }
}
