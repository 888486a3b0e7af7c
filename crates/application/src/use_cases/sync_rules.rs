use crate::ports::{EnforcementLayer, RemoteListSource, SettingsStore};
use crate::services::RuleCompiler;
use rerouter_domain::defaults::{default_blocked_sites, default_destinations};
use rerouter_domain::{DomainError, RuleUpdate, SettingsKey, SettingsPatch};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Protection is off; every live rule was removed.
    Cleared { removed: usize },
    /// The live table was replaced by a freshly compiled batch.
    Applied {
        removed: usize,
        added: usize,
        destination: Option<String>,
    },
}

/// Use case: reconcile the live rule table with the stored settings.
///
/// Disabled, the table is emptied. Enabled, the lists are compiled and the
/// whole table is swapped in a single enforcement update. A compile failure
/// leaves the live table as it was.
pub struct SyncRulesUseCase {
    store: Arc<dyn SettingsStore>,
    enforcement: Arc<dyn EnforcementLayer>,
    compiler: Arc<RuleCompiler>,
    remote: Option<Arc<dyn RemoteListSource>>,
}

impl SyncRulesUseCase {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        enforcement: Arc<dyn EnforcementLayer>,
        compiler: Arc<RuleCompiler>,
    ) -> Self {
        Self {
            store,
            enforcement,
            compiler,
            remote: None,
        }
    }

    pub fn with_remote_source(mut self, remote: Arc<dyn RemoteListSource>) -> Self {
        self.remote = Some(remote);
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<SyncOutcome, DomainError> {
        let enabled = self
            .store
            .get(&[SettingsKey::Enabled])
            .await?
            .enabled_or_default();

        if !enabled {
            let old_ids = self.live_rule_ids().await?;
            let removed = old_ids.len();
            self.enforcement
                .apply_update(RuleUpdate::clear(old_ids))
                .await?;
            info!(removed, "Protection disabled, rules removed");
            return Ok(SyncOutcome::Cleared { removed });
        }

        let (sites, destinations, fetched) = self.load_lists().await?;

        let rules = match self.compiler.compile(&sites, &destinations) {
            Ok(rules) => rules,
            Err(e) => {
                warn!(error = %e, "Rule compilation aborted, live rules left untouched");
                return Err(e);
            }
        };

        let destination = rules.first().map(|r| r.redirect_url().to_string());
        let added = rules.len();

        let old_ids = self.live_rule_ids().await?;
        let removed = old_ids.len();
        self.enforcement
            .apply_update(RuleUpdate::replace(old_ids, rules))
            .await?;

        // Remote lists replace the stored ones only once they are live.
        if fetched {
            self.store
                .set(SettingsPatch {
                    blocked_sites: Some(sites),
                    destinations: Some(destinations),
                    ..Default::default()
                })
                .await?;
        }

        info!(
            removed,
            added,
            destination = destination.as_deref().unwrap_or("-"),
            "Redirect rules applied"
        );

        Ok(SyncOutcome::Applied {
            removed,
            added,
            destination,
        })
    }

    async fn live_rule_ids(&self) -> Result<Vec<u32>, DomainError> {
        Ok(self
            .enforcement
            .list_rules()
            .await?
            .into_iter()
            .map(|rule| rule.id)
            .collect())
    }

    /// Returns the lists to compile and whether they came from the remote
    /// source.
    async fn load_lists(&self) -> Result<(Vec<String>, Vec<String>, bool), DomainError> {
        if let Some(remote) = &self.remote {
            let lists = remote.fetch().await?;
            return Ok((lists.social_media, lists.search_engines, true));
        }

        let stored = self
            .store
            .get(&[SettingsKey::BlockedSites, SettingsKey::Destinations])
            .await?;

        Ok((
            stored.blocked_sites.unwrap_or_else(default_blocked_sites),
            stored.destinations.unwrap_or_else(default_destinations),
            false,
        ))
    }
}
