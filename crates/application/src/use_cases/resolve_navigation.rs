use crate::ports::{EnforcementLayer, SettingsStore};
use rerouter_domain::{DomainError, ResourceType, SettingsKey, SettingsPatch};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect { rule_id: u32, url: String },
}

/// Use case: evaluate a navigation against the live rules and count
/// redirects in `stats.redirectCount`.
pub struct ResolveNavigationUseCase {
    enforcement: Arc<dyn EnforcementLayer>,
    store: Arc<dyn SettingsStore>,
}

impl ResolveNavigationUseCase {
    pub fn new(enforcement: Arc<dyn EnforcementLayer>, store: Arc<dyn SettingsStore>) -> Self {
        Self { enforcement, store }
    }

    pub async fn execute(&self, url: &str, resource_type: ResourceType) -> NavigationDecision {
        let Some(rule) = self.enforcement.evaluate(url, resource_type) else {
            return NavigationDecision::Allow;
        };

        debug!(rule_id = rule.id, url, target = rule.redirect_url(), "Navigation redirected");

        if let Err(e) = self.record_redirect().await {
            warn!(error = %e, "Failed to update redirect counter");
        }

        NavigationDecision::Redirect {
            rule_id: rule.id,
            url: rule.redirect_url().to_string(),
        }
    }

    async fn record_redirect(&self) -> Result<(), DomainError> {
        let mut stats = self
            .store
            .get(&[SettingsKey::Stats])
            .await?
            .stats
            .unwrap_or_default();
        stats.redirect_count = stats.redirect_count.saturating_add(1);

        self.store
            .set(SettingsPatch {
                stats: Some(stats),
                ..Default::default()
            })
            .await
    }
}
