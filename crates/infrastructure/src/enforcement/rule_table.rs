use arc_swap::ArcSwap;
use async_trait::async_trait;
use rerouter_application::ports::EnforcementLayer;
use rerouter_domain::{DomainError, RedirectRule, ResourceType, RuleUpdate};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

/// Upper bound on live rules, mirroring the dynamic-rule quota of
/// declarative request filtering.
pub const MAX_DYNAMIC_RULES: usize = 5000;

/// In-memory dynamic rule table.
///
/// Readers (`evaluate`, `list_rules`) load the current snapshot lock-free.
/// Writers serialize on `write_lock`, validate the update against the
/// snapshot, and publish the result with a single `ArcSwap::store`, so an
/// update is either fully visible or not at all.
pub struct DynamicRuleTable {
    rules: ArcSwap<Vec<RedirectRule>>,
    write_lock: Mutex<()>,
    max_rules: usize,
}

impl DynamicRuleTable {
    pub fn new() -> Self {
        Self::with_capacity_limit(MAX_DYNAMIC_RULES)
    }

    pub fn with_capacity_limit(max_rules: usize) -> Self {
        Self {
            rules: ArcSwap::from_pointee(Vec::new()),
            write_lock: Mutex::new(()),
            max_rules,
        }
    }

    pub fn len(&self) -> usize {
        self.rules.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.load().is_empty()
    }

    pub fn snapshot(&self) -> Arc<Vec<RedirectRule>> {
        self.rules.load_full()
    }

    fn build_next(
        &self,
        current: &[RedirectRule],
        update: RuleUpdate,
    ) -> Result<Vec<RedirectRule>, DomainError> {
        let removed: HashSet<u32> = update.remove_rule_ids.iter().copied().collect();
        let mut next: Vec<RedirectRule> = current
            .iter()
            .filter(|rule| !removed.contains(&rule.id))
            .cloned()
            .collect();

        let mut ids: HashSet<u32> = next.iter().map(|rule| rule.id).collect();
        for rule in &update.add_rules {
            validate_rule(rule)?;
            if !ids.insert(rule.id) {
                return Err(DomainError::EnforcementUpdate(format!(
                    "rule id {} is not unique",
                    rule.id
                )));
            }
        }

        next.extend(update.add_rules);

        if next.len() > self.max_rules {
            return Err(DomainError::EnforcementUpdate(format!(
                "{} rules exceed the limit of {}",
                next.len(),
                self.max_rules
            )));
        }

        Ok(next)
    }
}

impl Default for DynamicRuleTable {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_rule(rule: &RedirectRule) -> Result<(), DomainError> {
    if rule.id == 0 {
        return Err(DomainError::EnforcementUpdate(
            "rule id must be positive".to_string(),
        ));
    }
    if rule.condition.anchored_domain().is_none() {
        return Err(DomainError::EnforcementUpdate(format!(
            "rule {}: unsupported url filter '{}'",
            rule.id, rule.condition.url_filter
        )));
    }
    if rule.condition.resource_types.is_empty() {
        return Err(DomainError::EnforcementUpdate(format!(
            "rule {}: no resource types",
            rule.id
        )));
    }
    let target = url::Url::parse(rule.redirect_url()).map_err(|e| {
        DomainError::EnforcementUpdate(format!(
            "rule {}: invalid redirect url '{}': {e}",
            rule.id,
            rule.redirect_url()
        ))
    })?;
    if !matches!(target.scheme(), "http" | "https") {
        return Err(DomainError::EnforcementUpdate(format!(
            "rule {}: redirect url must be http(s)",
            rule.id
        )));
    }
    Ok(())
}

#[async_trait]
impl EnforcementLayer for DynamicRuleTable {
    async fn list_rules(&self) -> Result<Vec<RedirectRule>, DomainError> {
        Ok(self.rules.load().as_ref().clone())
    }

    async fn apply_update(&self, update: RuleUpdate) -> Result<(), DomainError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| DomainError::EnforcementUpdate("rule table lock poisoned".to_string()))?;

        let current = self.rules.load_full();
        let removed = update.remove_rule_ids.len();
        let added = update.add_rules.len();

        let next = self.build_next(&current, update).map_err(|e| {
            error!(error = %e, "Rule update rejected");
            e
        })?;

        self.rules.store(Arc::new(next));
        debug!(removed, added, live = self.len(), "Rule table updated");
        Ok(())
    }

    fn evaluate(&self, url: &str, resource_type: ResourceType) -> Option<RedirectRule> {
        let rules = self.rules.load();
        rules
            .iter()
            .filter(|rule| rule.condition.matches(url, resource_type))
            .max_by(|a, b| a.priority.cmp(&b.priority).then(b.id.cmp(&a.id)))
            .cloned()
    }
}
