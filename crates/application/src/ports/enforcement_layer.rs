use async_trait::async_trait;
use rerouter_domain::{DomainError, RedirectRule, ResourceType, RuleUpdate};

/// The declarative rule table that redirects navigations.
///
/// Only the rule synchronizer writes to it. `apply_update` is atomic per
/// call: its removals and additions are applied together or not at all.
#[async_trait]
pub trait EnforcementLayer: Send + Sync {
    async fn list_rules(&self) -> Result<Vec<RedirectRule>, DomainError>;

    async fn apply_update(&self, update: RuleUpdate) -> Result<(), DomainError>;

    /// Returns the rule that redirects `url`, if any. Synchronous, in-memory.
    fn evaluate(&self, url: &str, resource_type: ResourceType) -> Option<RedirectRule>;
}
