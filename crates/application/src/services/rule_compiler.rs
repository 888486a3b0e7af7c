use rerouter_domain::{DomainError, RedirectRule};
use std::sync::Mutex;
use tracing::debug;

/// Turns the site and destination lists into one batch of redirect rules.
///
/// A single destination is drawn per batch and every rule redirects to it.
pub struct RuleCompiler {
    rng: Mutex<fastrand::Rng>,
}

impl RuleCompiler {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Deterministic destination picks.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    /// Rule ids are the 1-based positions in `blocked_sites`.
    ///
    /// # Errors
    ///
    /// * `DomainError::ConfigValidation` - If `destinations` is empty
    pub fn compile(
        &self,
        blocked_sites: &[String],
        destinations: &[String],
    ) -> Result<Vec<RedirectRule>, DomainError> {
        if destinations.is_empty() {
            return Err(DomainError::ConfigValidation(
                "destination list is empty".to_string(),
            ));
        }

        if blocked_sites.is_empty() {
            return Ok(Vec::new());
        }

        let destination = &destinations[self.pick(destinations.len())];
        debug!(destination = %destination, sites = blocked_sites.len(), "Destination selected");

        Ok(blocked_sites
            .iter()
            .enumerate()
            .map(|(index, site)| RedirectRule::redirect(index as u32 + 1, site, destination))
            .collect())
    }

    fn pick(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.usize(..len),
            Err(poisoned) => poisoned.into_inner().usize(..len),
        }
    }
}

impl Default for RuleCompiler {
    fn default() -> Self {
        Self::new()
    }
}
