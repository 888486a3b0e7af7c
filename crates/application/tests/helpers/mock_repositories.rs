#![allow(dead_code)]

use async_trait::async_trait;
use rerouter_application::ports::{
    Clock, EnforcementLayer, RemoteListSource, SettingsStore, StateNotifier,
};
use rerouter_application::services::{RuleCompiler, SyncCoordinator, SyncHandle};
use rerouter_application::use_cases::SyncRulesUseCase;
use rerouter_domain::{
    DomainError, Message, RedirectRule, RemoteLists, ResourceType, RuleUpdate, Schedule,
    SettingsKey, SettingsPatch, TimeOfDay,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Mock SettingsStore
// ============================================================================

pub struct MockSettingsStore {
    data: Arc<RwLock<SettingsPatch>>,
    set_count: Arc<AtomicU64>,
    fail_reads: Arc<RwLock<bool>>,
    fail_writes: Arc<RwLock<bool>>,
}

impl MockSettingsStore {
    pub fn new() -> Self {
        Self::with_data(SettingsPatch::default())
    }

    pub fn with_data(data: SettingsPatch) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
            set_count: Arc::new(AtomicU64::new(0)),
            fail_reads: Arc::new(RwLock::new(false)),
            fail_writes: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_lists(enabled: bool, sites: &[&str], destinations: &[&str]) -> Self {
        Self::with_data(SettingsPatch {
            enabled: Some(enabled),
            blocked_sites: Some(sites.iter().map(|s| s.to_string()).collect()),
            destinations: Some(destinations.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        })
    }

    pub async fn snapshot(&self) -> SettingsPatch {
        self.data.read().await.clone()
    }

    pub async fn put(&self, patch: SettingsPatch) {
        self.data.write().await.merge(patch);
    }

    pub fn set_count(&self) -> u64 {
        self.set_count.load(Ordering::Relaxed)
    }

    pub async fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.write().await = fail;
    }

    pub async fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn get(&self, keys: &[SettingsKey]) -> Result<SettingsPatch, DomainError> {
        if *self.fail_reads.read().await {
            return Err(DomainError::Storage("read failed".to_string()));
        }
        let data = self.data.read().await;
        let mut view = SettingsPatch::default();
        for key in keys {
            match key {
                SettingsKey::Enabled => view.enabled = data.enabled,
                SettingsKey::BlockedSites => view.blocked_sites = data.blocked_sites.clone(),
                SettingsKey::Destinations => view.destinations = data.destinations.clone(),
                SettingsKey::Stats => view.stats = data.stats,
                SettingsKey::Schedule => view.schedule = data.schedule.clone(),
            }
        }
        Ok(view)
    }

    async fn set(&self, patch: SettingsPatch) -> Result<(), DomainError> {
        self.set_count.fetch_add(1, Ordering::Relaxed);
        if *self.fail_writes.read().await {
            return Err(DomainError::Storage("write failed".to_string()));
        }
        self.data.write().await.merge(patch);
        Ok(())
    }
}

// ============================================================================
// Mock EnforcementLayer
// ============================================================================

pub struct MockEnforcementLayer {
    rules: Arc<Mutex<Vec<RedirectRule>>>,
    updates: Arc<Mutex<Vec<RuleUpdate>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockEnforcementLayer {
    pub fn new() -> Self {
        Self::with_rules(Vec::new())
    }

    pub fn with_rules(rules: Vec<RedirectRule>) -> Self {
        Self {
            rules: Arc::new(Mutex::new(rules)),
            updates: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn rules(&self) -> Vec<RedirectRule> {
        self.rules.lock().unwrap().clone()
    }

    pub fn rule_set(&self) -> HashSet<RedirectRule> {
        self.rules().into_iter().collect()
    }

    pub fn updates(&self) -> Vec<RuleUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }
}

#[async_trait]
impl EnforcementLayer for MockEnforcementLayer {
    async fn list_rules(&self) -> Result<Vec<RedirectRule>, DomainError> {
        Ok(self.rules())
    }

    async fn apply_update(&self, update: RuleUpdate) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::EnforcementUpdate("rejected".to_string()));
        }
        self.updates.lock().unwrap().push(update.clone());

        let mut rules = self.rules.lock().unwrap();
        rules.retain(|r| !update.remove_rule_ids.contains(&r.id));
        rules.extend(update.add_rules);
        Ok(())
    }

    fn evaluate(&self, url: &str, resource_type: ResourceType) -> Option<RedirectRule> {
        self.rules()
            .into_iter()
            .find(|r| r.condition.matches(url, resource_type))
    }
}

// ============================================================================
// Mock RemoteListSource
// ============================================================================

pub struct MockRemoteListSource {
    response: Mutex<Result<RemoteLists, DomainError>>,
    call_count: AtomicU64,
}

impl MockRemoteListSource {
    pub fn returning(sites: &[&str], destinations: &[&str]) -> Self {
        Self {
            response: Mutex::new(Ok(RemoteLists {
                social_media: sites.iter().map(|s| s.to_string()).collect(),
                search_engines: destinations.iter().map(|s| s.to_string()).collect(),
            })),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Mutex::new(Err(DomainError::RemoteFetch(reason.to_string()))),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RemoteListSource for MockRemoteListSource {
    async fn fetch(&self) -> Result<RemoteLists, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.response.lock().unwrap().clone()
    }
}

// ============================================================================
// Mock StateNotifier / Clock
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<Message>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }
}

impl StateNotifier for RecordingNotifier {
    fn broadcast(&self, message: Message) -> usize {
        self.messages.lock().unwrap().push(message);
        1
    }
}

pub struct FixedClock {
    now: Mutex<TimeOfDay>,
}

impl FixedClock {
    pub fn at(time: &str) -> Self {
        Self {
            now: Mutex::new(time.parse().unwrap()),
        }
    }

    pub fn set(&self, time: &str) {
        *self.now.lock().unwrap() = time.parse().unwrap();
    }
}

impl Clock for FixedClock {
    fn local_time(&self) -> TimeOfDay {
        *self.now.lock().unwrap()
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn schedule(enabled: bool, start: &str, end: &str) -> Schedule {
    Schedule::new(enabled, start.parse().unwrap(), end.parse().unwrap())
}

pub fn make_rules(count: u32) -> Vec<RedirectRule> {
    (1..=count)
        .map(|id| RedirectRule::redirect(id, &format!("old{id}.com"), "https://old.example/"))
        .collect()
}

/// Spawns a coordinator over fresh use-case wiring and returns its handle.
pub fn spawn_sync(
    store: Arc<MockSettingsStore>,
    enforcement: Arc<MockEnforcementLayer>,
) -> SyncHandle {
    let sync_rules = Arc::new(SyncRulesUseCase::new(
        store,
        enforcement,
        Arc::new(RuleCompiler::with_seed(1)),
    ));
    let (coordinator, handle) = SyncCoordinator::new(sync_rules);
    coordinator.spawn();
    handle
}
