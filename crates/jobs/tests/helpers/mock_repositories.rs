#![allow(dead_code)]

use async_trait::async_trait;
use rerouter_application::ports::{
    Clock, EnforcementLayer, PresenceSource, SettingsStore, StateNotifier,
};
use rerouter_application::services::{
    ActivationController, RuleCompiler, SyncCoordinator, SyncHandle,
};
use rerouter_application::use_cases::SyncRulesUseCase;
use rerouter_domain::{
    DomainError, Message, PresenceState, RedirectRule, ResourceType, RuleUpdate, Schedule,
    SettingsKey, SettingsPatch, TimeOfDay,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock SettingsStore
// ============================================================================

#[derive(Default)]
pub struct MockSettingsStore {
    data: Mutex<SettingsPatch>,
}

impl MockSettingsStore {
    pub fn with_data(data: SettingsPatch) -> Self {
        Self {
            data: Mutex::new(data),
        }
    }

    pub fn enabled_with_lists(enabled: bool) -> Self {
        Self::with_data(SettingsPatch {
            enabled: Some(enabled),
            blocked_sites: Some(vec!["a.com".to_string(), "b.com".to_string()]),
            destinations: Some(vec![
                "https://one.example/".to_string(),
                "https://two.example/".to_string(),
            ]),
            ..Default::default()
        })
    }

    pub fn put(&self, patch: SettingsPatch) {
        self.data.lock().unwrap().merge(patch);
    }

    pub fn enabled(&self) -> Option<bool> {
        self.data.lock().unwrap().enabled
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn get(&self, keys: &[SettingsKey]) -> Result<SettingsPatch, DomainError> {
        let data = self.data.lock().unwrap();
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
        self.data.lock().unwrap().merge(patch);
        Ok(())
    }
}

// ============================================================================
// Mock EnforcementLayer
// ============================================================================

#[derive(Default)]
pub struct MockEnforcementLayer {
    rules: Mutex<Vec<RedirectRule>>,
    update_count: Mutex<usize>,
}

impl MockEnforcementLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.lock().unwrap().len()
    }

    pub fn update_count(&self) -> usize {
        *self.update_count.lock().unwrap()
    }
}

#[async_trait]
impl EnforcementLayer for MockEnforcementLayer {
    async fn list_rules(&self) -> Result<Vec<RedirectRule>, DomainError> {
        Ok(self.rules.lock().unwrap().clone())
    }

    async fn apply_update(&self, update: RuleUpdate) -> Result<(), DomainError> {
        *self.update_count.lock().unwrap() += 1;
        let mut rules = self.rules.lock().unwrap();
        rules.retain(|r| !update.remove_rule_ids.contains(&r.id));
        rules.extend(update.add_rules);
        Ok(())
    }

    fn evaluate(&self, url: &str, resource_type: ResourceType) -> Option<RedirectRule> {
        self.rules
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.condition.matches(url, resource_type))
            .cloned()
    }
}

// ============================================================================
// Mock StateNotifier / Clock / PresenceSource
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<Message>>,
}

impl RecordingNotifier {
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

pub struct FixedClock(pub TimeOfDay);

impl FixedClock {
    pub fn at(time: &str) -> Self {
        Self(time.parse().unwrap())
    }
}

impl Clock for FixedClock {
    fn local_time(&self) -> TimeOfDay {
        self.0
    }
}

/// Yields the scripted transitions one poll at a time, then nothing.
#[derive(Default)]
pub struct ScriptedPresence {
    script: Mutex<VecDeque<Option<PresenceState>>>,
    polls: Mutex<usize>,
}

impl ScriptedPresence {
    pub fn new(script: Vec<Option<PresenceState>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            polls: Mutex::new(0),
        }
    }

    pub fn poll_count(&self) -> usize {
        *self.polls.lock().unwrap()
    }
}

impl PresenceSource for ScriptedPresence {
    fn poll(&self) -> Option<PresenceState> {
        *self.polls.lock().unwrap() += 1;
        self.script.lock().unwrap().pop_front().flatten()
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn schedule(enabled: bool, start: &str, end: &str) -> Schedule {
    Schedule::new(enabled, start.parse().unwrap(), end.parse().unwrap())
}

pub struct Harness {
    pub store: Arc<MockSettingsStore>,
    pub enforcement: Arc<MockEnforcementLayer>,
    pub notifier: Arc<RecordingNotifier>,
    pub sync: SyncHandle,
}

impl Harness {
    pub fn new(store: MockSettingsStore) -> Self {
        let store = Arc::new(store);
        let enforcement = Arc::new(MockEnforcementLayer::new());
        let sync_rules = Arc::new(SyncRulesUseCase::new(
            store.clone(),
            enforcement.clone(),
            Arc::new(RuleCompiler::with_seed(7)),
        ));
        let (coordinator, sync) = SyncCoordinator::new(sync_rules);
        coordinator.spawn();

        Self {
            store,
            enforcement,
            notifier: Arc::new(RecordingNotifier::default()),
            sync,
        }
    }

    pub fn controller(&self, clock: FixedClock) -> Arc<ActivationController> {
        Arc::new(ActivationController::new(
            self.store.clone(),
            self.sync.clone(),
            self.notifier.clone(),
            Arc::new(clock),
        ))
    }
}
