use rerouter_api::AppState;
use rerouter_application::ports::{EnforcementLayer, RemoteListSource, SettingsStore};
use rerouter_application::services::{
    ActivationController, RuleCompiler, ScheduleKick, SyncCoordinator, SyncHandle,
};
use rerouter_application::use_cases::{
    GetSettingsUseCase, HandleMessageUseCase, InitializeSettingsUseCase, ResolveNavigationUseCase,
    SyncRulesUseCase, UpdateSettingsUseCase,
};
use rerouter_domain::Config;
use rerouter_infrastructure::enforcement::DynamicRuleTable;
use rerouter_infrastructure::notifier::BroadcastNotifier;
use rerouter_infrastructure::remote::HttpRemoteListSource;
use rerouter_infrastructure::repositories::SqliteSettingsStore;
use rerouter_infrastructure::system::{IdleDetector, SystemClock};
use rerouter_jobs::{JobRunner, PresenceWatchJob, RandomizeJob, ScheduleCheckJob};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Every long-lived component, wired once at startup.
pub struct Services {
    pub store: Arc<dyn SettingsStore>,
    pub enforcement: Arc<dyn EnforcementLayer>,
    pub notifier: BroadcastNotifier,
    pub idle_detector: Arc<IdleDetector>,
    pub schedule_kick: ScheduleKick,
    pub sync: SyncHandle,
    pub activation: Arc<ActivationController>,
    pub initialize_settings: InitializeSettingsUseCase,
}

impl Services {
    pub fn build(config: &Config, pool: SqlitePool) -> anyhow::Result<Self> {
        let store: Arc<dyn SettingsStore> = Arc::new(SqliteSettingsStore::new(pool));
        let enforcement: Arc<dyn EnforcementLayer> = Arc::new(DynamicRuleTable::new());
        let notifier = BroadcastNotifier::default();
        let idle_detector = Arc::new(IdleDetector::new(Duration::from_secs(
            config.scheduler.idle_threshold_secs,
        )));

        let mut sync_rules =
            SyncRulesUseCase::new(store.clone(), enforcement.clone(), Arc::new(RuleCompiler::new()));
        if config.remote.is_enabled() {
            let remote: Arc<dyn RemoteListSource> = Arc::new(HttpRemoteListSource::new(
                config.remote.url.trim(),
                Duration::from_secs(config.remote.timeout_secs),
            )?);
            info!(url = %config.remote.url, "Remote list source enabled");
            sync_rules = sync_rules.with_remote_source(remote);
        }

        let (coordinator, sync) = SyncCoordinator::new(Arc::new(sync_rules));
        coordinator.spawn();

        let activation = Arc::new(ActivationController::new(
            store.clone(),
            sync.clone(),
            Arc::new(notifier.clone()),
            Arc::new(SystemClock),
        ));

        Ok(Self {
            initialize_settings: InitializeSettingsUseCase::new(store.clone()),
            store,
            enforcement,
            notifier,
            idle_detector,
            schedule_kick: ScheduleKick::new(),
            sync,
            activation,
        })
    }

    pub fn job_runner(&self, config: &Config, shutdown: CancellationToken) -> JobRunner {
        let scheduler = &config.scheduler;

        JobRunner::new()
            .with_randomize(
                RandomizeJob::new(self.sync.clone())
                    .with_interval(scheduler.randomize_interval_secs)
                    .with_cancellation(shutdown.clone()),
            )
            .with_schedule_check(
                ScheduleCheckJob::new(self.activation.clone(), self.schedule_kick.clone())
                    .with_interval(scheduler.schedule_check_interval_secs)
                    .with_cancellation(shutdown.clone()),
            )
            .with_presence_watch(
                PresenceWatchJob::new(self.idle_detector.clone(), self.activation.clone())
                    .with_interval(scheduler.presence_poll_interval_secs)
                    .with_cancellation(shutdown),
            )
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            handle_message: Arc::new(HandleMessageUseCase::new(
                self.store.clone(),
                self.sync.clone(),
            )),
            get_settings: Arc::new(GetSettingsUseCase::new(self.store.clone())),
            update_settings: Arc::new(UpdateSettingsUseCase::new(
                self.store.clone(),
                self.sync.clone(),
                self.schedule_kick.clone(),
            )),
            resolve_navigation: Arc::new(ResolveNavigationUseCase::new(
                self.enforcement.clone(),
                self.store.clone(),
            )),
            activation: self.activation.clone(),
            enforcement: self.enforcement.clone(),
            notifier: self.notifier.clone(),
            idle_detector: self.idle_detector.clone(),
        }
    }
}
