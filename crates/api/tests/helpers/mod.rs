#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rerouter_api::{create_api_routes, AppState};
use rerouter_application::ports::SettingsStore;
use rerouter_application::services::{
    ActivationController, RuleCompiler, ScheduleKick, SyncCoordinator, SyncHandle,
};
use rerouter_application::use_cases::{
    GetSettingsUseCase, HandleMessageUseCase, InitializeSettingsUseCase, ResolveNavigationUseCase,
    SyncRulesUseCase, UpdateSettingsUseCase,
};
use rerouter_infrastructure::database::create_in_memory_pool;
use rerouter_infrastructure::enforcement::DynamicRuleTable;
use rerouter_infrastructure::notifier::BroadcastNotifier;
use rerouter_infrastructure::repositories::SqliteSettingsStore;
use rerouter_infrastructure::system::{IdleDetector, SystemClock};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<SqliteSettingsStore>,
    pub rules: Arc<DynamicRuleTable>,
    pub notifier: BroadcastNotifier,
    pub sync: SyncHandle,
}

pub async fn test_app() -> TestApp {
    let pool = create_in_memory_pool().await.unwrap();
    let store = Arc::new(SqliteSettingsStore::new(pool));
    let rules = Arc::new(DynamicRuleTable::new());
    let notifier = BroadcastNotifier::new(16);

    InitializeSettingsUseCase::new(store.clone())
        .execute()
        .await
        .unwrap();

    let sync_rules = Arc::new(SyncRulesUseCase::new(
        store.clone(),
        rules.clone(),
        Arc::new(RuleCompiler::with_seed(3)),
    ));
    let (coordinator, sync) = SyncCoordinator::new(sync_rules);
    coordinator.spawn();

    let activation = Arc::new(ActivationController::new(
        store.clone(),
        sync.clone(),
        Arc::new(notifier.clone()),
        Arc::new(SystemClock),
    ));

    let state = AppState {
        handle_message: Arc::new(HandleMessageUseCase::new(store.clone(), sync.clone())),
        get_settings: Arc::new(GetSettingsUseCase::new(store.clone())),
        update_settings: Arc::new(UpdateSettingsUseCase::new(
            store.clone(),
            sync.clone(),
            ScheduleKick::new(),
        )),
        resolve_navigation: Arc::new(ResolveNavigationUseCase::new(rules.clone(), store.clone())),
        activation,
        enforcement: rules.clone(),
        notifier: notifier.clone(),
        idle_detector: Arc::new(IdleDetector::new(Duration::from_secs(60))),
    };

    TestApp {
        router: create_api_routes(state),
        store,
        rules,
        notifier,
        sync,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post(&self, uri: &str, json: Value) -> (StatusCode, Value) {
        self.send(json_request("POST", uri, json)).await
    }

    pub async fn put(&self, uri: &str, json: Value) -> (StatusCode, Value) {
        self.send(json_request("PUT", uri, json)).await
    }

    pub async fn stored_enabled(&self) -> Option<bool> {
        self.store
            .get(&[rerouter_domain::SettingsKey::Enabled])
            .await
            .unwrap()
            .enabled
    }
}

pub fn json_request(method: &str, uri: &str, json: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}
