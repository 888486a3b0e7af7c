//! Sync against an HTTP list source served from a local listener.

#[path = "../common/mod.rs"]
mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use common::start_daemon;
use rerouter_application::ports::{RemoteListSource, SettingsStore};
use rerouter_application::services::SyncTrigger;
use rerouter_domain::{DomainError, SettingsKey};
use rerouter_infrastructure::remote::HttpRemoteListSource;
use std::sync::Arc;
use std::time::Duration;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/lists")
}

fn remote(url: String) -> Arc<dyn RemoteListSource> {
    Arc::new(HttpRemoteListSource::new(url, Duration::from_secs(5)).unwrap())
}

#[tokio::test]
async fn test_remote_lists_are_compiled_and_persisted() {
    let url = serve(Router::new().route(
        "/lists",
        get(|| async {
            r#"{"social_media":["news.example","chat.example"],"search_engines":["https://only.example/"]}"#
        }),
    ))
    .await;
    let daemon = start_daemon(Some(remote(url))).await;

    daemon.sync.sync_now(SyncTrigger::Refresh).await.unwrap();

    let rules = daemon.rules.snapshot();
    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|r| r.redirect_url() == "https://only.example/"));

    let stored = daemon
        .store
        .get(&[SettingsKey::BlockedSites, SettingsKey::Destinations])
        .await
        .unwrap();
    assert_eq!(
        stored.blocked_sites,
        Some(vec!["news.example".to_string(), "chat.example".to_string()])
    );
    assert_eq!(
        stored.destinations,
        Some(vec!["https://only.example/".to_string()])
    );
}

#[tokio::test]
async fn test_remote_failure_leaves_settings_and_rules_alone() {
    let url = serve(Router::new().route(
        "/lists",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    ))
    .await;
    let daemon = start_daemon(Some(remote(url))).await;
    let before = daemon.store.get(&SettingsKey::ALL).await.unwrap();

    let result = daemon.sync.sync_now(SyncTrigger::Refresh).await;

    assert!(matches!(result, Err(DomainError::RemoteFetch(_))));
    assert!(daemon.rules.is_empty());
    assert_eq!(daemon.store.get(&SettingsKey::ALL).await.unwrap(), before);
}

#[tokio::test]
async fn test_malformed_remote_destinations_are_not_stored() {
    let url = serve(Router::new().route(
        "/lists",
        get(|| async { r#"{"social_media":["news.example"],"search_engines":["not a url"]}"# }),
    ))
    .await;
    let daemon = start_daemon(Some(remote(url))).await;
    let before = daemon.store.get(&SettingsKey::ALL).await.unwrap();

    let result = daemon.sync.sync_now(SyncTrigger::Refresh).await;

    assert!(result.is_err());
    assert!(daemon.rules.is_empty());
    assert_eq!(daemon.store.get(&SettingsKey::ALL).await.unwrap(), before);
}
