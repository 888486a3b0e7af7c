//! Install, redirect, toggle, presence and schedule against the real
//! rule table and settings store.

#[path = "../common/mod.rs"]
mod common;

use common::start_daemon;
use rerouter_application::ports::SettingsStore;
use rerouter_application::services::SyncTrigger;
use rerouter_application::use_cases::NavigationDecision;
use rerouter_domain::{
    Message, MessageResponse, PresenceState, ResourceType, Schedule, SettingsKey, SettingsPatch,
};

#[tokio::test]
async fn test_install_sync_redirect_and_toggle_off() {
    let daemon = start_daemon(None).await;

    daemon.sync.sync_now(SyncTrigger::Startup).await.unwrap();
    assert_eq!(daemon.rules.len(), 7);

    let decision = daemon
        .navigation
        .execute("https://www.youtube.com/watch?v=1", ResourceType::MainFrame)
        .await;
    let NavigationDecision::Redirect { rule_id, url } = decision else {
        panic!("expected a redirect");
    };
    assert_eq!(rule_id, 7);
    assert!(url.starts_with("https://www."));

    let reply = daemon
        .gateway
        .execute(Message::Toggle { enabled: false })
        .await;
    assert_eq!(reply, Some(MessageResponse::toggled(false)));
    assert!(daemon.rules.is_empty());

    let decision = daemon
        .navigation
        .execute("https://www.youtube.com/", ResourceType::MainFrame)
        .await;
    assert_eq!(decision, NavigationDecision::Allow);

    let stats = daemon.store.get(&[SettingsKey::Stats]).await.unwrap().stats;
    assert_eq!(stats.map(|s| s.redirect_count), Some(1));
}

#[tokio::test]
async fn test_single_site_compiles_to_one_rule() {
    let daemon = start_daemon(None).await;
    daemon
        .store
        .set(SettingsPatch {
            blocked_sites: Some(vec!["example.com".to_string()]),
            destinations: Some(vec!["https://x/".to_string()]),
            ..Default::default()
        })
        .await
        .unwrap();

    let reply = daemon.gateway.execute(Message::Refresh).await;

    assert_eq!(reply, Some(MessageResponse::success()));
    let rules = daemon.rules.snapshot();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].id, 1);
    assert_eq!(rules[0].priority, 1);
    assert_eq!(rules[0].condition.url_filter, "||example.com^");
    assert_eq!(rules[0].redirect_url(), "https://x/");
}

#[tokio::test]
async fn test_repeated_sync_keeps_exactly_one_batch() {
    let daemon = start_daemon(None).await;

    for _ in 0..5 {
        daemon.sync.sync_now(SyncTrigger::Randomize).await.unwrap();
    }

    let rules = daemon.rules.snapshot();
    assert_eq!(rules.len(), 7);
    let ids: Vec<u32> = rules.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=7).collect::<Vec<u32>>());
    assert!(rules
        .iter()
        .all(|r| r.redirect_url() == rules[0].redirect_url()));
}

#[tokio::test]
async fn test_empty_destinations_keep_previous_rules() {
    let daemon = start_daemon(None).await;
    daemon.sync.sync_now(SyncTrigger::Startup).await.unwrap();
    let before = daemon.rules.snapshot();

    daemon
        .store
        .set(SettingsPatch {
            destinations: Some(Vec::new()),
            ..Default::default()
        })
        .await
        .unwrap();
    let reply = daemon.gateway.execute(Message::Refresh).await.unwrap();

    assert!(!reply.is_success());
    assert_eq!(daemon.rules.snapshot(), before);
}

#[tokio::test]
async fn test_presence_drives_protection_and_broadcasts() {
    let daemon = start_daemon(None).await;
    let mut events = daemon.notifier.subscribe();

    daemon
        .activation
        .on_presence_change(PresenceState::Locked)
        .await
        .unwrap();
    assert_eq!(daemon.rules.len(), 7);
    assert_eq!(
        events.recv().await.unwrap(),
        Message::StateChanged { enabled: true }
    );

    daemon
        .activation
        .on_presence_change(PresenceState::Active)
        .await
        .unwrap();
    assert!(daemon.rules.is_empty());
    assert_eq!(
        events.recv().await.unwrap(),
        Message::StateChanged { enabled: false }
    );
}

#[tokio::test]
async fn test_overnight_schedule_window() {
    let daemon = start_daemon(None).await;
    daemon
        .store
        .set(SettingsPatch {
            enabled: Some(false),
            schedule: Some(Schedule::new(
                true,
                "22:00".parse().unwrap(),
                "06:00".parse().unwrap(),
            )),
            ..Default::default()
        })
        .await
        .unwrap();

    daemon.clock.set("23:00");
    assert!(daemon.activation.check_schedule().await.unwrap().is_some());
    assert_eq!(daemon.rules.len(), 7);

    daemon.clock.set("05:59");
    assert!(daemon.activation.check_schedule().await.unwrap().is_none());

    daemon.clock.set("06:00");
    assert!(daemon.activation.check_schedule().await.unwrap().is_some());
    assert!(daemon.rules.is_empty());
}
