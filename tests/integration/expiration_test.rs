//! Integration tests for session creation and expiring lookups.

use chrono::TimeDelta;
use tokio::sync::watch;

use sessionkit::{SessionConfig, SessionStore};

use crate::helpers::TestContext;

#[tokio::test]
async fn test_login_then_lookup() {
    let app = TestContext::new(300);
    let session_id = app.login("alice").await;

    assert_eq!(app.whoami(&session_id).await.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let app = TestContext::new(300);
    let alice = app.login("alice").await;
    app.clock.advance(TimeDelta::seconds(200));
    let bob = app.login("bob").await;

    app.clock.advance(TimeDelta::seconds(150));
    assert!(app.whoami(&alice).await.is_none());
    assert_eq!(app.whoami(&bob).await.as_deref(), Some("bob"));
}

#[tokio::test]
async fn test_expiry_boundary() {
    let app = TestContext::new(60);
    let session_id = app.login("alice").await;

    app.clock.advance(TimeDelta::seconds(60) - TimeDelta::milliseconds(1));
    assert_eq!(app.whoami(&session_id).await.as_deref(), Some("alice"));

    app.clock.advance(TimeDelta::milliseconds(2));
    assert!(app.whoami(&session_id).await.is_none());
}

#[tokio::test]
async fn test_expired_session_reads_like_unknown_and_stays_in_table() {
    let app = TestContext::new(5);
    let session_id = app.login("alice").await;
    app.clock.advance(TimeDelta::seconds(6));

    assert_eq!(app.whoami(&session_id).await, app.whoami("never-issued").await);
    assert_eq!(app.store.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_no_expiry_mode_ignores_elapsed_time() {
    let app = TestContext::new(0);
    let session_id = app.login("alice").await;

    app.clock.advance(TimeDelta::days(3650));
    assert_eq!(app.whoami(&session_id).await.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_absent_and_unknown_session_ids() {
    let app = TestContext::new(60);
    app.login("alice").await;

    assert!(app.ctx.sessions().user_id_for_session_id(None).await.is_none());
    assert!(app.whoami("").await.is_none());
    assert!(app.whoami("0b7c0a4e-unknown").await.is_none());
}

#[tokio::test]
async fn test_missing_user_id_creates_nothing() {
    let app = TestContext::new(60);

    assert!(app.ctx.sessions().create_session(None).await.is_none());
    assert!(app.store.is_empty().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_background_cleanup_purges_expired_sessions() {
    let app = TestContext::from_config(&SessionConfig {
        duration_seconds: 10,
        cleanup_interval_seconds: 60,
    });
    let expired = app.login("alice").await;
    app.clock.advance(TimeDelta::seconds(30));
    let live = app.login("bob").await;

    let (cancel_tx, cancel_rx) = watch::channel(false);
    let handle = app.ctx.start_cleanup(cancel_rx).expect("cleanup should start");

    tokio::time::sleep(std::time::Duration::from_secs(61)).await;
    assert_eq!(app.store.len().await.unwrap(), 1);
    assert!(app.whoami(&expired).await.is_none());
    assert_eq!(app.whoami(&live).await.as_deref(), Some("bob"));

    cancel_tx.send(true).unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_cleanup_disabled_by_default() {
    let app = TestContext::new(10);
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    assert!(app.ctx.start_cleanup(cancel_rx).is_none());
}

#[tokio::test]
async fn test_cleanup_not_started_without_expiry() {
    let app = TestContext::from_config(&SessionConfig {
        duration_seconds: 0,
        cleanup_interval_seconds: 60,
    });
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    assert!(app.ctx.start_cleanup(cancel_rx).is_none());
}
