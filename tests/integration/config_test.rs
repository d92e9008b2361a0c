//! Integration tests for configuration-driven session behavior.

use chrono::TimeDelta;

use sessionkit::{LoggingConfig, SessionContext, logging};

use crate::helpers::TestContext;

#[tokio::test]
async fn test_session_duration_variable_enables_expiry() {
    let app = TestContext::from_env(&[("SESSION_DURATION", "30")]);
    assert_eq!(app.ctx.config().duration_seconds, 30);

    let session_id = app.login("alice").await;
    app.clock.advance(TimeDelta::seconds(31));
    assert!(app.whoami(&session_id).await.is_none());
}

#[tokio::test]
async fn test_non_numeric_session_duration_never_expires() {
    let app = TestContext::from_env(&[("SESSION_DURATION", "thirty")]);
    assert_eq!(app.ctx.config().duration_seconds, 0);
    assert!(!app.ctx.sessions().policy().expires());

    let session_id = app.login("alice").await;
    app.clock.advance(TimeDelta::days(365));
    assert_eq!(app.whoami(&session_id).await.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_missing_session_duration_never_expires() {
    let app = TestContext::from_env(&[]);
    assert_eq!(app.ctx.config().duration_seconds, 0);

    let session_id = app.login("alice").await;
    app.clock.advance(TimeDelta::days(365));
    assert_eq!(app.whoami(&session_id).await.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_negative_session_duration_never_expires() {
    let app = TestContext::from_env(&[("SESSION_DURATION", "-60")]);
    assert!(!app.ctx.sessions().policy().expires());
}

#[tokio::test]
async fn test_context_from_process_configuration() {
    let ctx = SessionContext::load();
    let session_id = ctx.sessions().create_session(Some("alice")).await.unwrap();

    assert_eq!(
        ctx.sessions()
            .user_id_for_session_id(Some(session_id.as_str()))
            .await
            .as_deref(),
        Some("alice")
    );
}

#[test]
fn test_logging_init_is_idempotent() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: "json".to_string(),
    };

    assert!(logging::init(&config));
    assert!(!logging::init(&config));
}
