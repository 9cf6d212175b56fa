//! Integration tests for the one-shot member fetch
//!
//! Serves member JSON from a local axum server or a temp file and checks that
//! both succeed and fail the way the UI expects.

use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use roster::data::SourceError;
use roster::ui::AppEvent;
use roster::{App, Config, MemberSource};

use super::common::members::{members_json, numbered_members};

/// Serve `router` on an ephemeral port and return its base URL
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_load_from_url() {
    let body = members_json(&numbered_members(12));
    let base = serve(Router::new().route(
        "/members.json",
        get(move || {
            let body = body.clone();
            async move { body }
        }),
    ))
    .await;

    let source = MemberSource::parse(&format!("{}/members.json", base));
    let members = source
        .load(Duration::from_secs(5))
        .await
        .expect("members load");

    assert_eq!(members.len(), 12);
    assert_eq!(members[0].name, "Member 01");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let base = serve(Router::new().route(
        "/members.json",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    ))
    .await;

    let err = MemberSource::parse(&format!("{}/members.json", base))
        .load(Duration::from_secs(5))
        .await
        .unwrap_err();

    match err {
        SourceError::Status { status, .. } => assert_eq!(status, 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_source_times_out() {
    let base = serve(Router::new().route(
        "/members.json",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            "[]"
        }),
    ))
    .await;

    let err = MemberSource::parse(&format!("{}/members.json", base))
        .load(Duration::from_millis(100))
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Http(_)));
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "name": "Ann", "email": "a@x.com", "role": "Admin"}]"#,
    )
    .unwrap();

    let members = MemberSource::File(path)
        .load(Duration::from_secs(1))
        .await
        .unwrap();

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id.as_str(), "1");
}

#[tokio::test]
async fn test_app_fills_table_after_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.json");
    std::fs::write(&path, members_json(&numbered_members(25))).unwrap();

    let mut app = App::new(Config::default().with_source(MemberSource::File(path)));
    app.spawn_load();
    assert!(app.is_loading());

    let event = app.next_event().await.expect("load event");
    assert!(matches!(event, AppEvent::MembersLoaded(_)));
    app.handle_app_event(event);

    assert!(!app.is_loading());
    assert_eq!(app.table().store().len(), 25);
    assert_eq!(app.table().total_pages(), 3);
}

#[tokio::test]
async fn test_app_stays_empty_when_load_fails() {
    let mut app = App::new(
        Config::default().with_source(MemberSource::parse("/no/such/dir/members.json")),
    );
    app.spawn_load();

    let event = app.next_event().await.expect("load event");
    assert!(matches!(event, AppEvent::LoadFailed(_)));
    app.handle_app_event(event);

    assert!(!app.is_loading());
    assert!(app.table().store().is_empty());
    assert!(app
        .status()
        .is_some_and(|s| s.starts_with("Could not load members")));
}
