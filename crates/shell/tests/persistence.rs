//! Session persistence across process restarts, on a real session file.

use std::sync::Arc;

use serde_json::json;

use rootmanage_client::RecordingClient;
use rootmanage_core::FileStorage;
use rootmanage_shell::{AppContext, ShellConfig, commands};

fn file_context(path: &std::path::Path, client: Arc<RecordingClient>) -> AppContext {
    let storage = Arc::new(FileStorage::open(path).unwrap());
    AppContext::from_parts(storage, client)
}

#[tokio::test]
async fn login_survives_restart_and_logout_does_not() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("session.json");

    let client = Arc::new(RecordingClient::new());
    client.respond_with(json!({
        "userId": 7,
        "username": "admin",
        "token": "tok-7",
        "modules": [{ "permissionKey": "contracts", "children": [] }]
    }));

    let first = file_context(&path, client.clone());
    commands::login(&first, "admin", "pw").await.unwrap();
    drop(first);

    let second = file_context(&path, client.clone());
    assert!(second.auth.is_authenticated());
    assert_eq!(second.auth.token(), "tok-7");
    assert_eq!(commands::navigate(&second, "/modules").unwrap().lines().next(), Some("/modules"));

    commands::logout(&second);
    drop(second);

    let third = file_context(&path, client);
    assert!(!third.auth.is_authenticated());
    assert!(commands::navigate(&third, "/modules").unwrap().contains("login required"));
}

#[test]
fn build_opens_a_fresh_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = ShellConfig {
        api_url: "http://127.0.0.1:9/api".to_string(),
        state_file: dir.path().join("session.json"),
        http_timeout: None,
    };

    let ctx = AppContext::build(&config).unwrap();

    assert!(!ctx.auth.is_authenticated());
    assert!(ctx.router.current().is_none());
}
