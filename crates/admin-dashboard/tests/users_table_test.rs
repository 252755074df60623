use admin_dashboard::api::MockApi;
use admin_dashboard::lifecycle::DashboardSystem;
use admin_dashboard::model::Status;
use admin_dashboard::operations::IdPathStyle;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_empty_users_render_header_only() {
    let mut api = MockApi::new();
    api.expect_get("/users").return_ok(json!({"data": []}));
    let system = DashboardSystem::new(Arc::new(api.clone()), IdPathStyle::default());
    let table = system.users_table();

    table.mount().expect("first mount fetches").await.unwrap();

    assert_eq!(table.render(), "Users\nUSERS ID | USERNAME | EMAIL | CREATED_AT");
    assert_eq!(system.store.state().status, Status::Success);

    drop(table);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_one_user_renders_one_row_without_separator() {
    let mut api = MockApi::new();
    api.expect_get("/users").return_ok(json!({
        "data": [{"id": "1", "username": "a", "email": "a@x.com", "createdAt": "t"}]
    }));
    let system = DashboardSystem::new(Arc::new(api.clone()), IdPathStyle::default());
    let table = system.users_table();

    table.mount().unwrap().await.unwrap();

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].starts_with("1 "));
    assert!(lines[2].contains("a@x.com"));
    assert!(!rendered.ends_with('-'));

    drop(table);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_mount_fetches_once() {
    let mut api = MockApi::new();
    api.expect_get("/users").return_ok(json!({"data": []}));
    let system = DashboardSystem::new(Arc::new(api.clone()), IdPathStyle::default());
    let table = system.users_table();

    let first = table.mount();
    assert!(table.is_mounted());
    assert!(table.mount().is_none());
    first.unwrap().await.unwrap();

    // A second fetch would have hit the mock with no expectation left and panicked
    assert_eq!(api.received().len(), 1);
    api.verify();

    drop(table);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_render_follows_store_updates() {
    let mut api = MockApi::new();
    api.expect_get("/users").return_ok(json!({"data": []}));
    api.expect_get("/users").return_ok(json!({
        "data": [
            {"id": "1", "username": "a", "email": "a@x.com", "createdAt": "t"},
            {"id": "2", "username": "b", "email": "b@x.com", "createdAt": "u"}
        ]
    }));
    let system = DashboardSystem::new(Arc::new(api.clone()), IdPathStyle::default());
    let table = system.users_table();

    table.mount().unwrap().await.unwrap();
    assert_eq!(table.render().lines().count(), 2);

    // Another component refreshes the users; the mounted table picks them up
    system.service.fetch_users(&system.store).await;
    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[3].chars().all(|c| c == '-'));

    drop(table);
    system.shutdown().await.unwrap();
}
