/*
[INPUT]:  Mock backend responses
[OUTPUT]: Test results for the controller request protocols
[POS]:    Integration tests - controller against a live HTTP boundary
[UPDATE]: When reload sequencing or mutation protocols change
*/

use std::time::Duration;

use serde_json::{Value, json};
use tokio::sync::mpsc;
use tokio::time::timeout;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskservice_adapter::{TaskServiceClient, TaskStatus};
use taskservice_console::app::form::TaskForm;
use taskservice_console::{ActiveModal, AppEvent, AppState};

fn task_json(id: &str, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "url": "https://boards.example/listings",
        "site_type": "news",
        "status": status,
        "criteria": {},
        "created_at": "2026-03-05T12:00:00Z",
        "updated_at": "2026-03-05T12:00:00Z"
    })
}

fn page_json(items: Vec<Value>, total: u64) -> Value {
    json!({
        "items": items,
        "total": total,
        "limit": 50,
        "offset": 0
    })
}

fn json_response(status: u16, body: &Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json")
}

async fn test_app(server: &MockServer) -> (AppState, mpsc::UnboundedReceiver<AppEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let client = TaskServiceClient::new(&server.uri()).expect("client");
    (AppState::new(client, tx), rx)
}

async fn next_event(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("an event within the timeout")
        .expect("event channel open")
}

fn preloaded_task(app: &mut AppState, id: &str, name: &str, status: TaskStatus) {
    app.tasks = vec![taskservice_adapter::Task {
        id: id.to_string(),
        name: name.to_string(),
        url: "https://boards.example/listings".to_string(),
        site_type: taskservice_adapter::SiteType::News,
        status,
        criteria: json!({}),
        created_at: "2026-03-05T12:00:00Z".to_string(),
        updated_at: "2026-03-05T12:00:00Z".to_string(),
    }];
    app.table_state.select(Some(0));
}

#[tokio::test]
async fn test_initial_reload_populates_the_table() {
    let server = MockServer::start().await;
    let body = page_json(
        vec![
            task_json("a", "news crawl", "running"),
            task_json("b", "shop watch", "created"),
        ],
        2,
    );
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "0"))
        .respond_with(json_response(200, &body))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server).await;
    app.request_reload();
    assert!(app.loading);

    let event = next_event(&mut rx).await;
    app.handle_event(event);

    assert!(!app.loading);
    assert_eq!(app.error, None);
    assert_eq!(app.tasks.len(), 2);
    assert_eq!(app.total, 2);
    assert_eq!(app.table_state.selected(), Some(0));
}

#[tokio::test]
async fn test_backend_error_body_reaches_the_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(json_response(500, &json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server).await;
    app.request_reload();
    let event = next_event(&mut rx).await;
    app.handle_event(event);

    assert_eq!(app.error.as_deref(), Some("boom"));
    assert!(!app.loading);
}

#[tokio::test]
async fn test_create_success_resets_the_form_and_reloads_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(json!({
            "name": "watcher",
            "url": "https://example.com",
            "site_type": "other",
            "criteria": {}
        })))
        .respond_with(json_response(201, &task_json("n1", "watcher", "created")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(json_response(
            200,
            &page_json(vec![task_json("n1", "watcher", "created")], 1),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server).await;
    app.open_create();
    app.create_form.name = "watcher".to_string();
    app.create_form.url = "https://example.com".to_string();
    app.submit_create();

    let created = next_event(&mut rx).await;
    assert!(matches!(
        &created,
        AppEvent::CreateFinished { result: Ok(_) }
    ));
    app.handle_event(created);

    assert_eq!(app.create_form, TaskForm::new());
    assert!(app.modal.is_none());
    assert!(app.loading, "the authoritative reload must be in flight");

    let reloaded = next_event(&mut rx).await;
    app.handle_event(reloaded);
    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.tasks[0].id, "n1");
    assert!(!app.loading);
}

#[tokio::test]
async fn test_create_validation_failure_sends_nothing() {
    let server = MockServer::start().await;

    let (mut app, _rx) = test_app(&server).await;
    app.open_create();
    app.create_form.url = "https://example.com".to_string();
    app.submit_create();

    assert_eq!(app.error.as_deref(), Some("Name is required"));
    assert!(matches!(app.modal, Some(ActiveModal::Create)));

    app.create_form.name = "watcher".to_string();
    app.create_form.criteria_text = "{broken".to_string();
    app.submit_create();
    assert_eq!(app.error.as_deref(), Some("Criteria must be valid JSON"));

    let requests = server.received_requests().await.expect("request recording");
    assert!(
        requests.is_empty(),
        "local validation failures must not hit the backend"
    );
}

#[tokio::test]
async fn test_rejected_delete_keeps_the_row_and_shows_the_reason() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/a"))
        .respond_with(json_response(404, &json!({"detail": "task not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server).await;
    preloaded_task(&mut app, "a", "doomed", TaskStatus::Paused);

    app.open_confirm_delete();
    app.confirm_delete();
    assert!(app.modal.is_none(), "the dialog closes when the request fires");

    let event = next_event(&mut rx).await;
    app.handle_event(event);

    assert_eq!(app.error.as_deref(), Some("task not found"));
    assert_eq!(app.tasks.len(), 1, "a rejected delete leaves the row alone");
    assert!(!app.loading);
    assert!(rx.try_recv().is_err(), "no reload follows a failed delete");
}

#[tokio::test]
async fn test_confirmed_delete_removes_and_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/a"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(json_response(200, &page_json(vec![], 0)))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server).await;
    preloaded_task(&mut app, "a", "doomed", TaskStatus::Paused);

    app.open_confirm_delete();
    app.confirm_delete();

    let deleted = next_event(&mut rx).await;
    app.handle_event(deleted);
    assert_eq!(app.status_message, "task deleted");

    let reloaded = next_event(&mut rx).await;
    app.handle_event(reloaded);
    assert!(app.tasks.is_empty());
    assert_eq!(app.table_state.selected(), None);
}

#[tokio::test]
async fn test_status_change_patches_then_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/tasks/a"))
        .and(body_json(json!({"status": "paused"})))
        .respond_with(json_response(200, &task_json("a", "news crawl", "paused")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(json_response(
            200,
            &page_json(vec![task_json("a", "news crawl", "paused")], 1),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server).await;
    preloaded_task(&mut app, "a", "news crawl", TaskStatus::Created);

    app.open_status_picker();
    // created -> running -> paused
    app.status_picker_move(1);
    app.status_picker_move(1);
    app.submit_status();

    let changed = next_event(&mut rx).await;
    app.handle_event(changed);
    assert!(app.status_message.contains("Paused"));

    let reloaded = next_event(&mut rx).await;
    app.handle_event(reloaded);
    assert_eq!(app.tasks[0].status, TaskStatus::Paused);
}

#[tokio::test]
async fn test_details_fetch_opens_the_dialog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/a"))
        .respond_with(json_response(200, &task_json("a", "news crawl", "running")))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server).await;
    preloaded_task(&mut app, "a", "news crawl", TaskStatus::Running);

    app.open_details();
    let event = next_event(&mut rx).await;
    app.handle_event(event);

    match &app.modal {
        Some(ActiveModal::Details { task }) => assert_eq!(task.id, "a"),
        other => panic!("unexpected modal: {other:?}"),
    }
    assert!(!app.loading);
}

#[tokio::test]
async fn test_slow_stale_reload_never_clobbers_the_newest() {
    let server = MockServer::start().await;
    // the first keystroke's reload answers late, the second's answers fast
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(query_param("q", "a"))
        .respond_with(
            json_response(200, &page_json(vec![task_json("t1", "old", "created")], 1))
                .set_delay(Duration::from_millis(500)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(query_param("q", "ab"))
        .respond_with(json_response(
            200,
            &page_json(vec![task_json("t2", "new", "created")], 1),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, mut rx) = test_app(&server).await;
    app.enter_search();
    app.push_query_char('a');
    app.push_query_char('b');

    let first = next_event(&mut rx).await;
    match &first {
        AppEvent::ReloadFinished { seq, .. } => assert_eq!(*seq, 2, "fast response lands first"),
        other => panic!("unexpected event: {other:?}"),
    }
    app.handle_event(first);
    assert_eq!(app.tasks[0].name, "new");
    assert!(!app.loading);

    let second = next_event(&mut rx).await;
    app.handle_event(second);
    assert_eq!(app.tasks[0].name, "new", "the late stale page is discarded");
    assert!(!app.loading, "a stale arrival must not flip the loading flag");
}
