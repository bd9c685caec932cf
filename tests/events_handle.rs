mod common;

use common::{drain, event, events_body, operations};
use iljeong::components::events::{ChannelNotifier, Notifier, ToastKind};
use iljeong::components::EventsHandle;
use iljeong::config::Config;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_handle_loads_events_before_serving_commands() {
    let mut server = mockito::Server::new_async().await;
    let events = vec![event("1", "팀 회의"), event("2", "운동")];
    let get = server
        .mock("GET", "/api/events")
        .with_status(200)
        .with_body(events_body(&events))
        .expect(1)
        .create_async()
        .await;

    let (ops, mut rx) = operations(&server.url(), false);
    let handle = EventsHandle::spawn(ops);

    assert_eq!(handle.events().await.unwrap(), events);
    get.assert_async().await;

    let toasts = drain(&mut rx);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "일정 로딩 완료!");

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_handle_clones_share_one_collection() {
    let mut server = mockito::Server::new_async().await;
    let initial = server
        .mock("GET", "/api/events")
        .with_status(200)
        .with_body(events_body(&[event("abc", "삭제 대상")]))
        .create_async()
        .await;

    let (ops, mut rx) = operations(&server.url(), false);
    let handle = EventsHandle::spawn(ops);
    let other = handle.clone();
    assert_eq!(handle.events().await.unwrap().len(), 1);

    initial.remove_async().await;
    server
        .mock("DELETE", "/api/events/abc")
        .with_status(204)
        .create_async()
        .await;
    server
        .mock("GET", "/api/events")
        .with_status(200)
        .with_body(events_body(&[]))
        .create_async()
        .await;

    other.delete_event("abc").await.unwrap();

    assert!(handle.events().await.unwrap().is_empty());
    let kinds: Vec<ToastKind> = drain(&mut rx).into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![ToastKind::Info, ToastKind::Info]);

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_handle_reports_actor_error_after_shutdown() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/events")
        .with_status(200)
        .with_body(events_body(&[]))
        .create_async()
        .await;

    let (ops, _rx) = operations(&server.url(), false);
    let handle = EventsHandle::spawn(ops);
    handle.events().await.unwrap();

    handle.shutdown().await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(handle.events().await.is_err());
}

#[tokio::test]
async fn test_handle_from_config_uses_configured_durations() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/events")
        .with_status(200)
        .with_body(events_body(&[]))
        .create_async()
        .await;

    iljeong::utils::i18n::set_locale("ko");
    let config = Config {
        api_base_url: server.url(),
        loaded_toast_duration_ms: 250,
        ..Config::default()
    };
    let (notifier, mut rx) = ChannelNotifier::new();
    let notifier: Arc<dyn Notifier> = Arc::new(notifier);
    let handle = EventsHandle::from_config(&config, notifier, false, None).unwrap();

    handle.fetch_events().await.unwrap();

    let toasts = drain(&mut rx);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].duration, Duration::from_millis(250));

    handle.shutdown().await.unwrap();
}
