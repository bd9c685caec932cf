#![allow(dead_code)]

use chrono::NaiveDate;
use iljeong::components::events::{
    ChannelNotifier, Event, EventForm, EventOperations, EventsClient, RepeatInfo, RepeatType, Toast,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Operations wired to a mock server, plus the toast receiver
pub fn operations(base_url: &str, editing: bool) -> (EventOperations, UnboundedReceiver<Toast>) {
    iljeong::utils::i18n::set_locale("ko");
    let client = EventsClient::new(base_url).unwrap();
    let (notifier, rx) = ChannelNotifier::new();
    (EventOperations::new(client, Arc::new(notifier), editing), rx)
}

/// Operations that count `on_save` calls
pub fn operations_with_counter(
    base_url: &str,
    editing: bool,
) -> (EventOperations, UnboundedReceiver<Toast>, Arc<AtomicUsize>) {
    let (ops, rx) = operations(base_url, editing);
    let counter = Arc::new(AtomicUsize::new(0));
    let on_save_counter = Arc::clone(&counter);
    let ops = ops.with_on_save(Arc::new(move || {
        on_save_counter.fetch_add(1, Ordering::SeqCst);
    }));
    (ops, rx, counter)
}

/// Everything toasted so far
pub fn drain(rx: &mut UnboundedReceiver<Toast>) -> Vec<Toast> {
    let mut toasts = Vec::new();
    while let Ok(toast) = rx.try_recv() {
        toasts.push(toast);
    }
    toasts
}

pub fn form(title: &str, date: NaiveDate) -> EventForm {
    EventForm {
        title: title.to_string(),
        date,
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        description: "설명".to_string(),
        location: "회의실".to_string(),
        category: "업무".to_string(),
        repeat: RepeatInfo::none(),
        notification_time: 10,
    }
}

pub fn event(id: &str, title: &str) -> Event {
    form(title, NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()).with_id(id)
}

pub fn weekly(mut form: EventForm) -> EventForm {
    form.repeat = RepeatInfo {
        kind: RepeatType::Weekly,
        interval: 1,
        end_date: NaiveDate::from_ymd_opt(2024, 10, 29),
    };
    form
}

/// Body of `GET /api/events`
pub fn events_body(events: &[Event]) -> String {
    serde_json::json!({ "events": events }).to_string()
}
