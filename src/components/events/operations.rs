use super::client::EventsClient;
use super::models::{Event, EventPayload};
use super::notifications::{Notifier, Toast, ToastKind};
use crate::error::{other_error, save_error, AppResult};
use rust_i18n::t;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Callback run after a successful save
pub type OnSave = Arc<dyn Fn() + Send + Sync>;

/// How long toasts stay on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDurations {
    pub default: Duration,
    pub loaded: Duration,
}

impl Default for ToastDurations {
    fn default() -> Self {
        Self {
            default: Duration::from_millis(3000),
            loaded: Duration::from_millis(1000),
        }
    }
}

/// Reads and writes events against the backend and keeps the last fetched list.
///
/// Every mutation is followed by a full refetch; the local list is never
/// patched. Failures are logged and surfaced as a single error toast and are
/// never returned to the caller.
pub struct EventOperations {
    client: EventsClient,
    notifier: Arc<dyn Notifier>,
    editing: bool,
    on_save: Option<OnSave>,
    durations: ToastDurations,
    events: Vec<Event>,
}

impl EventOperations {
    pub fn new(client: EventsClient, notifier: Arc<dyn Notifier>, editing: bool) -> Self {
        Self {
            client,
            notifier,
            editing,
            on_save: None,
            durations: ToastDurations::default(),
            events: Vec::new(),
        }
    }

    /// Run `on_save` after every successful save
    pub fn with_on_save(mut self, on_save: OnSave) -> Self {
        self.on_save = Some(on_save);
        self
    }

    pub fn with_durations(mut self, durations: ToastDurations) -> Self {
        self.durations = durations;
        self
    }

    /// The list returned by the last successful fetch
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Initial load: fetch, then announce completion.
    ///
    /// The "loaded" toast is shown even when the fetch failed.
    pub async fn init(&mut self) {
        self.fetch_events().await;
        self.toast_closable(ToastKind::Info, t!("events_loaded"), self.durations.loaded, false);
    }

    /// Replace the local list with the server's
    pub async fn fetch_events(&mut self) {
        match self.client.fetch_events().await {
            Ok(events) => {
                info!("Fetched {} events", events.len());
                self.events = events;
            }
            Err(e) => {
                error!("Error fetching events: {}", e);
                self.toast(ToastKind::Error, t!("events_fetch_failed"));
            }
        }
    }

    /// Update the event when editing, create it otherwise
    pub async fn save_event(&mut self, payload: impl Into<EventPayload>) {
        let payload = payload.into();

        let result = if self.editing {
            match payload.id() {
                Some(id) => self.client.update_event(id, &payload).await,
                None => Err(save_error("Cannot update an event without an id")),
            }
        } else {
            self.client.create_event(&payload).await
        };

        match result {
            Ok(()) => {
                self.fetch_events().await;
                self.run_on_save();
                let title = if self.editing {
                    t!("event_updated")
                } else {
                    t!("event_created")
                };
                self.toast(ToastKind::Success, title);
            }
            Err(e) => {
                error!("Error saving event: {}", e);
                self.toast(ToastKind::Error, t!("event_save_failed"));
            }
        }
    }

    /// Create all events with a single bulk request
    pub async fn save_repeating_events(&mut self, events: Vec<EventPayload>) {
        match self.client.create_events(&events).await {
            Ok(()) => {
                self.fetch_events().await;
                self.run_on_save();
                self.toast(ToastKind::Success, t!("event_created"));
            }
            Err(e) => {
                error!("Error saving event: {}", e);
                self.toast(ToastKind::Error, t!("event_save_failed"));
            }
        }
    }

    /// Turn an existing event into a recurring series.
    ///
    /// The first element is the already persisted origin, the rest are new
    /// instances. The two requests are not transactional: if the bulk create
    /// fails the origin stays updated.
    pub async fn update_event_to_repeating_event(&mut self, events: Vec<EventPayload>) {
        if let Err(e) = self.convert_to_repeating(events).await {
            error!("Error updating to repeating event: {}", e);
            self.toast(ToastKind::Error, t!("event_convert_failed"));
        }
    }

    async fn convert_to_repeating(&mut self, events: Vec<EventPayload>) -> AppResult<()> {
        let mut events = events.into_iter();
        let origin = events
            .next()
            .ok_or_else(|| other_error("No origin event to convert"))?;
        let instances: Vec<EventPayload> = events.collect();

        if let Some(id) = origin.id().filter(|id| !id.is_empty()) {
            self.client.update_event(id, &origin).await?;
        }

        // Reports its own outcome, failures here do not stop the conversion
        if !instances.is_empty() {
            self.save_repeating_events(instances).await;
        }

        self.fetch_events().await;
        self.run_on_save();
        self.toast(ToastKind::Success, t!("event_converted_to_repeating"));

        Ok(())
    }

    pub async fn delete_event(&mut self, id: &str) {
        match self.client.delete_event(id).await {
            Ok(()) => {
                self.fetch_events().await;
                self.toast(ToastKind::Info, t!("event_deleted"));
            }
            Err(e) => {
                error!("Error deleting event: {}", e);
                self.toast(ToastKind::Error, t!("event_delete_failed"));
            }
        }
    }

    fn run_on_save(&self) {
        if let Some(on_save) = &self.on_save {
            on_save();
        }
    }

    fn toast(&self, kind: ToastKind, title: impl Into<String>) {
        self.toast_closable(kind, title, self.durations.default, true);
    }

    fn toast_closable(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        duration: Duration,
        closable: bool,
    ) {
        self.notifier
            .notify(Toast::new(kind, title, duration).closable(closable));
    }
}
