use super::actor::{EventsActor, EventsActorHandle};
use super::client::EventsClient;
use super::models::{Event, EventPayload};
use super::notifications::Notifier;
use super::operations::{EventOperations, OnSave, ToastDurations};
use crate::config::Config;
use crate::error::AppResult;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the events actor
#[derive(Clone)]
pub struct EventsHandle {
    actor_handle: EventsActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl EventsHandle {
    /// Spawn the actor around `operations`; it loads the events first
    pub fn spawn(operations: EventOperations) -> Self {
        let (mut actor, handle) = EventsActor::new(operations);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Build the client and operations from config and spawn the actor
    pub fn from_config(
        config: &Config,
        notifier: Arc<dyn Notifier>,
        editing: bool,
        on_save: Option<OnSave>,
    ) -> AppResult<Self> {
        let client = EventsClient::from_config(config)?;
        let mut operations = EventOperations::new(client, notifier, editing).with_durations(
            ToastDurations {
                default: config.toast_duration(),
                loaded: config.loaded_toast_duration(),
            },
        );
        if let Some(on_save) = on_save {
            operations = operations.with_on_save(on_save);
        }

        Ok(Self::spawn(operations))
    }

    /// Last fetched events
    pub async fn events(&self) -> AppResult<Vec<Event>> {
        self.actor_handle.get_events().await
    }

    pub async fn fetch_events(&self) -> AppResult<()> {
        self.actor_handle.fetch_events().await
    }

    pub async fn save_event(&self, payload: impl Into<EventPayload>) -> AppResult<()> {
        self.actor_handle.save_event(payload.into()).await
    }

    pub async fn save_repeating_events(&self, events: Vec<EventPayload>) -> AppResult<()> {
        self.actor_handle.save_repeating_events(events).await
    }

    pub async fn update_event_to_repeating_event(&self, events: Vec<EventPayload>) -> AppResult<()> {
        self.actor_handle.update_event_to_repeating_event(events).await
    }

    pub async fn delete_event(&self, id: impl Into<String>) -> AppResult<()> {
        self.actor_handle.delete_event(id.into()).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        self.actor_handle.shutdown().await
    }
}
