use super::models::{Event, EventPayload};
use super::operations::EventOperations;
use crate::error::{actor_error, AppResult};
use tokio::sync::mpsc;
use tracing::info;

/// The events actor that processes commands one at a time
pub struct EventsActor {
    operations: EventOperations,
    command_rx: mpsc::Receiver<EventsCommand>,
}

/// Commands that can be sent to the events actor
pub enum EventsCommand {
    GetEvents(mpsc::Sender<Vec<Event>>),
    FetchEvents(mpsc::Sender<()>),
    SaveEvent(EventPayload, mpsc::Sender<()>),
    SaveRepeatingEvents(Vec<EventPayload>, mpsc::Sender<()>),
    UpdateEventToRepeatingEvent(Vec<EventPayload>, mpsc::Sender<()>),
    DeleteEvent(String, mpsc::Sender<()>),
    Shutdown,
}

/// Handle for communicating with the events actor
#[derive(Clone)]
pub struct EventsActorHandle {
    command_tx: mpsc::Sender<EventsCommand>,
}

impl EventsActorHandle {
    /// Snapshot of the last fetched events
    pub async fn get_events(&self) -> AppResult<Vec<Event>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(EventsCommand::GetEvents(response_tx)).await?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| actor_error("Response channel closed"))
    }

    pub async fn fetch_events(&self) -> AppResult<()> {
        self.request(EventsCommand::FetchEvents).await
    }

    pub async fn save_event(&self, payload: EventPayload) -> AppResult<()> {
        self.request(|tx| EventsCommand::SaveEvent(payload, tx)).await
    }

    pub async fn save_repeating_events(&self, events: Vec<EventPayload>) -> AppResult<()> {
        self.request(|tx| EventsCommand::SaveRepeatingEvents(events, tx))
            .await
    }

    pub async fn update_event_to_repeating_event(&self, events: Vec<EventPayload>) -> AppResult<()> {
        self.request(|tx| EventsCommand::UpdateEventToRepeatingEvent(events, tx))
            .await
    }

    pub async fn delete_event(&self, id: String) -> AppResult<()> {
        self.request(|tx| EventsCommand::DeleteEvent(id, tx)).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        let _ = self.command_tx.send(EventsCommand::Shutdown).await;
        Ok(())
    }

    /// Send a command and wait until the actor has finished it
    async fn request<F>(&self, make_command: F) -> AppResult<()>
    where
        F: FnOnce(mpsc::Sender<()>) -> EventsCommand,
    {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(make_command(response_tx)).await?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| actor_error("Response channel closed"))
    }

    async fn send(&self, command: EventsCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| actor_error(&format!("Actor mailbox error: {}", e)))
    }
}

impl EventsActor {
    /// Create a new actor and return its handle
    pub fn new(operations: EventOperations) -> (Self, EventsActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            operations,
            command_rx,
        };

        let handle = EventsActorHandle { command_tx };

        (actor, handle)
    }

    /// Load the events, then process commands until shutdown
    pub async fn run(&mut self) {
        info!("Events actor started");

        self.operations.init().await;

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                EventsCommand::GetEvents(response_tx) => {
                    let _ = response_tx.send(self.operations.events().to_vec()).await;
                }
                EventsCommand::FetchEvents(response_tx) => {
                    self.operations.fetch_events().await;
                    let _ = response_tx.send(()).await;
                }
                EventsCommand::SaveEvent(payload, response_tx) => {
                    self.operations.save_event(payload).await;
                    let _ = response_tx.send(()).await;
                }
                EventsCommand::SaveRepeatingEvents(events, response_tx) => {
                    self.operations.save_repeating_events(events).await;
                    let _ = response_tx.send(()).await;
                }
                EventsCommand::UpdateEventToRepeatingEvent(events, response_tx) => {
                    self.operations.update_event_to_repeating_event(events).await;
                    let _ = response_tx.send(()).await;
                }
                EventsCommand::DeleteEvent(id, response_tx) => {
                    self.operations.delete_event(&id).await;
                    let _ = response_tx.send(()).await;
                }
                EventsCommand::Shutdown => {
                    info!("Events actor shutting down");
                    break;
                }
            }
        }

        info!("Events actor shut down");
    }
}
