mod actor;
pub mod card;
pub mod catalog;
pub mod client;
mod handle;
pub mod models;
pub mod notifications;
pub mod operations;
pub mod recurrence;
pub mod reminders;

pub use card::{EventCard, Highlight};
pub use client::EventsClient;
pub use handle::EventsHandle;
pub use models::{Event, EventForm, EventPayload, RepeatInfo, RepeatType};
pub use notifications::{ChannelNotifier, Notifier, Toast, ToastKind, TracingNotifier};
pub use operations::{EventOperations, OnSave, ToastDurations};
