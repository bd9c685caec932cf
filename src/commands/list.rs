use super::CommandResult;
use crate::components::events::reminders::notified_ids;
use crate::components::events::{EventCard, EventsHandle};
use crate::error::other_error;
use crate::utils::time::parse_datetime;
use chrono::Local;

/// Print every event as a card
pub async fn list(handle: &EventsHandle, at: Option<&str>) -> CommandResult {
    let now = match at {
        Some(value) => parse_datetime(value)
            .ok_or_else(|| other_error(&format!("Invalid --at value: {}", value)))?,
        None => Local::now().naive_local(),
    };

    let events = handle.events().await?;
    let notified = notified_ids(&events, now);

    for event in &events {
        println!("[{}]\n{}\n", event.id, EventCard::new(event, &notified));
    }

    Ok(())
}
