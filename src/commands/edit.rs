use super::{AddArgs, CommandResult, FieldOverrides, RepeatArgs};
use crate::components::events::recurrence::expand;
use crate::components::events::{Event, EventForm, EventPayload, EventsHandle, RepeatType};
use crate::config::Config;
use crate::error::{config_error, other_error, AppResult};
use crate::utils::time::parse_time;
use chrono::{Days, NaiveDate};
use tracing::info;

/// Create a single event or a bulk-created series
pub async fn add(handle: &EventsHandle, config: &Config, args: AddArgs) -> CommandResult {
    let form = EventForm {
        title: args.title,
        date: args.date,
        start_time: args.start,
        end_time: args.end,
        description: args.description,
        location: args.location,
        category: args.category,
        repeat: args.rule.to_repeat_info(),
        notification_time: args.notify,
    };
    validate_times(&form)?;

    if form.repeat.is_repeating() {
        let instances: Vec<EventPayload> = expand(&form, horizon_end(config, form.date)?)
            .into_iter()
            .map(EventPayload::from)
            .collect();
        info!("Creating {} repeating events", instances.len());
        handle.save_repeating_events(instances).await
    } else {
        handle.save_event(form).await
    }
}

/// Apply field overrides to an existing event and save it
pub async fn edit(handle: &EventsHandle, id: &str, fields: FieldOverrides) -> CommandResult {
    let mut event = find_event(handle, id).await?;

    if let Some(title) = fields.title {
        event.title = title;
    }
    if let Some(date) = fields.date {
        event.date = date;
    }
    if let Some(start) = fields.start {
        event.start_time = start;
    }
    if let Some(end) = fields.end {
        event.end_time = end;
    }
    if let Some(description) = fields.description {
        event.description = description;
    }
    if let Some(location) = fields.location {
        event.location = location;
    }
    if let Some(category) = fields.category {
        event.category = category;
    }
    if let Some(notify) = fields.notify {
        event.notification_time = notify;
    }
    validate_times(&event)?;

    handle.save_event(event).await
}

/// Give an existing event a repeat rule and create the rest of the series
pub async fn repeat(handle: &EventsHandle, config: &Config, id: &str, rule: RepeatArgs) -> CommandResult {
    if rule.kind == RepeatType::None {
        return Err(config_error("A repeat type other than none is required"));
    }

    let mut origin = find_event(handle, id).await?;
    origin.repeat = rule.to_repeat_info();

    let mut series: Vec<EventPayload> = vec![EventPayload::from(origin.clone())];
    series.extend(
        expand(&origin, horizon_end(config, origin.date)?)
            .into_iter()
            .skip(1)
            .map(EventPayload::from),
    );
    info!("Converting event {} into a series of {}", id, series.len());

    handle.update_event_to_repeating_event(series).await
}

pub async fn delete(handle: &EventsHandle, id: &str) -> CommandResult {
    handle.delete_event(id).await
}

async fn find_event(handle: &EventsHandle, id: &str) -> AppResult<Event> {
    handle
        .events()
        .await?
        .into_iter()
        .find(|event| event.id == id)
        .ok_or_else(|| other_error(&format!("Event not found: {}", id)))
}

/// Last date a series without its own end date may reach
fn horizon_end(config: &Config, start: NaiveDate) -> AppResult<NaiveDate> {
    u64::try_from(config.repeat_horizon_days)
        .ok()
        .and_then(|days| start.checked_add_days(Days::new(days)))
        .ok_or_else(|| {
            config_error(&format!(
                "repeat_horizon_days out of range: {}",
                config.repeat_horizon_days
            ))
        })
}

/// Start and end must be valid HH:MM and in order
pub fn validate_times(form: &EventForm) -> AppResult<()> {
    let start = parse_time(&form.start_time)
        .ok_or_else(|| config_error(&format!("Invalid start time: {}", form.start_time)))?;
    let end = parse_time(&form.end_time)
        .ok_or_else(|| config_error(&format!("Invalid end time: {}", form.end_time)))?;
    if start >= end {
        return Err(config_error("Start time must be before end time"));
    }
    Ok(())
}
