use super::catalog::notification_label;
use super::models::{Event, RepeatType};
use rust_i18n::t;
use std::collections::HashSet;
use std::fmt;

/// Visual emphasis of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Reminder is currently due
    Notified,
    Repeating,
    Plain,
}

impl Highlight {
    /// Marker shown in front of the title
    pub fn marker(&self) -> &'static str {
        match self {
            Highlight::Notified => "🔔",
            Highlight::Repeating => "🔁",
            Highlight::Plain => "",
        }
    }
}

/// Text rendering of a single event
#[derive(Debug, Clone, Copy)]
pub struct EventCard<'a> {
    event: &'a Event,
    notified: bool,
}

impl<'a> EventCard<'a> {
    pub fn new(event: &'a Event, notified_events: &HashSet<String>) -> Self {
        Self {
            event,
            notified: notified_events.contains(&event.id),
        }
    }

    pub fn highlight(&self) -> Highlight {
        if self.notified {
            Highlight::Notified
        } else if self.event.repeat.is_repeating() {
            Highlight::Repeating
        } else {
            Highlight::Plain
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let event = self.event;
        let marker = self.highlight().marker();
        let title = if marker.is_empty() {
            event.title.clone()
        } else {
            format!("{} {}", marker, event.title)
        };

        let mut lines = vec![
            title,
            event.date.format("%Y-%m-%d").to_string(),
            format!("{} - {}", event.start_time, event.end_time),
            event.description.clone(),
            event.location.clone(),
            t!("card_category", category = &event.category).to_string(),
        ];

        if let Some(unit) = repeat_unit(event.repeat.kind) {
            let mut line = t!("card_repeat", interval = event.repeat.interval, unit = &unit).to_string();
            if let Some(end) = event.repeat.end_date {
                line.push_str(&t!("card_repeat_until", end_date = end.format("%Y-%m-%d")));
            }
            lines.push(line);
        }

        let label = notification_label(event.notification_time).unwrap_or_default();
        lines.push(t!("card_notification", label = label).to_string());

        lines
    }
}

impl fmt::Display for EventCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

fn repeat_unit(kind: RepeatType) -> Option<String> {
    let unit = match kind {
        RepeatType::None => return None,
        RepeatType::Daily => t!("repeat_unit_daily"),
        RepeatType::Weekly => t!("repeat_unit_weekly"),
        RepeatType::Monthly => t!("repeat_unit_monthly"),
        RepeatType::Yearly => t!("repeat_unit_yearly"),
    };
    Some(unit.to_string())
}
