use super::models::Event;
use crate::utils::time::event_datetime;
use chrono::{Duration, NaiveDateTime};
use std::collections::HashSet;

/// Whether `event` is inside its reminder window at `now`
pub fn is_due(event: &Event, now: NaiveDateTime) -> bool {
    let Some(start) = event_datetime(event.date, &event.start_time) else {
        return false;
    };
    let lead = Duration::minutes(i64::from(event.notification_time));
    start - lead <= now && now < start
}

/// Ids of the events whose reminder should be shown at `now`
pub fn notified_ids(events: &[Event], now: NaiveDateTime) -> HashSet<String> {
    events
        .iter()
        .filter(|event| is_due(event, now))
        .map(|event| event.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::events::models::{EventForm, RepeatInfo};
    use crate::utils::time::parse_datetime;
    use chrono::NaiveDate;

    fn event(id: &str, start_time: &str, notification_time: u32) -> Event {
        EventForm {
            title: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            start_time: start_time.to_string(),
            end_time: "23:00".to_string(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            repeat: RepeatInfo::none(),
            notification_time,
        }
        .with_id(id)
    }

    #[test]
    fn test_window_is_lead_time_before_start() {
        let e = event("1", "10:00", 10);
        assert!(!is_due(&e, parse_datetime("2024-10-15 09:49").unwrap()));
        assert!(is_due(&e, parse_datetime("2024-10-15 09:50").unwrap()));
        assert!(is_due(&e, parse_datetime("2024-10-15 09:59").unwrap()));
        assert!(!is_due(&e, parse_datetime("2024-10-15 10:00").unwrap()));
    }

    #[test]
    fn test_notified_ids_selects_due_events() {
        let events = vec![event("a", "10:00", 60), event("b", "12:00", 10), event("c", "bad", 10)];
        let ids = notified_ids(&events, parse_datetime("2024-10-15 09:30").unwrap());
        assert_eq!(ids, HashSet::from(["a".to_string()]));
    }
}
