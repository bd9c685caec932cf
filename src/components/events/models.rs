use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// How an event recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatType::None => "none",
            RepeatType::Daily => "daily",
            RepeatType::Weekly => "weekly",
            RepeatType::Monthly => "monthly",
            RepeatType::Yearly => "yearly",
        }
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RepeatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(RepeatType::None),
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" => Ok(RepeatType::Yearly),
            other => Err(format!("unknown repeat type: {}", other)),
        }
    }
}

/// Recurrence rule attached to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    pub interval: u32,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_date"
    )]
    pub end_date: Option<NaiveDate>,
}

impl RepeatInfo {
    /// A descriptor for an event that does not recur
    pub fn none() -> Self {
        Self {
            kind: RepeatType::None,
            interval: 1,
            end_date: None,
        }
    }

    pub fn is_repeating(&self) -> bool {
        self.kind != RepeatType::None
    }
}

impl Default for RepeatInfo {
    fn default() -> Self {
        Self::none()
    }
}

/// Event payload before the server has assigned an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    /// Reminder lead time in minutes, see `catalog::NOTIFICATION_OPTIONS`
    pub notification_time: u32,
}

impl EventForm {
    /// Attach a server-assigned id
    pub fn with_id(self, id: impl Into<String>) -> Event {
        Event {
            id: id.into(),
            form: self,
        }
    }
}

/// Persisted calendar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(flatten)]
    pub form: EventForm,
}

impl std::ops::Deref for Event {
    type Target = EventForm;

    fn deref(&self) -> &Self::Target {
        &self.form
    }
}

impl std::ops::DerefMut for Event {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.form
    }
}

/// Either a persisted event or a form; serialized as the inner object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    Persisted(Event),
    Draft(EventForm),
}

impl EventPayload {
    /// Server id, if this payload has one
    pub fn id(&self) -> Option<&str> {
        match self {
            EventPayload::Persisted(event) => Some(event.id.as_str()),
            EventPayload::Draft(_) => None,
        }
    }
}

impl From<Event> for EventPayload {
    fn from(event: Event) -> Self {
        EventPayload::Persisted(event)
    }
}

impl From<EventForm> for EventPayload {
    fn from(form: EventForm) -> Self {
        EventPayload::Draft(form)
    }
}

/// Body of `GET /api/events`
#[derive(Debug, Clone, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

/// Body of `POST /api/events-list`
#[derive(Debug, Clone, Serialize)]
pub struct EventsListRequest<'a> {
    pub events: &'a [EventPayload],
}

/// Reads `"YYYY-MM-DD"`, treating `""` and `null` as absent
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_form() -> EventForm {
        EventForm {
            title: "팀 회의".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            description: "주간 팀 미팅".to_string(),
            location: "회의실 A".to_string(),
            category: "업무".to_string(),
            repeat: RepeatInfo::none(),
            notification_time: 10,
        }
    }

    #[test]
    fn test_event_serializes_flat_camel_case() {
        let event = sample_form().with_id("1");
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["id"], "1");
        assert_eq!(value["date"], "2024-10-15");
        assert_eq!(value["startTime"], "10:00");
        assert_eq!(value["notificationTime"], 10);
        assert_eq!(value["repeat"], json!({ "type": "none", "interval": 1 }));
    }

    #[test]
    fn test_draft_payload_carries_no_id() {
        let payload = EventPayload::from(sample_form());
        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("id").is_none());
        assert_eq!(payload.id(), None);
    }

    #[test]
    fn test_empty_end_date_reads_as_absent() {
        let repeat: RepeatInfo =
            serde_json::from_value(json!({ "type": "weekly", "interval": 2, "endDate": "" }))
                .unwrap();
        assert_eq!(repeat.kind, RepeatType::Weekly);
        assert_eq!(repeat.end_date, None);

        let repeat: RepeatInfo = serde_json::from_value(
            json!({ "type": "monthly", "interval": 1, "endDate": "2025-06-30" }),
        )
        .unwrap();
        assert_eq!(repeat.end_date, NaiveDate::from_ymd_opt(2025, 6, 30));
    }

    #[test]
    fn test_repeat_type_from_str() {
        assert_eq!("Daily".parse::<RepeatType>(), Ok(RepeatType::Daily));
        assert!("hourly".parse::<RepeatType>().is_err());
    }
}
