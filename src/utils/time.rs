use chrono::{NaiveDate, NaiveDateTime};

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Combine an event date with an HH:MM time
pub fn event_datetime(date: NaiveDate, time_str: &str) -> Option<NaiveDateTime> {
    let (hour, minute) = parse_time(time_str)?;
    date.and_hms_opt(hour, minute, 0)
}

/// Parse a date in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").ok()
}

/// Parse a local timestamp in "YYYY-MM-DD HH:MM" format
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:30"), Some((9, 30)));
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("9"), None);
        assert_eq!(parse_time("10:61"), None);
    }

    #[test]
    fn test_event_datetime() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        let dt = event_datetime(date, "14:05").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-10-15 14:05");
        assert!(event_datetime(date, "noon").is_none());
    }

    #[test]
    fn test_parse_datetime() {
        assert!(parse_datetime("2024-10-15 09:00").is_some());
        assert!(parse_datetime("2024-10-15T09:00").is_none());
    }
}
