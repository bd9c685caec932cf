/// A selectable reminder lead time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationOption {
    /// Minutes before the event start
    pub value: u32,
    pub label: &'static str,
}

/// Reminder lead times offered by the event form, in display order
pub const NOTIFICATION_OPTIONS: &[NotificationOption] = &[
    NotificationOption { value: 1, label: "1분 전" },
    NotificationOption { value: 10, label: "10분 전" },
    NotificationOption { value: 60, label: "1시간 전" },
    NotificationOption { value: 120, label: "2시간 전" },
    NotificationOption { value: 1440, label: "1일 전" },
];

/// Label for a lead time, if it is one of the catalog entries
pub fn notification_label(value: u32) -> Option<&'static str> {
    NOTIFICATION_OPTIONS
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_resolve() {
        assert_eq!(notification_label(10), Some("10분 전"));
        assert_eq!(notification_label(1440), Some("1일 전"));
    }

    #[test]
    fn test_unknown_value_has_no_label() {
        assert_eq!(notification_label(15), None);
    }

    #[test]
    fn test_options_are_ordered_by_lead_time() {
        assert!(NOTIFICATION_OPTIONS.windows(2).all(|w| w[0].value < w[1].value));
    }
}
