use tracing::warn;

/// Locales shipped in `locales/`
pub const SUPPORTED_LOCALES: &[&str] = &["ko", "en"];

/// Locale used when the requested one is not shipped
pub const FALLBACK_LOCALE: &str = "ko";

/// Map a locale tag such as `en-US` or `ko_KR` onto a shipped locale
pub fn resolve_locale(locale: &str) -> Option<&'static str> {
    let language = locale.split(['-', '_']).next().unwrap_or(locale).trim();
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| supported.eq_ignore_ascii_case(language))
}

/// Switch the active locale, falling back to Korean for unknown ones
pub fn set_locale(locale: &str) {
    let resolved = resolve_locale(locale).unwrap_or_else(|| {
        warn!("Unsupported locale {}, using {}", locale, FALLBACK_LOCALE);
        FALLBACK_LOCALE
    });
    rust_i18n::set_locale(resolved);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_suffix_is_ignored() {
        assert_eq!(resolve_locale("en-US"), Some("en"));
        assert_eq!(resolve_locale("EN_gb"), Some("en"));
        assert_eq!(resolve_locale("ko_KR"), Some("ko"));
        assert_eq!(resolve_locale("ko"), Some("ko"));
    }

    #[test]
    fn test_unknown_locale_is_unresolved() {
        assert_eq!(resolve_locale("fr-FR"), None);
        assert_eq!(resolve_locale(""), None);
    }

    #[test]
    fn test_set_locale_falls_back_to_korean() {
        // Other tests in this crate expect "ko" to be active
        set_locale("fr");
        assert_eq!(&*rust_i18n::locale(), "ko");

        set_locale("ko_KR");
        assert_eq!(&*rust_i18n::locale(), "ko");
    }

    #[test]
    fn test_english_texts_are_shipped() {
        assert_eq!(t!("event_deleted", locale = "en"), "Event deleted.");
        assert_eq!(t!("events_loaded", locale = "en"), "Events loaded!");
        assert_eq!(t!("event_deleted", locale = "ko"), "일정이 삭제되었습니다.");
    }

    #[test]
    fn test_every_key_has_an_english_translation() {
        let keys = [
            "events_fetch_failed",
            "events_loaded",
            "event_updated",
            "event_created",
            "event_save_failed",
            "event_converted_to_repeating",
            "event_convert_failed",
            "event_deleted",
            "event_delete_failed",
        ];
        for key in keys {
            let en = t!(key, locale = "en");
            assert_ne!(en, t!(key, locale = "ko"), "en text for {} is missing", key);
        }
    }
}
