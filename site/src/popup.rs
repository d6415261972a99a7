//! The promotional popup: shown at most once per 24 hours per browser.

use jiff::{SignedDuration, Timestamp};
use payloads::{APIClient, responses::PopupConfig};

/// Local storage key holding when the popup was last shown.
pub const SHOWN_AT_KEY: &str = "promo_popup_shown_at";
pub const SHOW_INTERVAL: SignedDuration = SignedDuration::from_hours(24);

/// Whether the popup may be shown, given the stored value of
/// [`SHOWN_AT_KEY`]. A missing, unreadable, or future value does not
/// suppress it.
pub fn should_show(last_shown: Option<&str>, now: Timestamp) -> bool {
    let Some(shown_at) = last_shown.and_then(parse_shown_at) else {
        return true;
    };
    if shown_at > now {
        return true;
    }
    now.duration_since(shown_at) >= SHOW_INTERVAL
}

/// Value to store under [`SHOWN_AT_KEY`] once the popup has been shown.
pub fn mark_shown(now: Timestamp) -> String {
    now.as_millisecond().to_string()
}

/// Epoch milliseconds, or an RFC 3339 timestamp.
pub fn parse_shown_at(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(ms) => Timestamp::from_millisecond(ms).ok(),
        Err(_) => raw.parse().ok(),
    }
}

/// The popup configuration, or the built-in one when it cannot be fetched.
pub async fn load_config(client: &APIClient) -> PopupConfig {
    match client.popup_config().await {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("using default popup config: {e}");
            PopupConfig::default()
        }
    }
}

/// Whether to schedule the popup for this page view.
pub fn is_due(
    config: &PopupConfig,
    last_shown: Option<&str>,
    now: Timestamp,
) -> bool {
    config.enabled && should_show(last_shown, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_should_show_without_record() {
        let now = at("2025-03-01T12:00:00Z");
        assert!(should_show(None, now));
        assert!(should_show(Some("garbage"), now));
        assert!(should_show(Some(""), now));
    }

    #[test]
    fn test_should_show_after_interval() {
        let now = at("2025-03-01T12:00:00Z");
        let shown = mark_shown(at("2025-03-01T00:00:00Z"));
        assert!(!should_show(Some(&shown), now));

        let shown = mark_shown(at("2025-02-28T12:00:00.001Z"));
        assert!(!should_show(Some(&shown), now));

        let shown = mark_shown(at("2025-02-28T12:00:00Z"));
        assert!(should_show(Some(&shown), now));
    }

    #[test]
    fn test_future_record_does_not_suppress() {
        let now = at("2025-03-01T12:00:00Z");
        let shown = mark_shown(at("2025-03-02T12:00:00Z"));
        assert!(should_show(Some(&shown), now));
    }

    #[test]
    fn test_parse_shown_at() {
        let ts = at("2025-03-01T12:00:00Z");
        assert_eq!(parse_shown_at(&mark_shown(ts)), Some(ts));
        assert_eq!(parse_shown_at("2025-03-01T12:00:00Z"), Some(ts));
        assert_eq!(parse_shown_at("yesterday"), None);
    }

    #[test]
    fn test_disabled_config_is_never_due() {
        let config = PopupConfig {
            enabled: false,
            ..PopupConfig::default()
        };
        assert!(!is_due(&config, None, at("2025-03-01T12:00:00Z")));
        assert!(is_due(&PopupConfig::default(), None, at("2025-03-01T12:00:00Z")));
    }
}
