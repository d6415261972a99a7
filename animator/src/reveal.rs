use crate::{DEFAULT_FAMILY, FAMILIES, FAMILY_PREFIX};

/// The animation family named by an element's classes, either bare
/// (`zoomIn`) or prefixed (`animate__zoomIn`).
pub fn resolve_family(classes: &[String]) -> &'static str {
    classes
        .iter()
        .map(|class| class.strip_prefix(FAMILY_PREFIX).unwrap_or(class.as_str()))
        .find_map(|name| FAMILIES.iter().find(|family| **family == name))
        .copied()
        .unwrap_or(DEFAULT_FAMILY)
}

/// CSS `animation-delay` for a delay attribute. A bare number is taken as
/// milliseconds; values with `ms` or `s` units pass through. Anything else
/// is ignored.
pub fn normalize_delay(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ms) = raw.parse::<f64>() {
        return (ms.is_finite() && ms >= 0.0).then(|| format!("{ms}ms"));
    }
    let amount = raw
        .strip_suffix("ms")
        .or_else(|| raw.strip_suffix('s'))?;
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(raw.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(list: &str) -> Vec<String> {
        list.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_resolve_family() {
        assert_eq!(resolve_family(&classes("animate-on-scroll zoomIn")), "zoomIn");
        assert_eq!(
            resolve_family(&classes("animate-on-scroll animate__slideInLeft")),
            "slideInLeft"
        );
        assert_eq!(resolve_family(&classes("animate-on-scroll")), "fadeInUp");
        assert_eq!(resolve_family(&classes("bounceIn card")), "fadeInUp");
        // first match wins
        assert_eq!(resolve_family(&classes("fadeIn zoomIn")), "fadeIn");
    }

    #[test]
    fn test_normalize_delay() {
        assert_eq!(normalize_delay("200").as_deref(), Some("200ms"));
        assert_eq!(normalize_delay(" 150 ").as_deref(), Some("150ms"));
        assert_eq!(normalize_delay("0.3s").as_deref(), Some("0.3s"));
        assert_eq!(normalize_delay("300ms").as_deref(), Some("300ms"));
        assert_eq!(normalize_delay(""), None);
        assert_eq!(normalize_delay("soon"), None);
        assert_eq!(normalize_delay("-5"), None);
    }
}
