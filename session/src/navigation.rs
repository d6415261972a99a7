use std::sync::Mutex;

/// Read access to the current location and the ability to move to another.
pub trait Navigator: Send + Sync {
    /// Path of the current location, without query string.
    fn current_path(&self) -> String;

    /// Decoded value of a query parameter of the current location.
    fn query_param(&self, key: &str) -> Option<String>;

    /// Move to `to`, a path optionally carrying a query string.
    fn navigate(&self, to: &str);
}

/// A navigator that keeps its location in memory and records every
/// navigation. Used for headless runs and in tests.
#[derive(Default)]
pub struct MemoryNavigator {
    location: Mutex<String>,
    history: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    /// Start at `location`, e.g. `/admin/login?redirect=/admin/leads`.
    pub fn at(location: &str) -> Self {
        Self {
            location: Mutex::new(location.to_string()),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Every navigation performed so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    pub fn location(&self) -> String {
        self.location.lock().map(|l| l.clone()).unwrap_or_default()
    }

    fn split(&self) -> (String, String) {
        let location = self.location();
        match location.split_once('?') {
            Some((path, query)) => (path.to_string(), query.to_string()),
            None => (location, String::new()),
        }
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.split().0
    }

    fn query_param(&self, key: &str) -> Option<String> {
        let (_, query) = self.split();
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn navigate(&self, to: &str) {
        if let Ok(mut location) = self.location.lock() {
            *location = to.to_string();
        }
        if let Ok(mut history) = self.history.lock() {
            history.push(to.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_navigator_location() {
        let nav = MemoryNavigator::at("/admin/login?redirect=%2Fadmin%2Fleads");
        assert_eq!(nav.current_path(), "/admin/login");
        assert_eq!(nav.query_param("redirect").as_deref(), Some("/admin/leads"));
        assert_eq!(nav.query_param("missing"), None);

        nav.navigate("/admin/dashboard");
        assert_eq!(nav.current_path(), "/admin/dashboard");
        assert_eq!(nav.query_param("redirect"), None);
        assert_eq!(nav.history(), vec!["/admin/dashboard".to_string()]);
    }
}
