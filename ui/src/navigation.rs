use session::Navigator;
use yew_router::history::{BrowserHistory, History};

/// [`Navigator`] over the browser location.
///
/// Navigation goes through the router's shared browser history so the
/// mounted `Switch` sees the change without a page reload.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn query_param(&self, key: &str) -> Option<String> {
        let search = web_sys::window()?.location().search().ok()?;
        let query = search.strip_prefix('?').unwrap_or(&search);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn navigate(&self, to: &str) {
        tracing::debug!(to, "navigating");
        BrowserHistory::new().push(to);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
