use payloads::{TokenStore, UnauthorizedHandler};
use std::sync::Arc;

use crate::{AuthSignal, LOGIN_PATH, Navigator, guard};

/// Request-interceptor reaction to a 401: drop the token the request carried,
/// sign the session out and send the user to the login page.
///
/// Only the first 401 for a given token does anything. Later ones find the
/// token already gone and are no-ops, so bursts of failing requests cannot
/// produce repeated redirects.
pub struct SessionExpiry {
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    signal: AuthSignal,
}

impl SessionExpiry {
    pub fn new(
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        signal: AuthSignal,
    ) -> Self {
        Self {
            tokens,
            navigator,
            signal,
        }
    }
}

impl UnauthorizedHandler for SessionExpiry {
    fn handle_unauthorized(&self, token: Option<&str>) {
        let Some(token) = token else {
            return;
        };
        if !self.tokens.clear_if(token) {
            tracing::debug!("401 for a token that is no longer stored");
            return;
        }
        tracing::info!("bearer token rejected, signing out");
        self.signal.expire();
        if !guard::is_login_path(&self.navigator.current_path()) {
            self.navigator.navigate(LOGIN_PATH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AuthState, MemoryNavigator};
    use payloads::{MemoryTokenStore, UserId, responses::User};

    fn setup(
        location: &str,
        token: Option<&str>,
    ) -> (Arc<MemoryTokenStore>, Arc<MemoryNavigator>, SessionExpiry) {
        let tokens = Arc::new(match token {
            Some(token) => MemoryTokenStore::with_token(token),
            None => MemoryTokenStore::new(),
        });
        let navigator = Arc::new(MemoryNavigator::at(location));
        let signal = AuthSignal::new();
        let generation = signal.begin();
        signal.settle(
            generation,
            AuthState::LoggedIn(User {
                id: UserId(Default::default()),
                email: "a@b.com".into(),
                name: "Admin".into(),
            }),
        );
        let expiry =
            SessionExpiry::new(tokens.clone(), navigator.clone(), signal);
        (tokens, navigator, expiry)
    }

    #[test]
    fn test_repeated_401s_redirect_once() {
        let (tokens, navigator, expiry) =
            setup("/admin/dashboard", Some("T"));

        expiry.handle_unauthorized(Some("T"));
        expiry.handle_unauthorized(Some("T"));
        expiry.handle_unauthorized(Some("T"));

        assert_eq!(tokens.get(), None);
        assert_eq!(navigator.history(), vec!["/admin/login".to_string()]);
        assert_eq!(expiry.signal.current(), AuthState::LoggedOut);
    }

    #[test]
    fn test_stale_token_keeps_newer_one() {
        let (tokens, navigator, expiry) =
            setup("/admin/dashboard", Some("new"));

        expiry.handle_unauthorized(Some("old"));

        assert_eq!(tokens.get().as_deref(), Some("new"));
        assert!(navigator.history().is_empty());
        assert!(expiry.signal.current().is_authenticated());
    }

    #[test]
    fn test_anonymous_401_is_ignored() {
        let (_, navigator, expiry) = setup("/admin/login", None);
        expiry.handle_unauthorized(None);
        assert!(navigator.history().is_empty());
        assert!(expiry.signal.current().is_authenticated());
    }

    #[test]
    fn test_no_navigation_when_already_on_login() {
        let (tokens, navigator, expiry) = setup("/admin/login", Some("T"));
        expiry.handle_unauthorized(Some("T"));
        assert_eq!(tokens.get(), None);
        assert!(navigator.history().is_empty());
        assert_eq!(expiry.signal.current(), AuthState::LoggedOut);
    }
}
