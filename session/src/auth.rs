use payloads::{APIClient, ClientError, requests, responses};
use std::sync::Arc;
use tokio::sync::watch;

use crate::{AuthSignal, AuthState, LOGIN_PATH, Navigator, REDIRECT_PARAM, guard};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{0}")]
    Rejected(#[from] ClientError),
    #[error("Login succeeded but no session token was returned")]
    MissingToken,
}

/// The admin session.
///
/// Owns the client (and through it the token store) and publishes every
/// state change on an [`AuthSignal`]. Each operation runs under a generation
/// number; when a newer operation has started, the results of an older one
/// are discarded instead of overwriting the newer state.
///
/// The client's [`SessionExpiry`](crate::SessionExpiry) should hold the same
/// signal, so a rejected token signs this session out.
pub struct Session {
    client: APIClient,
    navigator: Arc<dyn Navigator>,
    signal: AuthSignal,
}

impl Session {
    pub fn new(
        client: APIClient,
        navigator: Arc<dyn Navigator>,
        signal: AuthSignal,
    ) -> Self {
        Self {
            client,
            navigator,
            signal,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.signal.subscribe()
    }

    pub fn state(&self) -> AuthState {
        self.signal.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn loading_auth_check(&self) -> bool {
        self.state().loading_auth_check()
    }

    pub fn client(&self) -> &APIClient {
        &self.client
    }

    /// Validate the stored token against the backend.
    ///
    /// Never fails: any problem settles the session as logged out, and a
    /// token the backend refused is removed from the store.
    #[tracing::instrument(skip_all)]
    pub async fn check_auth_status(&self) {
        let generation = self.signal.begin();
        self.signal.publish(AuthState::Unknown);

        let Some(token) = self.client.tokens.get() else {
            tracing::debug!("no stored token");
            self.signal.settle(generation, AuthState::LoggedOut);
            return;
        };

        match self.client.me().await {
            Ok(user) => {
                tracing::debug!(email = %user.email, "session valid");
                self.signal.settle(generation, AuthState::LoggedIn(user));
            }
            Err(e) => {
                tracing::warn!("session check failed: {e}");
                self.client.tokens.clear_if(&token);
                self.signal.settle(generation, AuthState::LoggedOut);
            }
        }
    }

    /// Log in and move on to the requested admin page.
    ///
    /// On failure the session is forced to logged out and the error is
    /// returned for the caller to present.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        let generation = self.signal.begin();
        let credentials = requests::LoginCredentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let token = match self.client.login(&credentials).await {
            Ok(responses::LoginResponse {
                token: Some(token), ..
            }) if !token.is_empty() => token,
            Ok(_) => return Err(self.fail_login(generation, SessionError::MissingToken)),
            Err(e) => return Err(self.fail_login(generation, e.into())),
        };

        if !self.signal.is_current(generation) {
            tracing::debug!("login superseded, discarding token");
            return Ok(());
        }

        self.client.tokens.set(&token);
        self.check_auth_status().await;

        let target = guard::redirect_target(
            self.navigator.query_param(REDIRECT_PARAM).as_deref(),
        );
        tracing::info!(%target, "logged in");
        self.navigator.navigate(&target);
        Ok(())
    }

    /// Log out locally, telling the backend on a best-effort basis.
    #[tracing::instrument(skip_all)]
    pub async fn logout(&self) {
        self.signal.begin();

        if let Err(e) = self.client.logout().await {
            tracing::warn!("logout request failed: {e}");
        }

        self.client.tokens.clear();
        self.signal.publish(AuthState::LoggedOut);

        // a 401 from the logout call may already have moved us
        if !guard::is_login_path(&self.navigator.current_path()) {
            self.navigator.navigate(LOGIN_PATH);
        }
    }

    fn fail_login(&self, generation: u64, error: SessionError) -> SessionError {
        tracing::warn!("login failed: {error}");
        if self.signal.is_current(generation) {
            self.client.tokens.clear();
            self.signal.expire();
        }
        error
    }
}
