use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

use crate::AuthState;

/// Where the session state lives, shared by the [`Session`](crate::Session)
/// and the [`SessionExpiry`](crate::SessionExpiry) interceptor so that a
/// rejected token signs the session out wherever the failing request came
/// from.
///
/// Every operation runs under a generation number. Starting a new one makes
/// the results of older ones stale.
#[derive(Clone)]
pub struct AuthSignal {
    state: Arc<watch::Sender<AuthState>>,
    generation: Arc<AtomicU64>,
}

impl AuthSignal {
    pub fn new() -> Self {
        let (state, _) = watch::channel(AuthState::Unknown);
        Self {
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Start a new generation, superseding any in flight.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Publish `state` unless `generation` has been superseded.
    pub fn settle(&self, generation: u64, state: AuthState) {
        if !self.is_current(generation) {
            tracing::debug!("dropping result of a superseded auth operation");
            return;
        }
        self.publish(state);
    }

    /// The token was rejected: drop whatever is in flight and sign out.
    pub fn expire(&self) {
        self.begin();
        self.publish(AuthState::LoggedOut);
    }

    pub(crate) fn publish(&self, next: AuthState) {
        self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

impl Default for AuthSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{UserId, responses::User};

    fn admin() -> AuthState {
        AuthState::LoggedIn(User {
            id: UserId(Default::default()),
            email: "admin@example.com".into(),
            name: "Admin".into(),
        })
    }

    #[test]
    fn test_expire_supersedes_in_flight_results() {
        let signal = AuthSignal::new();
        let generation = signal.begin();

        signal.expire();
        signal.settle(generation, admin());

        assert_eq!(signal.current(), AuthState::LoggedOut);
    }

    #[test]
    fn test_clones_share_state() {
        let signal = AuthSignal::new();
        let other = signal.clone();
        let changes = other.subscribe();

        let generation = signal.begin();
        signal.settle(generation, admin());
        other.expire();

        assert_eq!(signal.current(), AuthState::LoggedOut);
        assert_eq!(*changes.borrow(), AuthState::LoggedOut);
    }
}
