//! Admin session context.
//!
//! [`AuthProvider`] owns one [`Session`] for the lifetime of the admin
//! shell, runs the initial auth check when it mounts and re-renders its
//! subtree whenever the session state changes, including when a page's
//! request is rejected with a 401.

use payloads::responses::User;
use session::{AuthState, Session, SessionError};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use yew::prelude::*;

use crate::{BrowserNavigator, auth_signal, get_api_client};

#[derive(Clone)]
pub struct AuthHandle {
    session: Rc<Session>,
    pub state: AuthState,
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && self.state == other.state
    }
}

impl AuthHandle {
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn loading_auth_check(&self) -> bool {
        self.state.loading_auth_check()
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    /// Log in and navigate to the requested admin page. The error is the
    /// caller's to show.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        self.session.login(email, password).await
    }

    pub fn logout(&self) {
        let session = self.session.clone();
        yew::platform::spawn_local(async move { session.logout().await });
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component]
pub fn AuthProvider(props: &AuthProviderProps) -> Html {
    let session = use_memo((), |_| {
        Session::new(get_api_client(), Arc::new(BrowserNavigator), auth_signal())
    });
    let state = use_state(|| session.state());

    {
        let session = session.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));

            let mut changes = session.subscribe();
            {
                let cancelled = cancelled.clone();
                yew::platform::spawn_local(async move {
                    loop {
                        let next = changes.borrow_and_update().clone();
                        if cancelled.get() {
                            break;
                        }
                        state.set(next);
                        if changes.changed().await.is_err() {
                            break;
                        }
                    }
                });
            }

            yew::platform::spawn_local(async move {
                session.check_auth_status().await;
            });

            move || cancelled.set(true)
        });
    }

    let context = AuthHandle {
        session: session.clone(),
        state: (*state).clone(),
    };

    html! {
        <ContextProvider<AuthHandle> {context}>
            {props.children.clone()}
        </ContextProvider<AuthHandle>>
    }
}

#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>()
        .expect("use_auth must be used within an AuthProvider")
}
