use payloads::TokenStore;
use session::{
    AuthSignal, AuthState, MemoryNavigator, Session, SessionError,
    SessionExpiry,
};
use std::sync::Arc;
use test_helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp, spawn_app};

/// A session over the app's client, wired with the 401 interceptor, sitting
/// at `location`.
fn session_at(app: &TestApp, location: &str) -> (Session, Arc<MemoryNavigator>) {
    let navigator = Arc::new(MemoryNavigator::at(location));
    let signal = AuthSignal::new();
    let client = intercepted_client(app, &navigator, &signal);
    (Session::new(client, navigator.clone(), signal), navigator)
}

/// The app's client with a 401 interceptor publishing to `signal`, as every
/// page-level client in the browser is built.
fn intercepted_client(
    app: &TestApp,
    navigator: &Arc<MemoryNavigator>,
    signal: &AuthSignal,
) -> payloads::APIClient {
    let expiry = Arc::new(SessionExpiry::new(
        app.tokens.clone(),
        navigator.clone(),
        signal.clone(),
    ));
    app.client.clone().with_unauthorized_handler(expiry)
}

#[tokio::test]
async fn no_token_settles_logged_out() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (session, navigator) = session_at(&app, "/admin/dashboard");
    assert!(session.loading_auth_check());

    session.check_auth_status().await;

    assert_eq!(session.state(), AuthState::LoggedOut);
    assert!(!session.loading_auth_check());
    // redirecting is the guard's job, not the check's
    assert!(navigator.history().is_empty());

    Ok(())
}

#[tokio::test]
async fn valid_token_settles_logged_in() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let user = app.login_admin().await?;
    let (session, _) = session_at(&app, "/admin/dashboard");

    session.check_auth_status().await;

    assert_eq!(session.state(), AuthState::LoggedIn(user));
    assert!(session.is_authenticated());

    Ok(())
}

#[tokio::test]
async fn invalid_token_is_cleared() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.tokens.set("bogus");
    let (session, navigator) = session_at(&app, "/admin/login");

    session.check_auth_status().await;

    assert_eq!(session.state(), AuthState::LoggedOut);
    assert_eq!(app.tokens.get(), None);
    assert!(navigator.history().is_empty());

    Ok(())
}

#[tokio::test]
async fn login_lands_on_dashboard() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (session, navigator) = session_at(&app, "/admin/login");

    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;

    assert!(session.is_authenticated());
    assert!(app.tokens.get().is_some());
    assert_eq!(navigator.location(), "/admin/dashboard");

    Ok(())
}

#[tokio::test]
async fn login_follows_redirect_param() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (session, navigator) =
        session_at(&app, "/admin/login?redirect=%2Fadmin%2Fleads");

    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;

    assert_eq!(navigator.history(), vec!["/admin/leads".to_string()]);

    Ok(())
}

#[tokio::test]
async fn login_ignores_foreign_redirect() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (session, navigator) = session_at(
        &app,
        "/admin/login?redirect=https%3A%2F%2Fevil.example%2Fadmin",
    );

    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;

    assert_eq!(navigator.location(), "/admin/dashboard");

    Ok(())
}

#[tokio::test]
async fn failed_login_settles_logged_out() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (session, navigator) = session_at(&app, "/admin/login");

    let result = session.login(ADMIN_EMAIL, "wrong").await;

    match result {
        Err(SessionError::Rejected(e)) => assert!(e.is_unauthorized()),
        other => panic!("expected a rejected login, got {other:?}"),
    }
    assert_eq!(session.state(), AuthState::LoggedOut);
    assert_eq!(app.tokens.get(), None);
    assert!(navigator.history().is_empty());

    Ok(())
}

#[tokio::test]
async fn expired_token_redirects_once() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;
    let (session, navigator) = session_at(&app, "/admin/leads");
    session.check_auth_status().await;
    assert!(session.is_authenticated());

    app.expire_tokens();

    // a burst of failing requests, as a page with several widgets would make
    assert!(session.client().leads().await.is_err());
    assert!(session.client().leads().await.is_err());
    assert!(session.client().me().await.is_err());

    assert_eq!(app.tokens.get(), None);
    assert_eq!(navigator.history(), vec!["/admin/login".to_string()]);
    assert_eq!(session.state(), AuthState::LoggedOut);

    Ok(())
}

#[tokio::test]
async fn new_login_rearms_expiry() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (session, navigator) = session_at(&app, "/admin/login");

    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    app.expire_tokens();
    assert!(session.client().leads().await.is_err());
    assert_eq!(navigator.location(), "/admin/login");

    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    app.expire_tokens();
    assert!(session.client().leads().await.is_err());

    assert_eq!(
        navigator.history(),
        vec![
            "/admin/dashboard".to_string(),
            "/admin/login".to_string(),
            "/admin/dashboard".to_string(),
            "/admin/login".to_string(),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn logout_clears_and_revokes() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (session, navigator) = session_at(&app, "/admin/login");
    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    let token = app.tokens.get().expect("token stored by login");

    session.logout().await;

    assert_eq!(session.state(), AuthState::LoggedOut);
    assert_eq!(app.tokens.get(), None);
    assert_eq!(navigator.location(), "/admin/login");

    let other = app.anonymous_client();
    other.tokens.set(&token);
    assert!(other.me().await.is_err_and(|e| e.is_unauthorized()));

    Ok(())
}

#[tokio::test]
async fn logout_succeeds_when_backend_forgot_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (session, navigator) = session_at(&app, "/admin/login");
    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    app.expire_tokens();

    session.logout().await;

    assert_eq!(session.state(), AuthState::LoggedOut);
    assert_eq!(navigator.location(), "/admin/login");

    Ok(())
}

#[tokio::test]
async fn late_check_does_not_override_logout() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;
    let (session, navigator) = session_at(&app, "/admin/dashboard");

    tokio::join!(session.check_auth_status(), session.logout());

    assert_eq!(session.state(), AuthState::LoggedOut);
    assert_eq!(app.tokens.get(), None);
    assert_eq!(navigator.location(), "/admin/login");

    Ok(())
}

#[tokio::test]
async fn subscribers_see_settled_state() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (session, _) = session_at(&app, "/admin/login");
    let mut states = session.subscribe();

    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;

    assert!(states.has_changed()?);
    assert!(states.borrow_and_update().is_authenticated());

    Ok(())
}

#[tokio::test]
async fn expired_token_signs_session_out() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (session, navigator) = session_at(&app, "/admin/login");
    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    assert!(session.is_authenticated());
    let mut states = session.subscribe();
    let _ = states.borrow_and_update();

    app.expire_tokens();
    assert!(session.client().leads().await.is_err());

    assert_eq!(app.tokens.get(), None);
    assert_eq!(navigator.location(), "/admin/login");
    assert_eq!(session.state(), AuthState::LoggedOut);
    assert!(!session.is_authenticated());
    assert!(states.has_changed()?);

    // the login form is usable again straight away
    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    assert!(session.is_authenticated());
    assert_eq!(navigator.location(), "/admin/dashboard");

    Ok(())
}

#[tokio::test]
async fn rejection_on_another_client_signs_session_out() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let navigator = Arc::new(MemoryNavigator::at("/admin/login"));
    let signal = AuthSignal::new();
    let session = Session::new(
        intercepted_client(&app, &navigator, &signal),
        navigator.clone(),
        signal.clone(),
    );
    session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;

    app.expire_tokens();
    let page_client = intercepted_client(&app, &navigator, &signal);
    assert!(page_client.leads().await.is_err());

    assert_eq!(session.state(), AuthState::LoggedOut);
    assert_eq!(app.tokens.get(), None);
    assert_eq!(
        navigator.history(),
        vec!["/admin/dashboard".to_string(), "/admin/login".to_string()]
    );

    Ok(())
}
