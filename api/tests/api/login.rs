use payloads::{TokenStore, requests};
use reqwest::StatusCode;

use test_helpers::{admin_credentials, assert_status_code, spawn_app};

#[tokio::test]
async fn login_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = requests::LoginCredentials {
        email: "random@example.com".into(),
        password: "random".into(),
    };
    let result = app.client.login(&body).await;

    match result {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::UNAUTHORIZED);
            assert_eq!(text, "Authentication failed: Invalid credentials");
        }
        _ => {
            panic!("Expected APIError");
        }
    }

    // wrong password for the right account
    let body = requests::LoginCredentials {
        password: "nope".into(),
        ..admin_credentials()
    };
    assert_status_code(app.client.login(&body).await, StatusCode::UNAUTHORIZED);

    assert_status_code(app.client.me().await, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn login_returns_token_and_user() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = app.client.login(&admin_credentials()).await?;
    let token = response.token.expect("token");
    let user = response.user.expect("user");
    assert!(!token.is_empty());
    assert_eq!(user.email, test_helpers::ADMIN_EMAIL);

    app.tokens.set(&token);
    let me = app.client.me().await?;
    assert_eq!(me, user);

    Ok(())
}

#[tokio::test]
async fn login_email_is_case_insensitive() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = requests::LoginCredentials {
        email: format!("  {}  ", test_helpers::ADMIN_EMAIL.to_uppercase()),
        ..admin_credentials()
    };
    let response = app.client.login(&body).await?;
    assert!(response.token.is_some());

    Ok(())
}

#[tokio::test]
async fn unknown_token_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.tokens.set("not-a-real-token");
    assert_status_code(app.client.me().await, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn token_expires() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    app.time_source.advance(jiff::Span::new().hours(11));
    app.client.me().await?;

    app.expire_tokens();
    assert_status_code(app.client.me().await, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn logout_revokes_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;
    app.client.me().await?;

    app.client.logout().await?;
    assert_status_code(app.client.me().await, StatusCode::UNAUTHORIZED);

    // logging out again with the revoked token still succeeds
    app.client.logout().await?;

    Ok(())
}

#[tokio::test]
async fn sessions_are_independent() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    let other = app.anonymous_client();
    let response = other.login(&admin_credentials()).await?;
    other.tokens.set(&response.token.expect("token"));

    other.logout().await?;
    assert_status_code(other.me().await, StatusCode::UNAUTHORIZED);
    app.client.me().await?;

    Ok(())
}
