use anyhow::Result;
use fantoccini::Locator;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::framework::{self, TestEnvironment};

/// An unauthenticated visit to an admin page lands on the sign-in page with
/// the requested path carried along, and signing in goes back to it.
#[tokio::test]
#[ignore = "needs geckodriver and trunk"]
async fn test_guard_redirects_and_returns_after_login() -> Result<()> {
    let env = TestEnvironment::setup().await?;

    info!("🚪 Visiting the leads page without a token");
    env.goto("/admin/leads").await?;
    assert_eq!(
        env.current_path().await?,
        "/admin/login?redirect=/admin/leads"
    );

    framework::login_admin(
        &env.browser,
        &env.frontend_url,
        &test_helpers::admin_credentials(),
    )
    .await?;

    assert_eq!(env.current_path().await?, "/admin/leads");
    let token =
        framework::local_storage_item(&env.browser, session::TOKEN_KEY).await?;
    assert!(token.is_some_and(|t| !t.is_empty()));

    Ok(())
}

#[tokio::test]
#[ignore = "needs geckodriver and trunk"]
async fn test_wrong_password_stays_on_login() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.goto("/admin/login").await?;

    framework::fill_field(&env.browser, "email", test_helpers::ADMIN_EMAIL)
        .await?;
    framework::fill_field(&env.browser, "password", "not the password").await?;
    env.browser
        .find(Locator::Css("button[type='submit']"))
        .await?
        .click()
        .await?;
    sleep(Duration::from_secs(2)).await;

    assert_eq!(env.current_path().await?, "/admin/login");
    assert!(
        framework::local_storage_item(&env.browser, session::TOKEN_KEY)
            .await?
            .is_none()
    );
    Ok(())
}

/// Once the backend stops accepting the token, the next request signs the
/// admin out and sends them back to the sign-in page.
#[tokio::test]
#[ignore = "needs geckodriver and trunk"]
async fn test_expired_token_signs_out() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.api.submit_enquiry("Margaret Nguyen").await?;

    env.goto("/admin/login").await?;
    framework::login_admin(
        &env.browser,
        &env.frontend_url,
        &test_helpers::admin_credentials(),
    )
    .await?;
    assert_eq!(env.current_path().await?, "/admin/dashboard");

    info!("⏰ Expiring bearer tokens on the backend");
    env.api.expire_tokens();

    env.browser
        .find(Locator::LinkText("Enquiries"))
        .await?
        .click()
        .await?;
    sleep(Duration::from_secs(2)).await;

    assert!(env.current_path().await?.starts_with("/admin/login"));
    assert!(
        framework::local_storage_item(&env.browser, session::TOKEN_KEY)
            .await?
            .is_none()
    );

    // the sign-in form is back, not a stale "Signed in as" panel
    assert!(!env.page_text().await?.contains("Signed in as"));
    env.browser.find(Locator::Id("email")).await?;
    framework::login_admin(
        &env.browser,
        &env.frontend_url,
        &test_helpers::admin_credentials(),
    )
    .await?;
    assert!(!env.current_path().await?.starts_with("/admin/login"));
    Ok(())
}

#[tokio::test]
#[ignore = "needs geckodriver and trunk"]
async fn test_logout_clears_token() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.goto("/admin/login").await?;
    framework::login_admin(
        &env.browser,
        &env.frontend_url,
        &test_helpers::admin_credentials(),
    )
    .await?;

    env.browser
        .find(Locator::XPath("//button[contains(., 'Log out')]"))
        .await?
        .click()
        .await?;
    sleep(Duration::from_secs(1)).await;

    assert_eq!(env.current_path().await?, "/admin/login");
    assert!(
        framework::local_storage_item(&env.browser, session::TOKEN_KEY)
            .await?
            .is_none()
    );

    // the guard keeps the dashboard out of reach afterwards
    env.goto("/admin/dashboard").await?;
    assert_eq!(
        env.current_path().await?,
        "/admin/login?redirect=/admin/dashboard"
    );
    Ok(())
}
