use anyhow::Result;
use fantoccini::Locator;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::framework::{self, TestEnvironment};

const POPUP_KEY: &str = "promo_popup_shown_at";
const POPUP_TITLE: &str = "Free in-home assessment";

async fn scroll_to_bottom(env: &TestEnvironment) -> Result<()> {
    env.browser
        .execute("window.scrollTo(0, document.body.scrollHeight);", vec![])
        .await?;
    Ok(())
}

#[tokio::test]
#[ignore = "needs geckodriver and trunk"]
async fn test_counters_count_up_to_their_targets() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.goto("/").await?;

    info!("📜 Scrolling the stats into view");
    scroll_to_bottom(&env).await?;
    sleep(Duration::from_secs(2)).await;

    let mut values = Vec::new();
    for counter in env.browser.find_all(Locator::Css(".counter")).await? {
        values.push(counter.text().await?);
    }
    assert_eq!(values, ["15", "4.9", "98", "120"]);
    Ok(())
}

#[tokio::test]
#[ignore = "needs geckodriver and trunk"]
async fn test_reveal_on_scroll() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.goto("/").await?;

    let figure = env.browser.find(Locator::Css(".reveal-image")).await?;
    let class = figure.attr("class").await?.unwrap_or_default();
    assert!(class.contains("animate__animated"), "hero figure: {class}");

    scroll_to_bottom(&env).await?;
    sleep(Duration::from_secs(1)).await;

    for element in env.browser.find_all(Locator::Css(".animate-on-scroll")).await? {
        let class = element.attr("class").await?.unwrap_or_default();
        if class.contains("zoomIn") {
            assert!(class.contains("animate__zoomIn"), "stat card: {class}");
        }
    }
    Ok(())
}

/// The promotional toast appears once and is then suppressed for a day.
#[tokio::test]
#[ignore = "needs geckodriver and trunk"]
async fn test_popup_shown_once() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.goto("/").await?;
    env.browser
        .execute("window.localStorage.clear();", vec![])
        .await?;
    env.browser.refresh().await?;

    sleep(Duration::from_secs(5)).await;
    assert!(env.page_text().await?.contains(POPUP_TITLE));
    assert!(framework::local_storage_item(&env.browser, POPUP_KEY)
        .await?
        .is_some());

    env.browser.refresh().await?;
    sleep(Duration::from_secs(5)).await;
    assert!(!env.page_text().await?.contains(POPUP_TITLE));

    info!("🕰️ Backdating the last showing past the window");
    framework::set_local_storage_item(
        &env.browser,
        POPUP_KEY,
        "2020-01-01T00:00:00Z",
    )
    .await?;
    env.browser.refresh().await?;
    sleep(Duration::from_secs(5)).await;
    assert!(env.page_text().await?.contains(POPUP_TITLE));
    Ok(())
}

#[tokio::test]
#[ignore = "needs geckodriver and trunk"]
async fn test_error_page_reads_query() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.goto("/error?status=503&message=Back+in+five+minutes").await?;

    let text = env.page_text().await?;
    assert!(text.contains("503"));
    assert!(text.contains("Server error"));
    assert!(text.contains("Back in five minutes"));

    env.goto("/error").await?;
    assert!(env.page_text().await?.contains("Something went wrong"));
    Ok(())
}
