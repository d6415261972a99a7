//! Browser tests live in the `admin` and `site` modules and need
//! geckodriver and trunk on the PATH:
//!
//! ```shell
//! cargo test -p ui-tests -- --ignored
//! ```
//!
//! `cargo run -p ui-tests` instead seeds a development dataset and opens a
//! headed browser signed in to the admin dashboard for manual inspection.

#![cfg_attr(not(test), allow(dead_code))]

use anyhow::Result;
use tracing::info;

mod framework;

#[cfg(test)]
mod admin;
#[cfg(test)]
mod site;

use crate::framework::TestEnvironment;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting UI test environment");
    let env = TestEnvironment::setup_headed().await?;

    info!("📊 Creating development dataset");
    let dataset = test_helpers::mock::DevDataset::create(&env.api).await?;
    dataset.print_summary();

    framework::login_admin(
        &env.browser,
        &env.frontend_url,
        &test_helpers::admin_credentials(),
    )
    .await?;

    info!("🎯 You can now check:");
    info!("   • the public pages at {}", env.frontend_url);
    info!("   • services and enquiries in the admin dashboard");
    let current_url = env.browser.current_url().await?;
    info!("🌐 Browser is now open at: {}", current_url);
    info!("👋 Press Ctrl+C to exit and close the browser");

    tokio::signal::ctrl_c().await?;
    info!("📝 Received keyboard interrupt, shutting down...");
    Ok(())
}
