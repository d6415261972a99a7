//! Development server for UI work
//!
//! This binary runs the reference API with the seeded catalogue plus a
//! development dataset (extra listings and a backlog of enquiries), then keeps
//! the mocked clock in sync with real time so bearer tokens expire normally.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use jiff::Timestamp;
use std::time::Duration;
use test_helpers::mock::DevDataset;
use tokio::time::interval;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting home care development server");

    let app = test_helpers::spawn_app().await;

    info!("✅ API server running on http://127.0.0.1:{}", app.port);

    info!("📊 Setting up development data...");
    let dataset = DevDataset::create(&app).await?;

    start_time_sync_task(&app);
    info!("✅ Time sync active - mock time will follow real time");

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!(
        "   Admin login: {} / {}",
        test_helpers::ADMIN_EMAIL,
        test_helpers::ADMIN_PASSWORD
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}

/// Keep the mocked time source following the wall clock.
fn start_time_sync_task(app: &test_helpers::TestApp) {
    let time_source = app.time_source.clone();

    tokio::spawn(async move {
        let mut interval = interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            let real_now = Timestamp::now();
            time_source.set(real_now);

            if real_now.as_second() % 60 == 0 {
                tracing::debug!("synced mock time to {real_now}");
            }
        }
    });
}
