use api::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber},
    time::TimeSource,
};

/// Home care reference API server
///
/// Environment variables can be set directly or loaded from a .env file in the project root.
///
/// Required environment variables:
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: Server port
/// - ADMIN_EMAIL: Login email of the administrator account
/// - ADMIN_PASSWORD: Password of the administrator account
///
/// Optional:
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin in development, or comma-separated list for production)
/// - TOKEN_TTL_HOURS: Bearer token lifetime, defaults to 12
///
/// Example .env file:
/// IP_ADDRESS=127.0.0.1
/// PORT=8000
/// ALLOWED_ORIGINS=*
/// ADMIN_EMAIL=admin@example.com
/// ADMIN_PASSWORD=change-me
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Silently ignored if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;

    #[cfg(not(feature = "mock-time"))]
    let time_source = TimeSource::new();
    #[cfg(feature = "mock-time")]
    let time_source = TimeSource::new(jiff::Timestamp::now());

    let server = build(&mut config, time_source)?;
    tracing::info!(ip = %config.ip, port = config.port, "listening");
    server.await?;
    Ok(())
}
