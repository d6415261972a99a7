pub mod routes;
pub mod store;
pub mod telemetry;
pub mod time;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use jiff::Span;
use secrecy::{ExposeSecret, SecretBox};
use std::net::TcpListener;
use std::sync::Mutex;

use crate::store::Store;
use crate::time::TimeSource;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    time_source: TimeSource,
) -> std::io::Result<Server> {
    let store = Store::seeded(
        &config.admin_email,
        config.admin_password.expose_secret(),
        Span::new().hours(config.token_ttl_hours),
        time_source.now(),
    );
    serve(config, time_source, store)
}

/// Like [`build`], but with a caller-prepared store.
pub fn serve(
    config: &mut Config,
    time_source: TimeSource,
    store: Store,
) -> std::io::Result<Server> {
    let store = web::Data::new(Mutex::new(store));
    let time_source = web::Data::new(time_source);

    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // Bearer tokens travel in a header, so no credentialed CORS needed
        let cors = if allowed_origins.iter().any(|o| o == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            let mut cors = Cors::default().allow_any_method().allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(store.clone())
            .app_data(time_source.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    pub admin_email: String,
    pub admin_password: SecretBox<String>,
    /// Lifetime of a bearer token issued at login.
    pub token_ttl_hours: i64,
}

pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 12;

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let token_ttl_hours = match var("TOKEN_TTL_HOURS") {
            Ok(hours) => hours
                .parse()
                .context("TOKEN_TTL_HOURS must be a whole number of hours")?,
            Err(_) => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Config {
            ip: var("IP_ADDRESS").context("IP_ADDRESS is not set")?,
            port: var("PORT")
                .context("PORT is not set")?
                .parse()
                .context("PORT must be a port number")?,
            allowed_origins,
            admin_email: var("ADMIN_EMAIL").context("ADMIN_EMAIL is not set")?,
            admin_password: SecretBox::new(Box::new(
                var("ADMIN_PASSWORD").context("ADMIN_PASSWORD is not set")?,
            )),
            token_ttl_hours,
        })
    }
}
